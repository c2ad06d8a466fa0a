/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding and encoding Quite Ok Image format
//!
//! [Format Specification](https://qoiformat.org/qoi-specification.pdf)
//!
//! QOI compresses 8-bit RGB and RGBA images losslessly into a
//! 14 byte header, a run of chunks and an 8 byte end marker.
//!
//! # Features
//! - Decoding and encoding
//! - Decoding into RGB or RGBA regardless of the stored channel count
//! -`no_std`
//! - Fuzz tested
//!
//! # Example
//! ```
//! use qoic::{decode, encode, QoiHeader};
//!
//! let pixels = [255_u8, 0, 0, 255, 0, 0, 0, 255, 0];
//! let header = QoiHeader::new(3, 1, 3, 0);
//!
//! let stream = encode(&pixels, &header).unwrap();
//! let (decoded, stored) = decode(&stream, 0).unwrap();
//!
//! assert_eq!(decoded, pixels);
//! assert_eq!(stored, header);
//! ```
//!
//! ## `no_std`
//! You can use `no_std` with alloc feature to compile for `no_std` endpoints

#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use cache::{color_hash, PixelHistory, RunState};
pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use header::QoiHeader;
pub use qoic_core;

mod cache;
pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod header;
