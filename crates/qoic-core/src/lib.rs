/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the qoic crates
//!
//! This crate provides the plumbing the QOI codec builds on
//!
//! It currently contains
//!
//! - An in-memory bytestream reader and writer with endian aware reads and writes
//! - Colorspace and bit depth information shared by images
//! - Image decoder and encoder options
//! - Logging macros that forward to the `log` crate when enabled
//!
//! This library is `#[no_std]` with `alloc` needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables `std::error::Error` implementations.
//!
//!  - `log`: Routes the logging macros to the [log](https://docs.rs/log) facade,
//!     otherwise they compile to nothing
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
