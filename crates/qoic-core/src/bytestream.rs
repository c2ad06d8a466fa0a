/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! This module contains two main structs that help in
//! byte reading and byte writing
//!
//! Both operate on in-memory buffers, the codec never performs I/O.
pub use reader::*;
pub use traits::*;
pub use writer::*;

mod reader;
mod traits;
mod writer;
