/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// The writer keeps count of how many bytes went into the sink
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use qoic_core::bytestream::ZWriter;
    /// let mut sink: Vec<u8> = vec![];
    /// let mut stream = ZWriter::new(&mut sink);
    /// stream.write_u8_err(1).unwrap();
    /// assert_eq!(stream.bytes_written(), 1);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }
    /// Hint the sink that at most `size` bytes are going to be written
    pub fn reserve(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(size)
    }
    #[inline(always)]
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }
    /// Write a single byte into the bytestream or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use qoic_core::bytestream::ZWriter;
    /// let mut buf = [0;10];
    /// let mut stream  =  ZWriter::new(&mut buf[..]);
    /// assert!(stream.write_u8_err(34).is_ok());
    /// ```
    /// No space
    /// ```
    /// use qoic_core::bytestream::ZWriter;
    /// let mut buf: [u8; 0] = [];
    /// let mut stream = ZWriter::new(&mut buf[..]);
    /// assert!(stream.write_u8_err(32).is_err());
    /// ```
    #[inline(always)]
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&[byte])
    }
    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}
