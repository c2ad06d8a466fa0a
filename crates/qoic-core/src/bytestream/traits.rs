/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for writing images in qoic
//!
//! This exposes the sink trait and its implementations for
//! in-memory buffers.

use alloc::vec::Vec;

use crate::bytestream::reader::ZByteIoError;

/// The writer trait implemented for qoic encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ZByteWriterTrait {
    /// Write a fixed number of bytes and error out if we can't write the bytes
    ///
    /// This will always write all bytes, if it can't fully write all bytes, it will
    /// error out without writing anything
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError>;
    /// Ensure bytes are written to the sink.
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError>;

    /// Tell the implementation how many bytes we are about to write at most.
    ///
    /// An implementation like in memory `Vec` uses this to allocate once up front
    /// so that the encoding pass never reallocates, and reports a refused
    /// allocation as [`ZByteIoError::AllocationFailed`].
    ///
    /// Implementations that cannot allocate (e.g mutable slices) return `Ok(())`
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError>;
}

impl ZByteWriterTrait for &mut [u8] {
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        if N > self.len() {
            return Err(ZByteIoError::NotEnoughBuffer(N, self.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(N);
        a.copy_from_slice(buf);
        *self = b;
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

impl ZByteWriterTrait for &mut Vec<u8> {
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }
    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.try_reserve_exact(size)
            .map_err(|_| ZByteIoError::AllocationFailed(size))
    }
}
