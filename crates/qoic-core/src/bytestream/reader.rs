/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised by the bytestream reader and writer
pub enum ZByteIoError {
    /// Requested more bytes than the stream holds
    ///
    /// (requested, available)
    NotEnoughBytes(usize, usize),
    /// The sink cannot hold the bytes to be written
    ///
    /// (requested, available)
    NotEnoughBuffer(usize, usize),
    /// The allocator refused to give us the requested number of bytes
    AllocationFailed(usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ZByteIoError::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// An in-memory byte reader with support for
/// endian aware reads
///
/// Reads come in two flavours, ones that return an error when the
/// stream cannot satisfy them (`or_error`) and ones that
/// return zero instead, for hot loops where bounds are validated up front.
pub struct ZReader<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZReader<T> {
    /// Create a new reader positioned at the start of `source`
    pub fn new(source: T) -> ZReader<T> {
        ZReader {
            stream:   source,
            position: 0
        }
    }
    /// Total number of bytes in the underlying source
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stream.as_ref().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Current read offset from the start of the source
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Number of bytes between the current position and the end
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }
    /// Move to `position` bytes from the start, clamped to the end of the stream
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.len());
    }
    /// Read a single byte, or `0` if the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Read exactly `N` bytes or error out without moving the position
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];

        match self.stream.as_ref().get(self.position..self.position + N) {
            Some(bytes) => {
                byte_store.copy_from_slice(bytes);
                self.position += N;
                Ok(byte_store)
            }
            None => Err(ZByteIoError::NotEnoughBytes(N, self.remaining()))
        }
    }
    /// Read `N` bytes, bytes past the end of the stream are read as zero
    #[inline(always)]
    pub fn get_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        let mut byte_store: [u8; N] = [0; N];

        for byte in byte_store.iter_mut() {
            *byte = self.get_u8();
        }
        byte_store
    }

    /// Read a big endian `u32`, missing bytes are read as zero
    #[inline(always)]
    pub fn get_u32_be(&mut self) -> u32 {
        u32::from_be_bytes(self.get_fixed_bytes_or_zero::<4>())
    }
}
