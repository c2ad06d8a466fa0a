/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

use qoic_core::bytestream::ZByteIoError;

/// Possible Errors that may occur during decoding
pub enum QoiErrors {
    /// The image does not start with QOI magic bytes `qoif`
    ///
    /// Indicates that image is not a qoi file
    WrongMagicBytes,
    /// The input buffer doesn't have enough bytes to fully
    /// reconstruct the image
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually present
    InsufficientData(usize, usize),
    /// The header contains an invalid channel number
    ///
    /// The only supported types are `3` and `4`
    UnknownChannels(u8),
    /// The header contains an invalid colorspace value
    ///
    /// The should be `0` or `1`
    UnknownColorspace(u8),
    /// Width or height is zero
    ZeroDimensions,
    /// `width * height` reaches the format's pixel cap
    ///
    /// (width, height)
    TooManyPixels(u32, u32),
    /// The image is larger than the limits configured in
    /// [`DecoderOptions`](qoic_core::options::DecoderOptions)
    TooLargeDimensions {
        /// "width" or "height"
        dimension: &'static str,
        found:     usize,
        max:       usize
    },
    /// The caller asked for a channel count other than `0`, `3` or `4`
    UnsupportedOutputChannels(u8),
    /// To small output size
    TooSmallOutput(usize, usize),
    /// The stream does not end with the eight byte QOI end marker.
    ///
    /// Only raised in strict mode
    InvalidTrailer([u8; 8]),
    /// The output buffer of the given size could not be allocated
    AllocationFailed(usize),
    /// Generic message does not need heap allocation
    GenericStatic(&'static str),
    IoErrors(ZByteIoError)
}

impl QoiErrors {
    /// Whether this error comes from a malformed or out of bounds header
    ///
    /// These are raised before any pixel is decoded
    pub const fn is_format_error(&self) -> bool {
        matches!(
            self,
            QoiErrors::WrongMagicBytes
                | QoiErrors::UnknownChannels(_)
                | QoiErrors::UnknownColorspace(_)
                | QoiErrors::ZeroDimensions
                | QoiErrors::TooManyPixels(..)
                | QoiErrors::TooLargeDimensions { .. }
        )
    }
}

impl Debug for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiErrors::WrongMagicBytes => {
                writeln!(f, "Wrong magic bytes, expected `qoif` as image start")
            }
            QoiErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data required {expected} but remaining stream has {found}"
                )
            }
            QoiErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiErrors::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must both be greater than zero")
            }
            QoiErrors::TooManyPixels(width, height) => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed the QOI limit of {} pixels",
                    crate::constants::QOI_PIXELS_MAX
                )
            }
            QoiErrors::TooLargeDimensions {
                dimension,
                found,
                max
            } => {
                writeln!(
                    f,
                    "Image {dimension} {found} greater than max configured {dimension} {max}"
                )
            }
            QoiErrors::UnsupportedOutputChannels(channels) => {
                writeln!(
                    f,
                    "Cannot decode into {channels} channels, expected 0, 3 or 4"
                )
            }
            QoiErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            QoiErrors::InvalidTrailer(found) => {
                writeln!(f, "Last bytes {found:?} do not match QOI end marker")
            }
            QoiErrors::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for the decoded image")
            }
            QoiErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            QoiErrors::IoErrors(value) => {
                writeln!(f, "I/O error {:?}", value)
            }
        }
    }
}

impl From<&'static str> for QoiErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl From<ZByteIoError> for QoiErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::AllocationFailed(size) => QoiErrors::AllocationFailed(size),
            ZByteIoError::NotEnoughBytes(expected, found) => {
                QoiErrors::InsufficientData(expected, found)
            }
            value => QoiErrors::IoErrors(value)
        }
    }
}
/// Errors encountered during encoding
pub enum QoiEncodeErrors {
    /// The pixel buffer is empty
    EmptyInput,
    /// Pixel buffer length does not match `width * height * channels`
    ///
    /// (expected, found)
    LengthMismatch(usize, usize),
    /// The header descriptor carries a channel count other than 3 or 4
    UnknownChannels(u8),
    /// The header descriptor carries a colorspace tag other than 0 or 1
    UnknownColorspace(u8),
    /// Width or height is zero
    ZeroDimensions,
    /// Too large dimensions
    /// The dimensions cannot be correctly encoded to a width
    TooLargeDimensions(usize),
    /// `width * height` reaches the format's pixel cap
    TooManyPixels(usize, usize),
    /// The output buffer of the given size could not be allocated
    AllocationFailed(usize),

    Generic(&'static str),

    IoError(ZByteIoError)
}

impl Debug for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            QoiEncodeErrors::EmptyInput => {
                writeln!(f, "Cannot encode an empty pixel buffer")
            }
            QoiEncodeErrors::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected pixel buffer of {expected} bytes, but found {found}"
                )
            }
            QoiEncodeErrors::UnknownChannels(channel) => {
                writeln!(
                    f,
                    "Unknown channel number {channel}, expected either 3 or 4"
                )
            }
            QoiEncodeErrors::UnknownColorspace(colorspace) => {
                writeln!(
                    f,
                    "Unknown colorspace number {colorspace}, expected either 0 or 1"
                )
            }
            QoiEncodeErrors::ZeroDimensions => {
                writeln!(f, "Image width and height must both be greater than zero")
            }
            QoiEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, QOI can only encode images less than {}",
                    u32::MAX
                )
            }
            QoiEncodeErrors::TooManyPixels(width, height) => {
                writeln!(
                    f,
                    "Image dimensions {width}x{height} exceed the QOI limit of {} pixels",
                    crate::constants::QOI_PIXELS_MAX
                )
            }
            QoiEncodeErrors::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes for the encoded image")
            }
            QoiEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
            QoiEncodeErrors::IoError(v) => {
                writeln!(f, "I/O error {:?}", v)
            }
        }
    }
}

impl Display for QoiEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}
impl Display for QoiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QoiEncodeErrors {}

#[cfg(feature = "std")]
impl std::error::Error for QoiErrors {}

impl From<ZByteIoError> for QoiEncodeErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::AllocationFailed(size) => QoiEncodeErrors::AllocationFailed(size),
            value => Self::IoError(value)
        }
    }
}
