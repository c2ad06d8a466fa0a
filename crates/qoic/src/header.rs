/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The 14 byte QOI header
//!
//! ```text
//! offset  size  field
//!   0      4    magic "qoif"
//!   4      4    width, big endian
//!   8      4    height, big endian
//!  12      1    channels, 3 or 4
//!  13      1    colorspace, 0 (sRGB with linear alpha) or 1 (all linear)
//! ```
use qoic_core::bytestream::ZReader;
use qoic_core::colorspace::{ColorCharacteristics, ColorSpace};

use crate::constants::{QOI_HEADER_SIZE, QOI_MAGIC, QOI_PADDING_SIZE, QOI_PIXELS_MAX};
use crate::errors::QoiErrors;

/// Image description carried by a QOI header
///
/// `colorspace` is stored and restored, never used to alter pixels
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct QoiHeader {
    pub width:      u32,
    pub height:     u32,
    pub channels:   u8,
    pub colorspace: u8
}

impl QoiHeader {
    pub const fn new(width: u32, height: u32, channels: u8, colorspace: u8) -> QoiHeader {
        QoiHeader {
            width,
            height,
            channels,
            colorspace
        }
    }

    /// Check the bounds every QOI image must satisfy
    ///
    /// - `channels` is 3 or 4
    /// - `colorspace` is 0 or 1
    /// - width and height are non zero
    /// - `width * height` stays below 400 million pixels
    pub fn validate(&self) -> Result<(), QoiErrors> {
        if ColorSpace::from_components(self.channels).is_none() {
            return Err(QoiErrors::UnknownChannels(self.channels));
        }
        if ColorCharacteristics::from_u8(self.colorspace).is_none() {
            return Err(QoiErrors::UnknownColorspace(self.colorspace));
        }
        if self.width == 0 || self.height == 0 {
            return Err(QoiErrors::ZeroDimensions);
        }
        // division keeps this from overflowing
        if self.height >= QOI_PIXELS_MAX / self.width {
            return Err(QoiErrors::TooManyPixels(self.width, self.height));
        }
        Ok(())
    }

    /// Serialize the header into its 14 byte on-disk form
    ///
    /// # Example
    /// ```
    /// use qoic::QoiHeader;
    /// let header = QoiHeader::new(2, 2, 4, 1);
    /// assert_eq!(&header.to_bytes()[..4], b"qoif");
    /// ```
    pub fn to_bytes(&self) -> [u8; QOI_HEADER_SIZE] {
        let mut bytes = [0; QOI_HEADER_SIZE];

        bytes[0..4].copy_from_slice(&QOI_MAGIC);
        bytes[4..8].copy_from_slice(&self.width.to_be_bytes());
        bytes[8..12].copy_from_slice(&self.height.to_be_bytes());
        bytes[12] = self.channels;
        bytes[13] = self.colorspace;

        bytes
    }

    /// Parse and validate a header from the first 14 bytes of `data`
    ///
    /// Fails on wrong magic bytes or when [`validate`](Self::validate) fails
    pub fn from_bytes(data: &[u8]) -> Result<QoiHeader, QoiErrors> {
        if data.len() < QOI_HEADER_SIZE {
            return Err(QoiErrors::InsufficientData(QOI_HEADER_SIZE, data.len()));
        }
        let mut stream = ZReader::new(data);

        let magic = stream.read_fixed_bytes_or_error::<4>()?;

        if magic != QOI_MAGIC {
            return Err(QoiErrors::WrongMagicBytes);
        }
        // length was checked above so use the non failing routines
        let width = stream.get_u32_be();
        let height = stream.get_u32_be();
        let channels = stream.get_u8();
        let colorspace = stream.get_u8();

        let header = QoiHeader::new(width, height, channels, colorspace);
        header.validate()?;

        Ok(header)
    }

    /// Pixel layout of the image, `None` if channels is neither 3 nor 4
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        ColorSpace::from_components(self.channels)
    }

    /// Transfer characteristics recorded in the header
    pub const fn characteristics(&self) -> Option<ColorCharacteristics> {
        ColorCharacteristics::from_u8(self.colorspace)
    }

    /// Number of pixels in the image
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes needed to hold the image with `channels` bytes per pixel
    pub fn image_size(&self, channels: usize) -> Option<usize> {
        self.pixel_count().checked_mul(channels)
    }

    /// Worst case size of the encoded stream
    ///
    /// Every pixel as a 5 byte RGBA chunk (4 byte RGB for 3 channels)
    /// plus header and end marker
    pub fn max_encoded_size(&self) -> Option<usize> {
        self.image_size(usize::from(self.channels) + 1)?
            .checked_add(QOI_HEADER_SIZE + QOI_PADDING_SIZE)
    }
}
