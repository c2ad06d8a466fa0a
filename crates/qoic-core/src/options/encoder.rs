/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bit_depth::BitDepth;
use crate::colorspace::{ColorCharacteristics, ColorSpace};

/// Options shared by encoders
///
/// Describes the pixels handed to the encoder.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:           usize,
    height:          usize,
    colorspace:      ColorSpace,
    depth:           BitDepth,
    characteristics: ColorCharacteristics
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width:           0,
            height:          0,
            colorspace:      ColorSpace::RGB,
            depth:           BitDepth::Eight,
            characteristics: ColorCharacteristics::sRGB
        }
    }
}

impl EncoderOptions {
    /// Create new encode options
    ///
    /// # Arguments
    ///
    /// * `width`: Image width
    /// * `height`: Image height
    /// * `colorspace`:  Image colorspaces
    /// * `depth`: Image depth
    ///
    /// returns: EncoderOptions
    pub fn new(
        width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            colorspace,
            depth,
            ..Default::default()
        }
    }
    /// Get the width for which the image will be encoded in
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get height for which the image will be encoded in
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Get the depth for which the image will be encoded in
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the colorspace for which the image will be encoded in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Get the color characteristics recorded in the image
    pub const fn characteristics(&self) -> ColorCharacteristics {
        self.characteristics
    }

    /// Set the color characteristics recorded alongside the pixels.
    ///
    /// The encoder stores this verbatim, it does not touch pixel values
    #[must_use]
    pub fn set_characteristics(mut self, characteristics: ColorCharacteristics) -> Self {
        self.characteristics = characteristics;
        self
    }
}
