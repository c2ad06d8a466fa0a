/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global Decoder options

use crate::colorspace::ColorSpace;

/// Decoder options
///
/// Options are set through consuming builder methods
///
/// ```
/// use qoic_core::colorspace::ColorSpace;
/// use qoic_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_out_colorspace(Some(ColorSpace::RGBA));
/// assert_eq!(options.get_max_width(), 1024);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: `u32::MAX`, the format's pixel cap still applies
    max_width:      usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: `u32::MAX`, the format's pixel cap still applies
    max_height:     usize,
    /// treat some warnings as errors
    ///
    /// When set to false, this logs errors via the log crate.
    ///
    /// When set to true, this will return an `Result<Err>` on exception.
    ///
    /// - Default value: false
    strict_mode:    bool,
    /// Output colorspace
    ///
    /// `None` keeps whatever the image header declares
    ///
    /// - Default value: `None`
    out_colorspace: Option<ColorSpace>
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Get the colorspace the decoded pixels should be returned in
    ///
    /// `None` means the colorspace stored in the image
    pub const fn get_out_colorspace(&self) -> Option<ColorSpace> {
        self.out_colorspace
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    ///
    /// This reduces the error tolerance level for the decoders and
    /// recoverable deviations will be rejected by the decoder
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set the colorspace decoded pixels should be returned in
    ///
    /// Pass `None` to keep the colorspace stored in the image
    #[must_use]
    pub fn set_out_colorspace(mut self, colorspace: Option<ColorSpace>) -> Self {
        self.out_colorspace = colorspace;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      u32::MAX as usize,
            max_height:     u32::MAX as usize,
            strict_mode:    false,
            out_colorspace: None
        }
    }
}
