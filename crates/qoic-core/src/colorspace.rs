/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// Pixel layouts a QOI stream can carry.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    /// Red, Green , Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    /// Map a channel count to its colorspace
    ///
    /// Returns `None` for anything other than `3` or `4`
    ///
    /// # Example
    /// ```
    /// use qoic_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_components(4), Some(ColorSpace::RGBA));
    /// assert_eq!(ColorSpace::from_components(2), None);
    /// ```
    pub const fn from_components(components: u8) -> Option<ColorSpace> {
        match components {
            3 => Some(Self::RGB),
            4 => Some(Self::RGBA),
            _ => None
        }
    }
}

/// Color characteristics
///
/// Gives more information about values in a certain
/// colorspace.
///
/// This is metadata only, pixels are never transformed based on it
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ColorCharacteristics {
    /// sRGB with linear alpha
    #[default]
    sRGB,
    /// All channels linear
    Linear
}

impl ColorCharacteristics {
    /// The value stored in the colorspace byte of a QOI header
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::sRGB => 0,
            Self::Linear => 1
        }
    }

    /// Parse the colorspace byte of a QOI header
    pub const fn from_u8(value: u8) -> Option<ColorCharacteristics> {
        match value {
            0 => Some(Self::sRGB),
            1 => Some(Self::Linear),
            _ => None
        }
    }
}
