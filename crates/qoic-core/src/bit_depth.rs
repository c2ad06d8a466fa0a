/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The image bit depth.
///
/// QOI only stores 8 bits per channel, so this is the only
/// depth the codec accepts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Images with such bit depth use [`u8`] to store
    /// pixels and use the whole range from 0-255.
    #[default]
    Eight
}

impl BitDepth {
    /// Size of a single channel sample in bytes
    ///
    /// # Example
    /// ```
    /// use qoic_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Eight.size_of(), 1);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => core::mem::size_of::<u8>()
        }
    }
}
