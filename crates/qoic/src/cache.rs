/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel history shared by the encoder and the decoder
//!
//! A 64 slot direct mapped table, a pixel lives in slot `hash(pixel) % 64`
//! and a newer pixel with the same slot replaces it.

/// Slot of a pixel in the history table
///
/// `(r * 3 + g * 5 + b * 7 + a * 11) % 64`
#[inline(always)]
pub const fn color_hash(px: &[u8; 4]) -> usize {
    // max sum is 255 * 26, no overflow in usize
    (px[0] as usize * 3 + px[1] as usize * 5 + px[2] as usize * 7 + px[3] as usize * 11) % 64
}

/// Recently seen pixels, indexed by [`color_hash`]
///
/// Starts out with all slots holding `[0, 0, 0, 0]`
#[derive(Clone)]
pub struct PixelHistory {
    slots: [[u8; 4]; 64]
}

impl PixelHistory {
    pub const fn new() -> PixelHistory {
        PixelHistory {
            slots: [[0; 4]; 64]
        }
    }
    /// Pixel stored in `slot`, only the low 6 bits of `slot` are used
    #[inline(always)]
    pub const fn get(&self, slot: u8) -> [u8; 4] {
        self.slots[(slot & 63) as usize]
    }
    /// Store `px` in its slot, overwriting whatever was there,
    /// and return the slot
    #[inline(always)]
    pub fn insert(&mut self, px: [u8; 4]) -> usize {
        let slot = color_hash(&px);
        self.slots[slot] = px;
        slot
    }
    /// Return the slot of `px` if the table holds it,
    /// otherwise store it and return `None`
    #[inline(always)]
    pub fn find_or_insert(&mut self, px: [u8; 4]) -> Option<u8> {
        let slot = color_hash(&px);

        if self.slots[slot] == px {
            return Some(slot as u8);
        }
        self.slots[slot] = px;
        None
    }
}

impl Default for PixelHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// State carried from one pixel to the next during a single
/// encode or decode pass
///
/// Created fresh for every image, never shared between passes.
pub struct RunState {
    /// Last pixel emitted or reconstructed
    pub previous: [u8; 4],
    /// Pending run length (encoder) or pixels left in the current run (decoder)
    pub run:      u8,
    pub index:    PixelHistory
}

impl RunState {
    pub const fn new() -> RunState {
        RunState {
            previous: crate::constants::QOI_START_PIXEL,
            run:      0,
            index:    PixelHistory::new()
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
