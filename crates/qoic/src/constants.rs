/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tags and fixed values of the QOI byte stream

// 00xxxxxx
pub const QOI_OP_INDEX: u8 = 0x00;
// 01xxxxxx
pub const QOI_OP_DIFF: u8 = 0x40;
// 10xxxxxx
pub const QOI_OP_LUMA: u8 = 0x80;
// 11xxxxxx
pub const QOI_OP_RUN: u8 = 0xc0;
// 11111110
pub const QOI_OP_RGB: u8 = 0xfe;
// 11111111
pub const QOI_OP_RGBA: u8 = 0xff;

pub const QOI_MASK_2: u8 = 0xc0; // (11)000000

pub const QOI_MAGIC: [u8; 4] = *b"qoif";
pub const QOI_HEADER_SIZE: usize = 14;
pub const QOI_PADDING: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
pub const QOI_PADDING_SIZE: usize = QOI_PADDING.len();

/// Upper bound on `width * height` a stream may declare
pub const QOI_PIXELS_MAX: u32 = 400_000_000;

/// Longest run a single QOI_OP_RUN chunk can hold,
/// lengths 63 and 64 would collide with the RGB and RGBA tags
pub const QOI_MAX_RUN: u8 = 62;

/// Every encode and decode starts from this pixel
pub const QOI_START_PIXEL: [u8; 4] = [0, 0, 0, 255];
