/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};

/// Generate a deterministic `width * height` image with `channels` bytes per pixel
///
/// Horizontal gradients broken up by flat bands and sparse noise, so that
/// every chunk type shows up in the encoded stream
pub fn sample_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut rand = WyRand::new_seed(0x0051_4f49);
    let mut pixels = Vec::with_capacity(width * height * channels);

    for y in 0..height {
        let flat = (y / 16) % 3 == 0;

        for x in 0..width {
            let mut px = if flat {
                [(y % 256) as u8, 90, 200, 255]
            } else {
                [(x % 256) as u8, ((x + y) % 256) as u8, (y % 256) as u8, 255]
            };
            if rand.generate_range(0_u8..32) == 0 {
                rand.fill(&mut px[..3]);
            }
            if channels == 4 && x % 64 == 0 {
                px[3] = rand.generate();
            }
            pixels.extend_from_slice(&px[..channels]);
        }
    }
    pixels
}
