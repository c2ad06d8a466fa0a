/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use qoic::qoic_core::bit_depth::BitDepth;
use qoic::qoic_core::colorspace::ColorSpace;
use qoic::qoic_core::options::{DecoderOptions, EncoderOptions};
use qoic::{decode, encode, QoiDecoder, QoiEncoder, QoiHeader};

/// Pixels drawn from a small palette so runs, index hits
/// and small deltas all show up
fn palette_image(rand: &mut WyRand, pixels: usize, channels: usize) -> Vec<u8> {
    let mut palette = vec![0_u8; 8 * channels];
    rand.fill(&mut palette);

    let mut output: Vec<u8> = Vec::with_capacity(pixels * channels);
    let mut current = 0;

    for _ in 0..pixels {
        match rand.generate_range(0_u8..10) {
            // keep the previous pixel, grows runs
            0..=3 => {}
            // nudge the previous pixel by a small amount
            4..=5 if !output.is_empty() => {
                let start = output.len() - channels;
                let mut px = output[start..].to_vec();
                for c in px.iter_mut().take(3) {
                    *c = c.wrapping_add(rand.generate_range(0_u8..5)).wrapping_sub(2);
                }
                output.extend_from_slice(&px);
                continue;
            }
            _ => current = rand.generate_range(0_usize..8)
        }
        output.extend_from_slice(&palette[current * channels..(current + 1) * channels]);
    }
    output
}

fn check_roundtrip(pixels: &[u8], header: QoiHeader) {
    let stream = encode(pixels, &header).unwrap();

    let (decoded, stored) = decode(&stream, header.channels).unwrap();

    assert_eq!(stored, header);
    assert_eq!(decoded, pixels);
}

#[test]
fn test_roundtrip_noise() {
    let mut rand = WyRand::new_seed(0x5151);

    for (width, height) in [(1, 1), (1, 63), (17, 9), (64, 64), (301, 7)] {
        for channels in [3_u8, 4] {
            let mut pixels = vec![0_u8; width * height * usize::from(channels)];
            rand.fill(&mut pixels);

            check_roundtrip(
                &pixels,
                QoiHeader::new(width as u32, height as u32, channels, 0)
            );
        }
    }
}

#[test]
fn test_roundtrip_structured() {
    let mut rand = WyRand::new_seed(42);

    for (width, height) in [(3, 1), (128, 40), (1000, 3)] {
        for channels in [3_u8, 4] {
            for colorspace in [0_u8, 1] {
                let pixels = palette_image(&mut rand, width * height, usize::from(channels));
                check_roundtrip(
                    &pixels,
                    QoiHeader::new(width as u32, height as u32, channels, colorspace)
                );
            }
        }
    }
}

#[test]
fn test_roundtrip_long_runs() {
    // runs longer than a single RUN chunk can hold, split at odd offsets
    let mut pixels = [7_u8, 7, 7, 7].repeat(200);
    pixels.extend([8_u8, 8, 8, 0].repeat(63));
    pixels.extend([0_u8, 0, 0, 255].repeat(124));

    check_roundtrip(&pixels, QoiHeader::new(387, 1, 4, 0));
}

#[test]
fn test_encoder_struct_matches_one_shot() {
    let mut rand = WyRand::new_seed(7);
    let pixels = palette_image(&mut rand, 50 * 20, 4);

    let options = EncoderOptions::new(50, 20, ColorSpace::RGBA, BitDepth::Eight);
    let mut sink: Vec<u8> = vec![];
    let written = QoiEncoder::new(&pixels, options).encode(&mut sink).unwrap();

    assert_eq!(written, sink.len());
    assert_eq!(sink, encode(&pixels, &QoiHeader::new(50, 20, 4, 0)).unwrap());
}

#[test]
fn test_encode_into_fixed_buffer() {
    let mut rand = WyRand::new_seed(11);
    let pixels = palette_image(&mut rand, 32 * 32, 3);

    let options = EncoderOptions::new(32, 32, ColorSpace::RGB, BitDepth::Eight);
    let mut encoder = QoiEncoder::new(&pixels, options);

    let mut buffer = vec![0_u8; encoder.max_size()];
    let written = encoder.encode(buffer.as_mut_slice()).unwrap();

    let mut decoder = QoiDecoder::new(&buffer[..written]);
    assert_eq!(decoder.decode().unwrap(), pixels);
}

#[test]
fn test_decode_with_other_channel_count() {
    let mut rand = WyRand::new_seed(3);
    let rgba = palette_image(&mut rand, 40 * 10, 4);

    let stream = encode(&rgba, &QoiHeader::new(40, 10, 4, 1)).unwrap();

    let mut decoder = QoiDecoder::new_with_options(
        &stream,
        DecoderOptions::default().set_out_colorspace(Some(ColorSpace::RGB))
    );
    let rgb = decoder.decode().unwrap();

    let expected: Vec<u8> = rgba
        .chunks_exact(4)
        .flat_map(|px| px[..3].to_vec())
        .collect();
    assert_eq!(rgb, expected);
    assert_eq!(decoder.header().map(|h| h.channels), Some(4));
}
