/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use qoic_core::bit_depth::BitDepth;
use qoic_core::bytestream::{ZByteWriterTrait, ZWriter};
use qoic_core::colorspace::ColorCharacteristics;
use qoic_core::log::{debug, trace};
use qoic_core::options::EncoderOptions;

use crate::cache::RunState;
use crate::constants::{
    QOI_HEADER_SIZE, QOI_MAX_RUN, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB,
    QOI_OP_RGBA, QOI_OP_RUN, QOI_PADDING, QOI_PADDING_SIZE, QOI_START_PIXEL
};
use crate::errors::{QoiEncodeErrors, QoiErrors};
use crate::header::QoiHeader;

/// Quite Ok Image Encoder
///
///
/// # Example
/// - Encode a 100 by 100 RGB image
///
/// ```
/// use qoic_core::bit_depth::BitDepth;
/// use qoic_core::colorspace::ColorSpace;
/// use qoic_core::options::EncoderOptions;
/// use qoic::QoiEncoder;
/// use qoic::QoiEncodeErrors;
///
/// const W:usize=100;
/// const H:usize=100;
///
/// fn main()->Result<(), QoiEncodeErrors>{
///     let pixels = std::array::from_fn::<u8,{W * H * 3},_>(|i| (i%256) as u8);
///     let mut encoder = QoiEncoder::new(&pixels,EncoderOptions::new(W,H,ColorSpace::RGB,BitDepth::Eight));
///     let mut sink: Vec<u8> = vec![];
///     let size = encoder.encode(&mut sink)?;
///     assert_eq!(size, sink.len());
///     Ok(())
///}
/// ```
pub struct QoiEncoder<'a> {
    // raw pixels, in RGB or RBGA
    pixel_data: &'a [u8],
    options:    EncoderOptions
}

impl<'a> QoiEncoder<'a> {
    /// Create a new encoder which will encode the pixels
    ///
    /// # Arguments
    /// - data: Pixel data, size must be equal to `width*height*colorspace channels`
    /// - options: Encoder details for data, this contains width, height and number of color components
    #[allow(clippy::redundant_field_names)]
    pub const fn new(data: &'a [u8], options: EncoderOptions) -> QoiEncoder<'a> {
        QoiEncoder {
            pixel_data: data,
            options:    options
        }
    }
    /// Record the transfer characteristics in the header's colorspace byte
    pub fn set_color_characteristics(&mut self, characteristics: ColorCharacteristics) {
        self.options = self.options.set_characteristics(characteristics);
    }

    /// Return the maximum size for which the encoder can safely
    /// encode the image without fearing for an out of space error
    pub fn max_size(&self) -> usize {
        self.options
            .width()
            .saturating_mul(self.options.height())
            .saturating_mul(self.options.colorspace().num_components() + 1)
            .saturating_add(QOI_HEADER_SIZE + QOI_PADDING_SIZE)
    }

    /// Build and validate the header describing the pixels
    pub fn header(&self) -> Result<QoiHeader, QoiEncodeErrors> {
        let options = &self.options;

        if options.depth() != BitDepth::Eight {
            return Err(QoiEncodeErrors::Generic("QOI only encodes 8 bit images"));
        }
        if (options.width() as u64) > u64::from(u32::MAX) {
            // error out
            return Err(QoiEncodeErrors::TooLargeDimensions(options.width()));
        }
        if (options.height() as u64) > u64::from(u32::MAX) {
            return Err(QoiEncodeErrors::TooLargeDimensions(options.height()));
        }
        // it's safe to convert to u32 here. since we checked
        // the number can be safely encoded.
        let header = QoiHeader::new(
            options.width() as u32,
            options.height() as u32,
            options.colorspace().num_components() as u8,
            options.characteristics().to_u8()
        );
        header.validate().map_err(|err| match err {
            QoiErrors::ZeroDimensions => QoiEncodeErrors::ZeroDimensions,
            QoiErrors::TooManyPixels(..) => {
                QoiEncodeErrors::TooManyPixels(options.width(), options.height())
            }
            QoiErrors::UnknownChannels(channels) => QoiEncodeErrors::UnknownChannels(channels),
            QoiErrors::UnknownColorspace(colorspace) => {
                QoiEncodeErrors::UnknownColorspace(colorspace)
            }
            _ => QoiEncodeErrors::Generic("Invalid image description")
        })?;

        Ok(header)
    }

    /// Encode the image into `sink`
    ///
    /// The sink is asked to reserve [`max_size`](Self::max_size) bytes before
    /// anything is written, a refused allocation is reported as
    /// [`QoiEncodeErrors::AllocationFailed`]
    ///
    /// A `&mut [u8]` sink cannot grow. If it fills up part way, the error is
    /// returned but the bytes already written stay in the slice, so the slice
    /// must not be read as an image. Size it with [`max_size`](Self::max_size)
    /// to never run out.
    ///
    /// # Arguments.
    /// - sink: Where to write encoded content to
    ///
    /// # Returns
    /// - Ok(size): Actual bytes used for encoding
    /// - Err: The error encountered during encoding
    pub fn encode<T: ZByteWriterTrait>(&mut self, sink: T) -> Result<usize, QoiEncodeErrors> {
        if self.pixel_data.is_empty() {
            return Err(QoiEncodeErrors::EmptyInput);
        }
        let header = self.header()?;

        let channel_count = usize::from(header.channels);
        let expected_len = header.pixel_count() * channel_count;

        if self.pixel_data.len() != expected_len {
            return Err(QoiEncodeErrors::LengthMismatch(
                expected_len,
                self.pixel_data.len()
            ));
        }
        trace!("Image width: {:?}", header.width);
        trace!("Image height: {:?}", header.height);
        trace!("Image colorspace:{:?}", self.options.colorspace());

        let mut stream = ZWriter::new(sink);

        stream.reserve(self.max_size())?;
        stream.write_const_bytes(&header.to_bytes())?;

        let mut state = RunState::new();

        match channel_count {
            3 => encode_pixels::<3, T>(self.pixel_data, &mut state, &mut stream)?,
            4 => encode_pixels::<4, T>(self.pixel_data, &mut state, &mut stream)?,
            _ => unreachable!()
        }
        // write trailing bytes
        stream.write_const_bytes(&QOI_PADDING)?;
        stream.flush()?;
        // done
        let len = stream.bytes_written();

        debug!("Encoded {} pixels into {len} bytes", header.pixel_count());

        Ok(len)
    }
}

/// Emit the chunks for every pixel in `pixels`
///
/// `pixels` must hold a whole number of `SIZE` byte pixels and at least one
fn encode_pixels<const SIZE: usize, T: ZByteWriterTrait>(
    pixels: &[u8], state: &mut RunState, stream: &mut ZWriter<T>
) -> Result<(), QoiEncodeErrors> {
    // 3 channel images keep the alpha of the start pixel
    let mut px = QOI_START_PIXEL;

    let last_pixel = pixels.len() / SIZE - 1;

    for (position, pix_chunk) in pixels.chunks_exact(SIZE).enumerate() {
        px[0..SIZE].copy_from_slice(pix_chunk);

        if px == state.previous {
            state.run += 1;

            if state.run == QOI_MAX_RUN || position == last_pixel {
                stream.write_u8_err(QOI_OP_RUN | (state.run - 1))?;
                state.run = 0;
            }
        } else {
            if state.run > 0 {
                stream.write_u8_err(QOI_OP_RUN | (state.run - 1))?;
                state.run = 0;
            }

            if let Some(index_pos) = state.index.find_or_insert(px) {
                stream.write_u8_err(QOI_OP_INDEX | index_pos)?;
            } else if px[3] == state.previous[3] {
                let px_prev = state.previous;

                let vr = px[0].wrapping_sub(px_prev[0]);
                let vg = px[1].wrapping_sub(px_prev[1]);
                let vb = px[2].wrapping_sub(px_prev[2]);

                let vg_r = vr.wrapping_sub(vg);
                let vg_b = vb.wrapping_sub(vg);

                // ranges are on the wrapped u8 values,
                // outside 2..=253 means -2..=1 as i8
                if !(2..=253).contains(&vr)
                    && !(2..=253).contains(&vg)
                    && !(2..=253).contains(&vb)
                {
                    stream.write_u8_err(
                        QOI_OP_DIFF
                            | vr.wrapping_add(2) << 4
                            | vg.wrapping_add(2) << 2
                            | vb.wrapping_add(2)
                    )?;
                } else if !(8..=247).contains(&vg_r)
                    && !(32..=223).contains(&vg)
                    && !(8..=247).contains(&vg_b)
                {
                    stream.write_const_bytes(&[
                        QOI_OP_LUMA | vg.wrapping_add(32),
                        vg_r.wrapping_add(8) << 4 | vg_b.wrapping_add(8)
                    ])?;
                } else {
                    stream.write_const_bytes(&[QOI_OP_RGB, px[0], px[1], px[2]])?;
                }
            } else {
                stream.write_const_bytes(&[QOI_OP_RGBA, px[0], px[1], px[2], px[3]])?;
            }
        }

        state.previous = px;
    }
    Ok(())
}

/// Encode `pixels` described by `header` into a newly allocated QOI stream
///
/// `pixels` holds `width * height` pixels of `header.channels` bytes each,
/// row major, top to bottom.
///
/// # Example
/// ```
/// use qoic::{encode, QoiHeader};
///
/// let pixels = [10_u8, 20, 30, 255].repeat(3);
/// let stream = encode(&pixels, &QoiHeader::new(1, 3, 4, 0)).unwrap();
/// assert_eq!(stream.len(), 14 + 4 + 1 + 8);
/// ```
pub fn encode(pixels: &[u8], header: &QoiHeader) -> Result<Vec<u8>, QoiEncodeErrors> {
    header.validate().map_err(|err| match err {
        QoiErrors::ZeroDimensions => QoiEncodeErrors::ZeroDimensions,
        QoiErrors::TooManyPixels(width, height) => {
            QoiEncodeErrors::TooManyPixels(width as usize, height as usize)
        }
        QoiErrors::UnknownChannels(channels) => QoiEncodeErrors::UnknownChannels(channels),
        QoiErrors::UnknownColorspace(colorspace) => QoiEncodeErrors::UnknownColorspace(colorspace),
        _ => QoiEncodeErrors::Generic("Invalid image description")
    })?;
    // validate guarantees both are present
    let (Some(colorspace), Some(characteristics)) =
        (header.colorspace(), header.characteristics())
    else {
        return Err(QoiEncodeErrors::Generic("Invalid image description"));
    };
    let options = EncoderOptions::new(
        header.width as usize,
        header.height as usize,
        colorspace,
        BitDepth::Eight
    )
    .set_characteristics(characteristics);

    let mut output = Vec::new();
    QoiEncoder::new(pixels, options).encode(&mut output)?;

    Ok(output)
}
