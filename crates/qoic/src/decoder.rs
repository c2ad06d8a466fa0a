/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::identity_op)]

use alloc::vec::Vec;

use qoic_core::bit_depth::BitDepth;
use qoic_core::bytestream::ZReader;
use qoic_core::colorspace::{ColorCharacteristics, ColorSpace};
use qoic_core::log::{debug, trace, warn};
use qoic_core::options::DecoderOptions;

use crate::cache::RunState;
use crate::constants::{
    QOI_HEADER_SIZE, QOI_MASK_2, QOI_OP_DIFF, QOI_OP_INDEX, QOI_OP_LUMA, QOI_OP_RGB, QOI_OP_RGBA,
    QOI_PADDING, QOI_PADDING_SIZE
};
use crate::errors::QoiErrors;
use crate::header::QoiHeader;

/// A Quite OK Image decoder
///
/// The decoder is initialized by calling `new`
/// and either of [`decode_headers`] to decode headers
/// or [`decode`] to return uncompressed pixels
///
/// Additional methods are provided that give more
/// details of the compressed image like width and height
/// are accessible after decoding headers
///
/// [`decode_headers`]:QoiDecoder::decode_headers
/// [`decode`]:QoiDecoder::decode
pub struct QoiDecoder<T>
where
    T: AsRef<[u8]>
{
    header:          QoiHeader,
    out_colorspace:  ColorSpace,
    decoded_headers: bool,
    stream:          ZReader<T>,
    options:         DecoderOptions
}

impl<T> QoiDecoder<T>
where
    T: AsRef<[u8]>
{
    /// Create a new QOI format decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    ///
    /// # Returns
    /// - A decoder instance which will on calling `decode` will decode
    /// data
    /// # Example
    ///
    /// ```no_run
    /// let mut decoder = qoic::QoiDecoder::new(&[0_u8; 0]);
    /// // additional code
    /// ```
    pub fn new(data: T) -> QoiDecoder<T> {
        QoiDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a new QOI format decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The compressed qoi data
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use qoic_core::options::DecoderOptions;
    /// use qoic::QoiDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = QoiDecoder::new_with_options(&[0_u8; 0], options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: T, options: DecoderOptions) -> QoiDecoder<T> {
        QoiDecoder {
            header:          QoiHeader::new(0, 0, 0, 0),
            out_colorspace:  ColorSpace::RGB,
            decoded_headers: false,
            stream:          ZReader::new(data),
            options:         options
        }
    }
    /// Decode a QOI header storing needed information into
    /// the decoder instance
    ///
    /// Nothing is allocated before the header is known to be valid
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers
    ///     error type will be an instance of [QoiErrors]
    ///
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode_headers(&mut self) -> Result<(), QoiErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        // a previous failed attempt may have moved past the header
        self.stream.set_position(0);

        let minimum = QOI_HEADER_SIZE + QOI_PADDING_SIZE;

        if self.stream.len() < minimum {
            return Err(QoiErrors::InsufficientData(minimum, self.stream.len()));
        }

        let header_bytes = self.stream.read_fixed_bytes_or_error::<QOI_HEADER_SIZE>()?;
        let header = QoiHeader::from_bytes(&header_bytes)?;

        let (width, height) = (header.width as usize, header.height as usize);

        if width > self.options.get_max_width() {
            return Err(QoiErrors::TooLargeDimensions {
                dimension: "width",
                found:     width,
                max:       self.options.get_max_width()
            });
        }

        if height > self.options.get_max_height() {
            return Err(QoiErrors::TooLargeDimensions {
                dimension: "height",
                found:     height,
                max:       self.options.get_max_height()
            });
        }

        let stored_colorspace = header
            .colorspace()
            .ok_or(QoiErrors::UnknownChannels(header.channels))?;

        self.out_colorspace = self
            .options
            .get_out_colorspace()
            .unwrap_or(stored_colorspace);
        self.header = header;

        trace!("Image width: {:?}", width);
        trace!("Image height: {:?}", height);
        trace!("Image colorspace:{:?}", stored_colorspace);
        trace!("Output colorspace:{:?}", self.out_colorspace);
        self.decoded_headers = true;

        Ok(())
    }
    /// Return the number of bytes required to hold a decoded image frame
    /// decoded using the given input transformations
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image was not decoded or the size overflows a usize
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.header
                .image_size(self.out_colorspace.num_components())
        } else {
            None
        }
    }

    /// Decode the bytes of a QOI image data, returning the
    /// uncompressed bytes or  the error encountered during decoding
    ///
    /// Additional details about the encoded image can be found after calling this/[`decode_headers`]
    ///
    /// i.e the width and height. can be accessed by [`dimensions`] method.
    ///
    /// # Returns
    /// - On success: The decoded bytes, `width*height*channels` long
    /// - On error: An instance of [QoiErrors] which gives a reason why the image could not
    /// be decoded
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    /// [QoiErrors]:crate::errors::QoiErrors
    pub fn decode(&mut self) -> Result<Vec<u8>, QoiErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(QoiErrors::GenericStatic("Image size overflows usize"))?;

        let mut output = Vec::new();
        output
            .try_reserve_exact(size)
            .map_err(|_| QoiErrors::AllocationFailed(size))?;
        output.resize(size, 0);

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a compressed Qoi image and store the contents
    /// into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the contents
    /// of the buffer
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    /// pixels
    ///
    /// returns: Result<(), QoiErrors>
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), QoiErrors> {
        self.decode_headers()?;

        let size = self
            .output_buffer_size()
            .ok_or(QoiErrors::GenericStatic("Image size overflows usize"))?;

        if pixels.len() < size {
            return Err(QoiErrors::TooSmallOutput(size, pixels.len()));
        }

        match self.out_colorspace.num_components() {
            3 => self.decode_inner_generic::<3>(&mut pixels[..size])?,
            4 => self.decode_inner_generic::<4>(&mut pixels[..size])?,
            _ => unreachable!()
        }
        Ok(())
    }

    fn decode_inner_generic<const SIZE: usize>(
        &mut self, pixels: &mut [u8]
    ) -> Result<(), QoiErrors> {
        // chunks never start inside the end marker, but their
        // payload may run into it
        let chunks_end = self.stream.len() - QOI_PADDING_SIZE;
        // allows decoding the same stream more than once
        self.stream.set_position(QOI_HEADER_SIZE);

        let mut state = RunState::new();

        for pix_chunk in pixels.chunks_exact_mut(SIZE) {
            let mut px = state.previous;

            if state.run > 0 {
                // inside a run, the pixel and the history stay as they are
                state.run -= 1;
            } else if self.stream.position() < chunks_end {
                let chunk = self.stream.get_u8();

                // 8 bit tags first, 0xfe and 0xff would otherwise read as runs
                if chunk == QOI_OP_RGB {
                    let packed_bytes = self.stream.get_fixed_bytes_or_zero::<3>();

                    px[0] = packed_bytes[0];
                    px[1] = packed_bytes[1];
                    px[2] = packed_bytes[2];
                } else if chunk == QOI_OP_RGBA {
                    px = self.stream.get_fixed_bytes_or_zero::<4>();
                } else {
                    match chunk & QOI_MASK_2 {
                        QOI_OP_INDEX => {
                            px = state.index.get(chunk);
                        }
                        QOI_OP_DIFF => {
                            px[0] = px[0].wrapping_add(((chunk >> 4) & 0x03).wrapping_sub(2));
                            px[1] = px[1].wrapping_add(((chunk >> 2) & 0x03).wrapping_sub(2));
                            px[2] = px[2].wrapping_add(((chunk >> 0) & 0x03).wrapping_sub(2));
                        }
                        QOI_OP_LUMA => {
                            let b2 = self.stream.get_u8();
                            let vg = (chunk & 0x3f).wrapping_sub(32);

                            px[0] = px[0]
                                .wrapping_add(vg.wrapping_sub(8).wrapping_add((b2 >> 4) & 0x0f));
                            px[1] = px[1].wrapping_add(vg);
                            px[2] = px[2]
                                .wrapping_add(vg.wrapping_sub(8).wrapping_add((b2 >> 0) & 0x0f));
                        }
                        // QOI_OP_RUN, this pixel is the first of the run
                        _ => {
                            state.run = chunk & 0x3f;
                        }
                    }
                }
                // an index hit is already where it belongs
                if chunk & QOI_MASK_2 != QOI_OP_INDEX {
                    state.index.insert(px);
                }
            }

            // copy pixel
            pix_chunk.copy_from_slice(&px[0..SIZE]);

            state.previous = px;
        }

        if self.stream.position() < chunks_end {
            debug!(
                "{} bytes of chunk data left after the last pixel",
                chunks_end - self.stream.position()
            );
        }

        self.stream.set_position(chunks_end);
        let trailer = self.stream.read_fixed_bytes_or_error::<QOI_PADDING_SIZE>()?;

        if trailer != QOI_PADDING {
            if self.options.get_strict_mode() {
                return Err(QoiErrors::InvalidTrailer(trailer));
            }
            warn!("Last bytes do not match QOI end marker, found {:?}", trailer);
        }

        debug!("Finished decoding {} pixels", self.header.pixel_count());

        Ok(())
    }

    /// Returns the colorspace decoded pixels are returned in, or none if the
    /// headers haven't been decoded
    ///
    /// This is the image's own colorspace unless
    /// [`DecoderOptions::set_out_colorspace`] asked for another one
    ///
    /// # Returns
    /// - `Some(Colorspace)`: The colorspace present
    /// -  `None` : This indicates the image header wasn't decoded hence
    ///   colorspace is unknown
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.out_colorspace)
        } else {
            None
        }
    }
    /// Returns the transfer characteristics stored in the image
    pub const fn color_characteristics(&self) -> Option<ColorCharacteristics> {
        if self.decoded_headers {
            self.header.characteristics()
        } else {
            None
        }
    }
    /// Return QOI default bit depth
    ///
    /// This is always 8
    ///
    /// # Returns
    /// - [`BitDepth::Eight`]
    ///
    /// # Example
    ///
    /// ```
    /// use qoic_core::bit_depth::BitDepth;
    /// use qoic::QoiDecoder;
    /// let decoder = QoiDecoder::new(&[0_u8; 0]);
    /// assert_eq!(decoder.bit_depth(),BitDepth::Eight)
    /// ```
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the parsed image header, or `None` if it hasn't been decoded
    pub const fn header(&self) -> Option<QoiHeader> {
        if self.decoded_headers {
            return Some(self.header);
        }
        None
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Returns
    /// - `Some(width,height)` - If headers are decoded, this will return the stored
    /// width and height for that image
    /// - `None`: This indicates the image headers weren't decoded or an error
    /// occurred when decoding headers
    /// # Example
    ///
    /// ```no_run
    /// use qoic::QoiDecoder;
    /// let mut decoder = QoiDecoder::new(&[0_u8; 0]);
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w,h)=decoder.dimensions().unwrap();
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.header.width as usize, self.header.height as usize));
        }
        None
    }
}

/// Decode a whole QOI stream into a newly allocated pixel buffer
///
/// `channels` picks the layout of the returned pixels: `3` (RGB), `4` (RGBA)
/// or `0` for whatever the header declares. The returned header is the one
/// stored in the stream.
///
/// # Example
/// ```
/// use qoic::{decode, encode, QoiHeader};
///
/// let header = QoiHeader::new(2, 1, 3, 0);
/// let stream = encode(&[1, 2, 3, 4, 5, 6], &header).unwrap();
///
/// let (pixels, stored) = decode(&stream, 4).unwrap();
/// assert_eq!(pixels, [1, 2, 3, 255, 4, 5, 6, 255]);
/// assert_eq!(stored, header);
/// ```
pub fn decode(data: &[u8], channels: u8) -> Result<(Vec<u8>, QoiHeader), QoiErrors> {
    let out_colorspace = match channels {
        0 => None,
        3 | 4 => ColorSpace::from_components(channels),
        _ => return Err(QoiErrors::UnsupportedOutputChannels(channels))
    };
    let options = DecoderOptions::default().set_out_colorspace(out_colorspace);

    let mut decoder = QoiDecoder::new_with_options(data, options);
    let pixels = decoder.decode()?;

    match decoder.header() {
        Some(header) => Ok((pixels, header)),
        None => Err(QoiErrors::GenericStatic("Header missing after decoding"))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use qoic_core::colorspace::ColorSpace;
    use qoic_core::options::DecoderOptions;

    use crate::{decode, encode, QoiDecoder, QoiErrors, QoiHeader};

    fn stream(header: QoiHeader, chunks: &[u8]) -> Vec<u8> {
        let mut data = header.to_bytes().to_vec();
        data.extend_from_slice(chunks);
        data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
        data
    }

    #[test]
    fn test_qoi_decode_chunks() {
        let data = stream(
            QoiHeader::new(6, 1, 4, 0),
            &[
                0xFE, 10, 20, 30,       // RGB
                0x7F,                   // DIFF +1 +1 +1
                0x80 | 32, 0x88,        // LUMA, no change
                0xFF, 1, 2, 3, 4,       // RGBA
                0xC1                    // RUN of 2
            ]
        );
        let (pixels, header) = decode(&data, 0).unwrap();
        assert_eq!(header.channels, 4);
        assert_eq!(
            pixels,
            [
                10, 20, 30, 255, 11, 21, 31, 255, 11, 21, 31, 255, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3,
                4
            ]
        );
    }

    #[test]
    fn test_index_reads_history() {
        let a = [100_u8, 0, 0, 255];
        // slot of a is 33
        let data = stream(
            QoiHeader::new(3, 1, 4, 0),
            &[0xFE, 100, 0, 0, 0xFE, 0, 100, 0, 33]
        );
        let (pixels, _) = decode(&data, 4).unwrap();
        assert_eq!(&pixels[8..], &a);
    }

    #[test]
    fn test_high_index_slots_are_not_rgb() {
        // 0x3e and 0x3f are INDEX chunks, 0xfe and 0xff are not runs
        let data = stream(QoiHeader::new(2, 1, 4, 0), &[0x3E, 0x3F]);
        let (pixels, _) = decode(&data, 4).unwrap();
        assert_eq!(pixels, [0; 8]);
    }

    #[test]
    fn test_channel_conversion() {
        let header = QoiHeader::new(2, 1, 4, 1);
        let data = encode(&[1, 2, 3, 4, 5, 6, 7, 8], &header).unwrap();

        let (rgb, stored) = decode(&data, 3).unwrap();
        assert_eq!(rgb, [1, 2, 3, 5, 6, 7]);
        assert_eq!(stored, header);

        let mut decoder = QoiDecoder::new_with_options(
            &data,
            DecoderOptions::default().set_out_colorspace(Some(ColorSpace::RGB))
        );
        decoder.decode_headers().unwrap();
        assert_eq!(decoder.colorspace(), Some(ColorSpace::RGB));
        assert_eq!(decoder.output_buffer_size(), Some(6));
    }

    #[test]
    fn test_short_stream_repeats_last_pixel() {
        // one chunk for a 4 pixel image
        let data = stream(QoiHeader::new(4, 1, 3, 0), &[0xFE, 7, 8, 9]);
        let (pixels, _) = decode(&data, 3).unwrap();
        assert_eq!(pixels, [7_u8, 8, 9].repeat(4));
    }

    #[test]
    fn test_rejects_bad_streams() {
        assert!(matches!(
            decode(b"qoif", 0),
            Err(QoiErrors::InsufficientData(22, 4))
        ));

        let mut data = stream(QoiHeader::new(1, 1, 3, 0), &[0xC0]);
        data[0] = b'x';
        assert!(matches!(decode(&data, 0), Err(QoiErrors::WrongMagicBytes)));

        let data = stream(QoiHeader::new(40_000, 40_000, 3, 0), &[0xC0]);
        let err = decode(&data, 0).unwrap_err();
        assert!(err.is_format_error());
        assert!(matches!(err, QoiErrors::TooManyPixels(40_000, 40_000)));

        let data = stream(QoiHeader::new(1, 1, 3, 0), &[0xC0]);
        assert!(matches!(
            decode(&data, 2),
            Err(QoiErrors::UnsupportedOutputChannels(2))
        ));
    }

    #[test]
    fn test_dimension_limits() {
        let data = stream(QoiHeader::new(64, 1, 3, 0), &[0xFD, 0xC1]);
        let mut decoder =
            QoiDecoder::new_with_options(&data, DecoderOptions::default().set_max_width(32));

        assert!(matches!(
            decoder.decode(),
            Err(QoiErrors::TooLargeDimensions { found: 64, max: 32, .. })
        ));
        assert!(decoder.dimensions().is_none());
        // retrying reports the same error instead of parsing chunk bytes as a header
        assert!(matches!(
            decoder.decode_headers(),
            Err(QoiErrors::TooLargeDimensions { found: 64, max: 32, .. })
        ));
        assert!(matches!(
            decoder.decode(),
            Err(QoiErrors::TooLargeDimensions { found: 64, max: 32, .. })
        ));
    }

    #[test]
    fn test_run_start_updates_history() {
        // a run of the start pixel stores it in slot 53, INDEX 53 reads it back
        let data = stream(
            QoiHeader::new(3, 1, 4, 0),
            &[0xC0, 0xFE, 9, 9, 9, 53]
        );
        let (pixels, _) = decode(&data, 4).unwrap();
        assert_eq!(pixels, [0, 0, 0, 255, 9, 9, 9, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn test_index_does_not_write_history() {
        // [64, 0, 0, 0] hashes to slot 0. INDEX 5 yields the initial
        // [0, 0, 0, 0], which also hashes to slot 0 but must not replace it
        let data = stream(
            QoiHeader::new(3, 1, 4, 0),
            &[0xFF, 64, 0, 0, 0, 0x05, 0x00]
        );
        let (pixels, _) = decode(&data, 4).unwrap();
        assert_eq!(pixels, [64, 0, 0, 0, 0, 0, 0, 0, 64, 0, 0, 0]);
    }

    #[test]
    fn test_trailer_strictness() {
        let mut data = stream(QoiHeader::new(1, 1, 3, 0), &[0xC0]);
        let last = data.len() - 1;
        data[last] = 0;

        assert!(decode(&data, 0).is_ok());

        let mut decoder =
            QoiDecoder::new_with_options(&data, DecoderOptions::default().set_strict_mode(true));
        assert!(matches!(decoder.decode(), Err(QoiErrors::InvalidTrailer(_))));
    }

    #[test]
    fn test_decode_into_small_buffer() {
        let data = stream(QoiHeader::new(2, 2, 3, 0), &[0xC3]);
        let mut decoder = QoiDecoder::new(&data);
        let mut output = [0_u8; 11];

        assert!(matches!(
            decoder.decode_into(&mut output),
            Err(QoiErrors::TooSmallOutput(12, 11))
        ));
        // decoding twice gives the same pixels
        let first = decoder.decode().unwrap();
        assert_eq!(first, decoder.decode().unwrap());
        assert_eq!(first, [0; 12]);
    }
}
