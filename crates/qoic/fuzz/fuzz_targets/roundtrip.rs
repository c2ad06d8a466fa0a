#![no_main]

use libfuzzer_sys::fuzz_target;
use qoic::QoiHeader;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1 {
        let channels = if data[0] & 1 == 0 { 3 } else { 4 };
        let pixels = &data[1..];

        let width = pixels.len() / usize::from(channels);
        if width == 0 {
            return;
        }
        let pixels = &pixels[..width * usize::from(channels)];
        let header = QoiHeader::new(width as u32, 1, channels, data[0] >> 7);

        let stream = qoic::encode(pixels, &header).expect("Failed to encode valid pixels!");
        let (decoded, stored) =
            qoic::decode(&stream, channels).expect("Failed to decode encoded image!");

        assert_eq!(stored, header);
        assert!(
            decoded == pixels,
            "The decoded pixels don't match the original pixels!"
        );
    }
});
