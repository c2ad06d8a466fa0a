#![no_main]

use libfuzzer_sys::fuzz_target;
use qoic::qoic_core::options::DecoderOptions;

fuzz_target!(|data: &[u8]| {
    // keep allocations small, the header alone can ask for 400 million pixels
    let options = DecoderOptions::default()
        .set_max_width(4096)
        .set_max_height(4096);

    let mut decoder = qoic::QoiDecoder::new_with_options(data, options);
    let _ = decoder.decode();
});
