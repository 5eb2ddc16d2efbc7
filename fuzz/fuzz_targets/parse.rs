#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = std::str::from_utf8(data).unwrap_or("");
    let _ = parse_duration::parse::<parse_duration::Nanoseconds>(s);
    let _ = parse_duration::parse::<parse_duration::Hours>(s);
});
