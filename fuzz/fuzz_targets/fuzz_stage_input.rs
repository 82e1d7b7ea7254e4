//! Fuzz target for upstream payload intake.
//!
//! Goal: The intake path should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_stage_input
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = trustgate_intake::fuzz::parse_architect_payload(text);
    let _ = trustgate_intake::fuzz::parse_intent_payload(text);

    // Split on the first NUL so one input can drive both payloads.
    let (architect, intent) = text.split_once('\0').unwrap_or((text, "{}"));
    let _ = trustgate_intake::fuzz::build_from_text(architect, intent);
});
