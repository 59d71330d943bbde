#![no_main]

use libfuzzer_sys::fuzz_target;
use seedphrase_core::{entropy_from_mnemonic, mnemonic_from_entropy};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must decode to Ok or Err, never panic.
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(entropy) = entropy_from_mnemonic(s) {
            // Anything accepted re-encodes to the same words
            let words: Vec<&str> = s.split_whitespace().collect();
            assert_eq!(mnemonic_from_entropy(&entropy).unwrap(), words.join(" "));
        }
    }
});
