#![no_main]

use libfuzzer_sys::fuzz_target;
use seedphrase_core::{entropy_from_mnemonic, mnemonic_from_entropy};

fuzz_target!(|data: &[u8]| {
    match mnemonic_from_entropy(data) {
        Ok(mnemonic) => {
            let decoded = entropy_from_mnemonic(&mnemonic).unwrap();
            assert_eq!(decoded.as_slice(), data);
        }
        Err(_) => assert!(!matches!(data.len(), 16 | 20 | 24 | 28 | 32)),
    }
});
