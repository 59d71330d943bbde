//! Security-specific tests.
//!
//! These tests verify:
//! 1. Malformed inputs are rejected without panicking
//! 2. Errors never echo secret material
//! 3. Secrets handed out by the API are wiped on drop
//! 4. Random bit flips in a valid mnemonic are caught by the checksum

use rand::seq::SliceRandom;
use rand::Rng;
use seedphrase_core::{
    entropy_from_mnemonic, generate_entropy, mnemonic_from_entropy, seed_from_mnemonic,
    word_at, word_index, BitReader, MnemonicError, WordCount, WORDLIST_LEN,
};
use zeroize::Zeroize;

const ZERO_12: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

// ============================================================================
// 1. Malformed Input Panic Tests (should NOT panic)
// ============================================================================

#[test]
fn test_decode_garbage_does_not_panic() {
    let long_word = "a".repeat(10000);
    let many_words = "abandon ".repeat(100);
    let inputs = [
        "",
        "a",
        "hello world",
        "abandon abandon abandon",
        many_words.as_str(),
        "🎉 🎊 🎈 🎃 🎄 🎅 🎆 🎇 🎁 🎂 🎀 🎍",
        "\0\0\0\0\0\0\0\0\0\0\0\0",
        long_word.as_str(),
    ];

    for input in &inputs {
        assert!(entropy_from_mnemonic(input).is_err(), "accepted {:?}", input);
    }
}

#[test]
fn test_encode_garbage_lengths_do_not_panic() {
    for len in 0..=64 {
        let entropy = vec![0xA5u8; len];
        let result = mnemonic_from_entropy(&entropy);
        let valid = matches!(len, 16 | 20 | 24 | 28 | 32);
        assert_eq!(result.is_ok(), valid, "{} bytes", len);
    }
}

#[test]
fn test_bit_reader_random_requests_do_not_panic() {
    let mut rng = rand::thread_rng();

    for _ in 0..1000 {
        let len = rng.gen_range(0..40);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let mut reader = BitReader::new(&data);

        for _ in 0..20 {
            let count = rng.gen_range(0..80);
            let before = reader.remaining_bits();
            match reader.read_bits(count) {
                Ok(value) => {
                    assert!(count == 64 || value < (1u64 << count));
                    assert_eq!(reader.remaining_bits(), before - count as usize);
                }
                Err(_) => assert_eq!(reader.remaining_bits(), before),
            }
        }
    }
}

#[test]
fn test_word_lookup_out_of_range() {
    assert!(word_at(WORDLIST_LEN as u16).is_none());
    assert!(word_at(u16::MAX).is_none());
    assert!(word_index("").is_none());
    assert!(word_index(" abandon").is_none());
}

// ============================================================================
// 2. Errors do not leak secrets
// ============================================================================

#[test]
fn test_unknown_word_error_hides_word() {
    let mnemonic = ZERO_12.replacen("abandon", "hunter2", 1);
    let err = entropy_from_mnemonic(&mnemonic).unwrap_err();

    assert!(matches!(err, MnemonicError::UnknownWord { position: 0 }));
    let message = err.to_string();
    assert!(!message.contains("hunter2"));
    assert!(!format!("{:?}", err).contains("hunter2"));
}

#[test]
fn test_checksum_error_hides_mnemonic() {
    let mnemonic = vec!["zoo"; 12].join(" ");
    let err = entropy_from_mnemonic(&mnemonic).unwrap_err();

    assert!(matches!(err, MnemonicError::InvalidChecksum));
    assert!(!err.to_string().contains("zoo"));
}

// ============================================================================
// 3. Zeroization
// ============================================================================

#[test]
fn test_zeroize_works_on_vec() {
    let mut secret = vec![0xAB_u8; 32];
    secret.zeroize();
    assert!(secret.is_empty() || secret.iter().all(|&b| b == 0));
}

#[test]
fn test_seed_can_be_wiped() {
    let mut seed = seed_from_mnemonic(ZERO_12, "TREZOR");
    assert_ne!(seed, [0u8; 64]);

    seed.zeroize();
    assert_eq!(seed, [0u8; 64]);
}

#[test]
fn test_generated_entropy_is_zeroizing() {
    let entropy = generate_entropy(256).unwrap();
    // Zeroizing<Vec<u8>> wipes on drop; here we only check the contents are usable
    assert_eq!(entropy.len(), 32);
    assert!(mnemonic_from_entropy(&entropy).is_ok());
}

// ============================================================================
// 4. Checksum catches corruption
// ============================================================================

#[test]
fn test_single_word_substitution_mostly_detected() {
    let mut rng = rand::thread_rng();
    let mut detected = 0;
    let trials = 500;

    for _ in 0..trials {
        let mnemonic = seedphrase_core::generate_mnemonic(WordCount::Words24).unwrap();
        let mut words: Vec<&str> = mnemonic.split(' ').collect();

        let position = rng.gen_range(0..words.len());
        let replacement = loop {
            let index = rng.gen_range(0..WORDLIST_LEN as u16);
            let word = word_at(index).unwrap();
            if word != words[position] {
                break word;
            }
        };
        words[position] = replacement;

        if entropy_from_mnemonic(&words.join(" ")).is_err() {
            detected += 1;
        }
    }

    // 8 checksum bits: about 1 in 256 substitutions slips through
    assert!(detected > trials * 9 / 10, "only {} of {} detected", detected, trials);
}

#[test]
fn test_word_order_matters() {
    let mut rng = rand::thread_rng();
    let mnemonic = seedphrase_core::generate_mnemonic(WordCount::Words12).unwrap();
    let original = entropy_from_mnemonic(&mnemonic).unwrap();

    let mut words: Vec<&str> = mnemonic.split(' ').collect();
    words.shuffle(&mut rng);
    let shuffled = words.join(" ");

    // Either the checksum fails or it decodes to different entropy (or the shuffle was a no-op)
    match entropy_from_mnemonic(&shuffled) {
        Ok(entropy) => assert!(shuffled == mnemonic || *entropy != *original),
        Err(e) => assert!(matches!(e, MnemonicError::InvalidChecksum)),
    }
}
