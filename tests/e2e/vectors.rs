//! BIP-39 reference vectors, end to end
//!
//! Drives the public API with `testdata/vectors.json`:
//!   entropy -> mnemonic -> entropy, and mnemonic + passphrase -> seed.
//!
//! Run with:
//!   cargo test -p seedphrase-e2e --test vectors

use seedphrase_core::{
    entropy_from_mnemonic, mnemonic_from_entropy, seed_from_mnemonic, validate_mnemonic,
    WordCount, SEED_LEN,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VectorFile {
    passphrase: String,
    vectors: Vec<Vector>,
}

#[derive(Debug, Deserialize)]
struct Vector {
    entropy: String,
    mnemonic: String,
    /// Only present where a published seed is known
    #[serde(default)]
    seed: Option<String>,
}

fn load_vectors() -> VectorFile {
    let raw = include_str!("testdata/vectors.json");
    serde_json::from_str(raw).expect("vectors.json is valid")
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_entropy_to_mnemonic() {
    let file = load_vectors();
    assert!(!file.vectors.is_empty());

    for v in &file.vectors {
        let entropy = hex::decode(&v.entropy).unwrap();
        let mnemonic = mnemonic_from_entropy(&entropy).unwrap();
        assert_eq!(mnemonic, v.mnemonic, "entropy {}", v.entropy);
    }
}

#[test]
fn test_mnemonic_to_entropy() {
    for v in &load_vectors().vectors {
        let entropy = entropy_from_mnemonic(&v.mnemonic).unwrap();
        assert_eq!(hex::encode(entropy.as_slice()), v.entropy);
        assert!(validate_mnemonic(&v.mnemonic).is_ok());
    }
}

#[test]
fn test_vector_word_counts() {
    for v in &load_vectors().vectors {
        let bits = v.entropy.len() * 4;
        let wc = WordCount::from_entropy_bits(bits).unwrap();
        assert_eq!(v.mnemonic.split(' ').count(), wc.word_count());
    }
}

// ============================================================================
// Seed derivation
// ============================================================================

#[test]
fn test_published_seeds() {
    let file = load_vectors();
    let mut checked = 0;

    for v in &file.vectors {
        if let Some(expected) = &v.seed {
            let seed = seed_from_mnemonic(&v.mnemonic, &file.passphrase);
            assert_eq!(hex::encode(seed), *expected, "mnemonic {}", v.mnemonic);
            checked += 1;
        }
    }

    assert!(checked >= 3, "only {} seeds checked", checked);
}

#[test]
fn test_seeds_match_bip39_crate() {
    let file = load_vectors();

    for v in &file.vectors {
        let reference = bip39::Mnemonic::parse_normalized(&v.mnemonic).unwrap();
        for passphrase in ["", file.passphrase.as_str()] {
            let seed = seed_from_mnemonic(&v.mnemonic, passphrase);
            assert_eq!(seed.len(), SEED_LEN);
            assert_eq!(seed, reference.to_seed(passphrase));
        }
    }
}

// ============================================================================
// Full flow
// ============================================================================

#[test]
fn test_generate_decode_derive_flow() {
    for wc in WordCount::ALL {
        let mnemonic = seedphrase_core::generate_mnemonic(wc).unwrap();
        assert_eq!(mnemonic.split(' ').count(), wc.word_count());

        let entropy = entropy_from_mnemonic(&mnemonic).unwrap();
        assert_eq!(entropy.len() * 8, wc.entropy_bits());
        assert_eq!(mnemonic_from_entropy(&entropy).unwrap(), mnemonic);

        let reference = bip39::Mnemonic::parse_normalized(&mnemonic).unwrap();
        assert_eq!(seed_from_mnemonic(&mnemonic, ""), reference.to_seed(""));
    }
}
