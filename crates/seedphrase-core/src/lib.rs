//! Seedphrase Core
//!
//! BIP-39 mnemonic sentences and seed derivation.
//! https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki
//!
//! # Pipeline
//!
//! ## Entropy → Mnemonic
//! - 128-256 bits of entropy (multiple of 32)
//! - SHA-256 checksum: first `entropy_bits / 32` bits appended
//! - Split into 11-bit indices, one English word each
//!
//! ## Mnemonic → Seed
//! - PBKDF2-HMAC-SHA512, 2048 rounds
//! - Salt is `"mnemonic"` followed by the optional passphrase
//! - Always 64 bytes
//!
//! # Example
//!
//! ```
//! use seedphrase_core::{mnemonic_from_entropy, seed_from_mnemonic, entropy_from_mnemonic};
//!
//! let entropy = [0u8; 16];
//! let mnemonic = mnemonic_from_entropy(&entropy).unwrap();
//! assert!(mnemonic.ends_with("abandon about"));
//!
//! // Decoding verifies the checksum and returns the original entropy
//! let decoded = entropy_from_mnemonic(&mnemonic).unwrap();
//! assert_eq!(decoded.as_slice(), &entropy);
//!
//! let seed = seed_from_mnemonic(&mnemonic, "TREZOR");
//! assert_eq!(seed.len(), 64);
//! ```

pub mod bits;
pub mod entropy;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

// Re-exports
pub use bits::{BitReader, BitWriter};
pub use entropy::{check_entropy_size, generate_entropy, generate_entropy_with, WordCount};
pub use mnemonic::{
    entropy_from_mnemonic, generate_mnemonic, mnemonic_from_entropy, validate_mnemonic,
};
pub use seed::{seed_from_mnemonic, PBKDF2_ROUNDS, SEED_LEN};
pub use wordlist::{word_at, word_index, word_list, WORDLIST_LEN};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MnemonicError {
    #[error("Invalid entropy size: {0} bits (must be 128-256 and a multiple of 32)")]
    InvalidEntropySize(usize),
    #[error("Insufficient data: requested {requested} bits, {available} available")]
    InsufficientData { requested: u32, available: usize },
    #[error("Invalid bit count: {0} (must be 1-64)")]
    InvalidBitCount(u32),
    #[error("Invalid word count: {0} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),
    #[error("Unknown word at position {position}")]
    UnknownWord { position: usize },
    #[error("Invalid mnemonic checksum")]
    InvalidChecksum,
    #[error("Random source failure: {0}")]
    RandomSource(#[from] rand::Error),
}
