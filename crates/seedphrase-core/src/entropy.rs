//! Entropy sizing and generation
//!
//! BIP-39 accepts 128-256 bits of entropy in 32-bit steps. Each 32 bits of
//! entropy adds one checksum bit, and entropy + checksum always splits into
//! whole 11-bit words:
//!
//! | Entropy | Checksum | Words |
//! |---------|----------|-------|
//! | 128     | 4        | 12    |
//! | 160     | 5        | 15    |
//! | 192     | 6        | 18    |
//! | 224     | 7        | 21    |
//! | 256     | 8        | 24    |

use crate::MnemonicError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

pub const MIN_ENTROPY_BITS: usize = 128;
pub const MAX_ENTROPY_BITS: usize = 256;

/// Bits encoded by each mnemonic word
pub const BITS_PER_WORD: usize = 11;

/// Supported mnemonic lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    /// Number of words in the mnemonic
    pub fn word_count(self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    /// Entropy size in bits
    pub fn entropy_bits(self) -> usize {
        self.word_count() * BITS_PER_WORD * 32 / 33
    }

    /// Checksum size in bits
    pub fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn from_word_count(words: usize) -> Result<Self, MnemonicError> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.word_count() == words)
            .ok_or(MnemonicError::InvalidWordCount(words))
    }

    pub fn from_entropy_bits(bits: usize) -> Result<Self, MnemonicError> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.entropy_bits() == bits)
            .ok_or(MnemonicError::InvalidEntropySize(bits))
    }
}

/// Check that `bits` is a valid BIP-39 entropy size.
pub fn check_entropy_size(bits: usize) -> Result<(), MnemonicError> {
    if !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&bits) || bits % 32 != 0 {
        return Err(MnemonicError::InvalidEntropySize(bits));
    }
    Ok(())
}

/// Read `bits` bits of entropy from the OS random source.
///
/// The size is validated before any randomness is requested. A random
/// source failure is returned as-is; there is no retry or fallback.
pub fn generate_entropy(bits: usize) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    generate_entropy_with(&mut OsRng, bits)
}

/// Same as [`generate_entropy`] with a caller-supplied CSPRNG.
pub fn generate_entropy_with<R>(
    rng: &mut R,
    bits: usize,
) -> Result<Zeroizing<Vec<u8>>, MnemonicError>
where
    R: RngCore + CryptoRng,
{
    check_entropy_size(bits)?;

    let mut entropy = Zeroizing::new(vec![0u8; bits / 8]);
    rng.try_fill_bytes(&mut entropy)?;

    log::debug!("Generated {} bits of entropy", bits);
    Ok(entropy)
}
