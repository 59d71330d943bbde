//! Mnemonic codec
//!
//! Entropy ⇄ mnemonic sentence.
//!
//! Encoding appends the first `entropy_bits / 32` bits of SHA-256(entropy)
//! to the entropy and reads the result back as 11-bit word indices.
//! Decoding reverses this and rejects sentences whose checksum bits do not
//! match.
//!
//! Only the checksum bits are ever read: the appended digest byte may carry
//! slack low bits (4 of them for 128-bit entropy) which sit past the last
//! word and are never consumed.

use crate::bits::{BitReader, BitWriter};
use crate::entropy::{check_entropy_size, generate_entropy, WordCount, BITS_PER_WORD};
use crate::wordlist::{word_at, word_index};
use crate::MnemonicError;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

const WORD_BITS: u32 = BITS_PER_WORD as u32;

/// Encode entropy as a space-separated mnemonic sentence.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28 or 32 bytes
///
/// # Returns
/// 12, 15, 18, 21 or 24 English words joined by single spaces
pub fn mnemonic_from_entropy(entropy: &[u8]) -> Result<String, MnemonicError> {
    let entropy_bits = entropy.len() * 8;
    check_entropy_size(entropy_bits)?;

    let checksum_bits = entropy_bits / 32;
    let word_count = (entropy_bits + checksum_bits) / BITS_PER_WORD;

    // Packed buffer: entropy || digest bytes covering the checksum bits
    let digest = Sha256::digest(entropy);
    let mut packed = Zeroizing::new(Vec::with_capacity(entropy.len() + 1));
    packed.extend_from_slice(entropy);
    packed.extend_from_slice(&digest[..checksum_bits.div_ceil(8)]);

    let mut reader = BitReader::new(&packed);
    let mut words = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let index = reader.read_bits(WORD_BITS)? as u16;
        let word = word_at(index).expect("Index always valid (11 bits = 0-2047)");
        words.push(word);
    }

    log::trace!(
        "Encoded {} bits of entropy as {} words",
        entropy_bits,
        word_count
    );

    Ok(words.join(" "))
}

/// Generate a fresh mnemonic from OS entropy.
pub fn generate_mnemonic(word_count: WordCount) -> Result<String, MnemonicError> {
    let entropy = generate_entropy(word_count.entropy_bits())?;
    mnemonic_from_entropy(&entropy)
}

/// Decode a mnemonic sentence back to its entropy, verifying the checksum.
///
/// Words may be separated by any whitespace but must match list entries
/// exactly (lowercase).
pub fn entropy_from_mnemonic(mnemonic: &str) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    let word_count = WordCount::from_word_count(words.len())?;
    let entropy_bits = word_count.entropy_bits();
    let checksum_bits = word_count.checksum_bits();

    let mut writer = BitWriter::with_capacity(words.len() * BITS_PER_WORD);
    for (position, word) in words.iter().enumerate() {
        let index = word_index(word).ok_or(MnemonicError::UnknownWord { position })?;
        writer.push_bits(u64::from(index), WORD_BITS)?;
    }
    let packed = Zeroizing::new(writer.into_bytes());

    let mut reader = BitReader::new(&packed);
    let mut entropy = Zeroizing::new(Vec::with_capacity(entropy_bits / 8));
    for _ in 0..entropy_bits / 8 {
        entropy.push(reader.read_bits(8)? as u8);
    }
    let checksum = reader.read_bits(checksum_bits as u32)?;

    let digest = Sha256::digest(entropy.as_slice());
    let expected = u64::from(digest[0] >> (8 - checksum_bits));
    if checksum != expected {
        return Err(MnemonicError::InvalidChecksum);
    }

    log::trace!("Decoded {} words to {} bits of entropy", words.len(), entropy_bits);

    Ok(entropy)
}

/// Check that a mnemonic has a valid length, known words and a valid checksum.
pub fn validate_mnemonic(mnemonic: &str) -> Result<(), MnemonicError> {
    entropy_from_mnemonic(mnemonic).map(|_| ())
}
