//! Bit-level packing
//!
//! MSB-first reader and writer over byte buffers. Mnemonic words are
//! 11-bit groups, so almost every index straddles a byte boundary.
//!
//! Both sides keep a small accumulator register plus a count of valid bits
//! in it. The register is 128 bits wide so that a full 64-bit read or write
//! on top of up to 7 carried bits never drops anything.

use crate::MnemonicError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Largest bit count accepted by a single read or write
pub const MAX_BITS: u32 = 64;

fn check_bit_count(count: u32) -> Result<(), MnemonicError> {
    if count == 0 || count > MAX_BITS {
        return Err(MnemonicError::InvalidBitCount(count));
    }
    Ok(())
}

#[inline]
fn low_mask(bits: u32) -> u128 {
    (1u128 << bits) - 1
}

/// Reads big-endian bit groups from a byte slice.
///
/// Single use and forward only. The register is wiped on drop since it
/// usually holds entropy.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct BitReader<'a> {
    #[zeroize(skip)]
    data: &'a [u8],
    /// Next byte to pull into the register
    pos: usize,
    acc: u128,
    /// Valid bits currently held in `acc`
    bits: u32,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            acc: 0,
            bits: 0,
        }
    }

    /// Bits that can still be read (register + unread bytes)
    pub fn remaining_bits(&self) -> usize {
        self.bits as usize + (self.data.len() - self.pos) * 8
    }

    /// Read `count` bits (1-64) and return them in the low end of a `u64`.
    ///
    /// Fails with [`MnemonicError::InsufficientData`] if fewer than `count`
    /// bits are left. The check happens before any byte is pulled, so a
    /// failed read leaves the reader untouched.
    pub fn read_bits(&mut self, count: u32) -> Result<u64, MnemonicError> {
        check_bit_count(count)?;

        let available = self.remaining_bits();
        if count as usize > available {
            return Err(MnemonicError::InsufficientData {
                requested: count,
                available,
            });
        }

        while self.bits < count {
            self.acc = (self.acc << 8) | u128::from(self.data[self.pos]);
            self.pos += 1;
            self.bits += 8;
        }

        // The register now looks like this, oldest bits on the left:
        //
        //   |<--- count --->|<--- bits - count --->|
        //        wanted         kept for next call
        self.bits -= count;
        let value = (self.acc >> self.bits) & low_mask(count);
        self.acc &= low_mask(self.bits);

        Ok(value as u64)
    }
}

/// Packs big-endian bit groups into bytes.
///
/// The inverse of [`BitReader`]: pushing 11-bit word indices rebuilds the
/// entropy + checksum buffer of a mnemonic.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct BitWriter {
    bytes: Vec<u8>,
    acc: u128,
    bits: u32,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            acc: 0,
            bits: 0,
        }
    }

    /// Append the low `count` bits (1-64) of `value`, most significant first.
    /// Higher bits of `value` are ignored.
    pub fn push_bits(&mut self, value: u64, count: u32) -> Result<(), MnemonicError> {
        check_bit_count(count)?;

        self.acc = (self.acc << count) | (u128::from(value) & low_mask(count));
        self.bits += count;

        while self.bits >= 8 {
            self.bits -= 8;
            self.bytes.push((self.acc >> self.bits) as u8);
        }
        self.acc &= low_mask(self.bits);

        Ok(())
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bits as usize
    }

    /// Finish writing. A trailing partial byte is padded with zero bits.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.bits > 0 {
            let pad = 8 - self.bits;
            let last = (self.acc << pad) as u8;
            self.bytes.push(last);
        }
        std::mem::take(&mut self.bytes)
    }
}
