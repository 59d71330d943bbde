//! BIP-39 seed derivation
//!
//! seed = PBKDF2-HMAC-SHA512(password = mnemonic, salt = "mnemonic" || passphrase,
//!                           rounds = 2048, len = 64)
//!
//! The mnemonic is not validated here: any string produces a seed. Bytes
//! are used exactly as given (no Unicode normalization).

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

/// PBKDF2 iteration count fixed by BIP-39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

const SALT_PREFIX: &str = "mnemonic";

/// Derive the 64-byte seed from a mnemonic and an optional passphrase.
///
/// Pass `""` when no passphrase is used.
pub fn seed_from_mnemonic(mnemonic: &str, passphrase: &str) -> [u8; SEED_LEN] {
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);

    let mut seed = [0u8; SEED_LEN];
    pbkdf2_hmac::<Sha512>(mnemonic.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);
    seed
}
