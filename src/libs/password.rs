//! Salted PBKDF2-HMAC-SHA256 password hashes.
//!
//! Stored form: `pbkdf2:sha256:<rounds>$<salt>$<base64 hash>`.

use base64::prelude::*;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

const SCHEME: &str = "pbkdf2:sha256";
const HASH_LEN: usize = 32;
pub const DEFAULT_ROUNDS: u32 = 100_000;

pub fn hash_password(password: &str) -> String {
    hash_with_rounds(password, DEFAULT_ROUNDS)
}

pub fn hash_with_rounds(password: &str, rounds: u32) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = derive(password, &salt, rounds);
    format!("{}:{}${}${}", SCHEME, rounds, salt, BASE64_STANDARD.encode(digest))
}

/// Returns `false` for malformed hashes instead of failing.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(method), Some(salt), Some(encoded), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let Some((scheme, rounds)) = method.rsplit_once(':') else {
        return false;
    };
    if scheme != SCHEME {
        return false;
    }
    let Ok(rounds) = rounds.parse::<u32>() else {
        return false;
    };
    if rounds == 0 {
        return false;
    }
    let Ok(expected) = BASE64_STANDARD.decode(encoded) else {
        return false;
    };

    derive(password, salt, rounds).as_slice().ct_eq(expected.as_slice()).into()
}

fn derive(password: &str, salt: &str, rounds: u32) -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), rounds, &mut out);
    out
}
