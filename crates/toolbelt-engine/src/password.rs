//! Password generation from a configurable alphabet.
//!
//! The alphabet is assembled from four optional character sets; each output
//! character is an independent uniform draw from it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?";

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 64;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("select at least one character set")]
    EmptyAlphabet,
    #[error("length {0} is outside {MIN_LENGTH}..={MAX_LENGTH}")]
    LengthOutOfRange(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            upper: true,
            lower: true,
            digits: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    fn alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::new();
        if self.upper {
            chars.extend_from_slice(UPPER.as_bytes());
        }
        if self.lower {
            chars.extend_from_slice(LOWER.as_bytes());
        }
        if self.digits {
            chars.extend_from_slice(DIGITS.as_bytes());
        }
        if self.symbols {
            chars.extend_from_slice(SYMBOLS.as_bytes());
        }
        chars
    }
}

pub fn generate_password(options: &PasswordOptions) -> Result<String, PasswordError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(PasswordError::LengthOutOfRange(options.length));
    }
    let alphabet = options.alphabet();
    if alphabet.is_empty() {
        return Err(PasswordError::EmptyAlphabet);
    }

    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..options.length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();
    Ok(String::from_utf8(bytes).expect("alphabet is ASCII"))
}
