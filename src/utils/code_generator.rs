//! Short code generation.
//!
//! Codes are drawn uniformly at random, with replacement, from a 62-character
//! alphanumeric alphabet. The generator makes no uniqueness promise; collisions
//! are detected by the store and handled by
//! [`crate::application::services::ShortenService`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Characters a short code may contain: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Code length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random code of `length` characters using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::{generate_code, ALPHABET};
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate_code(length: usize) -> String {
    generate_code_with(&mut rand::rng(), length)
}

/// Generates a random code of `length` characters from the given RNG.
pub fn generate_code_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Number of distinct codes of the given length (saturates at `u128::MAX`).
pub fn code_space(length: usize) -> u128 {
    u32::try_from(length)
        .ok()
        .and_then(|exp| (ALPHABET.len() as u128).checked_pow(exp))
        .unwrap_or(u128::MAX)
}

/// Returns true if `code` has the given length and only alphabet characters.
pub fn is_valid_code(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| ALPHABET.contains(&b))
}

/// Source of candidate short codes.
///
/// Implementations must be cheap to call repeatedly; the shorten workflow asks
/// for a fresh candidate after every collision.
pub trait CodeGenerator: Send + Sync {
    /// Produces the next candidate code.
    fn generate(&self) -> String;

    /// Length of the codes this generator produces.
    fn length(&self) -> usize;
}

/// Production generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code(self.length)
    }

    fn length(&self) -> usize {
        self.length
    }
}

/// Deterministic generator: the same seed always yields the same sequence.
#[derive(Debug)]
pub struct SeededCodeGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl SeededCodeGenerator {
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            length,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CodeGenerator for SeededCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_code_with(&mut *rng, self.length)
    }

    fn length(&self) -> usize {
        self.length
    }
}
