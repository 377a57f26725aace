//! Short, URL-safe, cryptographically random identifiers.
//!
//! Identifiers are drawn from a configurable alphabet by masking random bytes and rejecting the
//! ones that fall outside the alphabet, so every symbol is equally likely.

mod generation;
mod random_source;

pub use generation::{calculate_mask, calculate_step, generate_unique_id};
pub use random_source::{CryptoRngSource, OsRandom, RandomSource};

/// The default, URL-safe alphabet. The order matters: identifiers generated from the same bytes
/// only match if the alphabet is identical.
pub static DEFAULT_ALPHABET_STR: &str =
    "_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// [`DEFAULT_ALPHABET_STR`], as a lookup table.
pub const DEFAULT_ALPHABET: [char; 64] = [
    '_', '-', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Default identifier length. With the 64-symbol default alphabet this makes collisions
/// negligible for any practical number of identifiers.
pub const DEFAULT_SIZE: usize = 21;

/// A single byte can index at most this many symbols.
const MAX_ALPHABET_LENGTH: usize = 256;

/// Generate an identifier with the default alphabet and size.
pub fn generate_default() -> Result<String, IdError> {
    generate(&DEFAULT_ALPHABET, DEFAULT_SIZE)
}

/// Generate an identifier of `size` symbols from `alphabet`, using the OS's secure random number
/// generator.
///
/// Fails if `alphabet` is empty or has more than 256 symbols, or if `size` is zero.
pub fn generate(alphabet: &[char], size: usize) -> Result<String, IdError> {
    generate_with(&mut OsRandom, alphabet, size)
}

/// Like [`generate`], but drawing random bytes from `source`.
///
/// The arguments are validated before `source` is asked for anything: an empty alphabet, an
/// alphabet of more than 256 symbols, or a zero size are refused. A failure of `source` comes back
/// as [`ErrorKind::Entropy`].
pub fn generate_with<S>(source: &mut S, alphabet: &[char], size: usize) -> Result<String, IdError>
where
    S: RandomSource + ?Sized,
{
    if alphabet.is_empty() {
        return Err(IdErrorRepr::EmptyAlphabet.into());
    }
    if alphabet.len() > MAX_ALPHABET_LENGTH {
        return Err(IdErrorRepr::AlphabetTooLarge(alphabet.len()).into());
    }
    if size == 0 {
        return Err(IdErrorRepr::InvalidSize.into());
    }

    Ok(generate_unique_id(source, alphabet, size).map_err(IdErrorRepr::Entropy)?)
}

/// An error from generating an identifier.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct IdError(IdErrorRepr);

impl IdError {
    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            IdErrorRepr::EmptyAlphabet => ErrorKind::EmptyAlphabet,
            IdErrorRepr::AlphabetTooLarge(_) => ErrorKind::AlphabetTooLarge,
            IdErrorRepr::InvalidSize => ErrorKind::InvalidSize,
            IdErrorRepr::Entropy(_) => ErrorKind::Entropy,
        }
    }
}

impl From<IdErrorRepr> for IdError {
    fn from(err: IdErrorRepr) -> IdError {
        IdError(err)
    }
}

/// The broad category of an [`IdError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The alphabet had no symbols.
    EmptyAlphabet,
    /// The alphabet had more symbols than a byte can index.
    AlphabetTooLarge,
    /// The requested size was zero.
    InvalidSize,
    /// The random source failed.
    Entropy,
}

#[derive(Debug, thiserror::Error)]
enum IdErrorRepr {
    #[error("alphabet must be non-empty")]
    EmptyAlphabet,
    #[error("alphabet has {0} symbols, but at most 256 are supported")]
    AlphabetTooLarge(usize),
    #[error("size must be greater than 0")]
    InvalidSize,
    #[error("failed to obtain random bytes: {0}")]
    Entropy(#[source] rand::Error),
}
