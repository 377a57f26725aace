//! The sampling algorithm: turning random bytes into alphabet symbols without bias.

use crate::random_source::RandomSource;

/// Overhead factor applied when sizing each batch of random bytes. Compensates for the bytes that
/// get rejected because they mask to an index outside the alphabet.
const STEP_OVERHEAD: f64 = 1.6;

/// Calculate the smallest all-ones bitmask covering every index into an alphabet of the given
/// length.
///
/// The result is always `2^k - 1`, so masking a uniform byte gives a uniform value in `0..=mask`.
/// An alphabet of length 1 gets a mask of 1.
pub fn calculate_mask(alphabet_length: usize) -> usize {
    if alphabet_length > 1 {
        (2 << (alphabet_length - 1).ilog2()) - 1
    } else {
        1
    }
}

/// Calculate how many random bytes to request for each batch.
pub fn calculate_step(mask: usize, size: usize, alphabet_length: usize) -> usize {
    (STEP_OVERHEAD * mask as f64 * size as f64 / alphabet_length as f64).ceil() as usize
}

/// Generate an identifier of exactly `size` symbols from `alphabet`, pulling batches of bytes from
/// `source` until enough of them land inside the alphabet.
///
/// Bytes are masked rather than reduced modulo the alphabet length; anything that masks to an
/// index past the end of the alphabet is thrown away. That keeps every symbol equally likely.
///
/// The caller must pass a non-empty alphabet (of at most 256 symbols) and a non-zero size;
/// [`crate::generate_with`] checks this. Symbols past index 255 are never drawn.
///
/// # Panics
///
/// With an empty alphabet the batch size overflows to `usize::MAX`, and allocating the batch
/// panics (debug builds trip an assertion first).
pub fn generate_unique_id<S>(
    source: &mut S,
    alphabet: &[char],
    size: usize,
) -> Result<String, rand::Error>
where
    S: RandomSource + ?Sized,
{
    debug_assert!(!alphabet.is_empty());
    debug_assert!(size > 0);

    let alphabet_length = alphabet.len();
    let mask = calculate_mask(alphabet_length);
    let step = calculate_step(mask, size, alphabet_length);
    tracing::debug!(alphabet_length, size, mask, step, "generating identifier");

    let mut unique_id = String::with_capacity(size);
    let mut produced = 0;
    while produced < size {
        let random_bytes = source.next_bytes(step)?;
        let before = produced;

        for random_byte in random_bytes {
            let index = usize::from(random_byte) & mask;
            if index >= alphabet_length {
                continue;
            }

            unique_id.push(alphabet[index]);
            produced += 1;
            if produced == size {
                break;
            }
        }
        tracing::trace!(step, accepted = produced - before, "consumed batch");
    }

    Ok(unique_id)
}
