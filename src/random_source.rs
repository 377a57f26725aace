//! Sources of random bytes for identifier generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Something that can hand out a batch of random bytes on request.
///
/// Every byte should be uniform over `0..=255` and independent of the others. The generator only
/// ever asks for whole batches, and never reuses a batch once it has been consumed.
pub trait RandomSource {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>, rand::Error>;
}

/// The operating system's secure random number generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>, rand::Error> {
        let mut bytes = vec![0u8; count];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

/// Adapts any cryptographically secure `rand` generator (e.g. a seeded `StdRng`) into a
/// [`RandomSource`].
#[derive(Debug)]
pub struct CryptoRngSource<R>(pub R);

impl<R> RandomSource for CryptoRngSource<R>
where
    R: RngCore + CryptoRng,
{
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>, rand::Error> {
        let mut bytes = vec![0u8; count];
        self.0.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

/// Closures are infallible sources; mostly useful for feeding fixed bytes in tests.
impl<F> RandomSource for F
where
    F: FnMut(usize) -> Vec<u8>,
{
    fn next_bytes(&mut self, count: usize) -> Result<Vec<u8>, rand::Error> {
        Ok(self(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn os_random_returns_requested_count() {
        let bytes = OsRandom.next_bytes(37).unwrap();
        assert_eq!(bytes.len(), 37);
        assert!(OsRandom.next_bytes(0).unwrap().is_empty());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut first = CryptoRngSource(StdRng::seed_from_u64(7));
        let mut second = CryptoRngSource(StdRng::seed_from_u64(7));
        assert_eq!(
            first.next_bytes(64).unwrap(),
            second.next_bytes(64).unwrap()
        );
    }

    #[test]
    fn closure_receives_requested_count() {
        let mut requested = Vec::new();
        let mut source = |count: usize| {
            requested.push(count);
            vec![9; count]
        };
        assert_eq!(source.next_bytes(3).unwrap(), vec![9, 9, 9]);
        assert_eq!(source.next_bytes(1).unwrap(), vec![9]);
        drop(source);
        assert_eq!(requested, vec![3, 1]);
    }
}
