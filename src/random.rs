use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use zeroize::Zeroizing;

/// Provider of unbiased integers, injected into the generator.
///
/// Implementations are driven through `&mut self`, so a single instance is
/// never shared between threads without outside synchronization. Both
/// sources shipped here are `Send`; give each thread its own.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be positive.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, n: usize) -> usize {
        (**self).below(n)
    }
}

/// Operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl RandomSource for OsSource {
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "range must be non-empty");
        if n == 0 {
            return 0;
        }
        OsRng.gen_range(0..n)
    }
}

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 1024;
const WORD_RANGE: u64 = 1 << 32;

/// ChaCha20 keystream consumed as little-endian `u32` words, reduced with
/// rejection sampling so every residue is equally likely. Ranges wider than
/// 32 bits draw two words per candidate.
pub struct KeystreamSource {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamSource {
    /// Deterministic stream for a fixed key.
    pub fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        let mut source = Self {
            cipher,
            buffer: Zeroizing::new(vec![0u8; BUFFER_LEN]),
            pos: 0,
        };
        source.refill();
        source
    }

    /// Stream keyed from the operating system CSPRNG.
    pub fn from_entropy() -> Self {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.fill_bytes(&mut key[..]);
        Self::from_key(&key)
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }

    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.refill();
        }

        let word = u32::from_le_bytes([
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ]);
        self.pos += 4;
        word
    }

    fn next_u64(&mut self) -> u64 {
        let low = self.next_u32() as u64;
        let high = self.next_u32() as u64;
        (high << 32) | low
    }

    fn below_u64(&mut self, n: u64) -> u64 {
        // 2^64 mod n, the size of the biased low zone.
        let skip = n.wrapping_neg() % n;

        loop {
            let candidate = self.next_u64();
            if candidate >= skip {
                return candidate % n;
            }
        }
    }
}

fn rejection_threshold(n: u64) -> u64 {
    WORD_RANGE - (WORD_RANGE % n)
}

impl RandomSource for KeystreamSource {
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "range must be non-empty");
        if n == 0 {
            return 0;
        }

        let n = n as u64;
        if n > WORD_RANGE {
            return self.below_u64(n) as usize;
        }

        let threshold = rejection_threshold(n);

        loop {
            let candidate = self.next_u32() as u64;
            if candidate < threshold {
                return (candidate % n) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystream_deterministic() {
        let key = [42u8; 32];
        let mut a = KeystreamSource::from_key(&key);
        let mut b = KeystreamSource::from_key(&key);

        let first: Vec<usize> = (0..64).map(|_| a.below(88)).collect();
        let second: Vec<usize> = (0..64).map(|_| b.below(88)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keystream_different_keys_diverge() {
        let mut a = KeystreamSource::from_key(&[1u8; 32]);
        let mut b = KeystreamSource::from_key(&[2u8; 32]);

        let first: Vec<usize> = (0..32).map(|_| a.below(1000)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.below(1000)).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_keystream_stays_in_range_across_refills() {
        let mut source = KeystreamSource::from_key(&[7u8; 32]);
        for n in [1usize, 2, 10, 26, 62, 88, 1000] {
            for _ in 0..2_000 {
                assert!(source.below(n) < n);
            }
        }
    }

    #[test]
    fn test_keystream_roughly_uniform() {
        let mut source = KeystreamSource::from_key(&[9u8; 32]);
        let mut counts = [0usize; 10];
        let draws = 100_000;
        for _ in 0..draws {
            counts[source.below(10)] += 1;
        }

        let expected = draws / 10;
        for (digit, count) in counts.iter().enumerate() {
            let deviation = (*count as i64 - expected as i64).unsigned_abs() as usize;
            assert!(
                deviation < expected / 10,
                "Bucket {} has {} hits, expected about {}",
                digit,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_rejection_threshold() {
        assert_eq!(rejection_threshold(1), WORD_RANGE);
        assert_eq!(rejection_threshold(2), WORD_RANGE);
        assert_eq!(rejection_threshold(10), WORD_RANGE - 6);
        assert_eq!(rejection_threshold(88) % 88, 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_keystream_wide_range_terminates() {
        let mut source = KeystreamSource::from_key(&[1u8; 32]);
        let n = (1usize << 32) + 1;
        for _ in 0..256 {
            assert!(source.below(n) < n);
        }

        let wide = 1usize << 40;
        let draws: Vec<usize> = (0..64).map(|_| source.below(wide)).collect();
        assert!(draws.iter().all(|d| *d < wide));
        assert!(draws.iter().any(|d| *d > u32::MAX as usize));

        assert!(source.below(usize::MAX) < usize::MAX);
    }

    #[test]
    fn test_wide_range_skip_zone() {
        let mut source = KeystreamSource::from_key(&[5u8; 32]);
        // 2^64 is divisible by 2^33, so nothing is rejected and the draw
        // is the raw word pair masked to 33 bits.
        let mut twin = KeystreamSource::from_key(&[5u8; 32]);
        let expected = twin.next_u64() % (1u64 << 33);
        assert_eq!(source.below_u64(1u64 << 33), expected);
        assert_eq!(3u64.wrapping_neg() % 3, 1);
    }

    #[test]
    fn test_os_source_in_range() {
        let mut source = OsSource;
        for _ in 0..1_000 {
            assert!(source.below(26) < 26);
        }
        assert_eq!(source.below(1), 0);
    }

    #[test]
    fn test_from_entropy_streams_differ() {
        let mut a = KeystreamSource::from_entropy();
        let mut b = KeystreamSource::from_entropy();

        let first: Vec<usize> = (0..32).map(|_| a.below(1 << 20)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.below(1 << 20)).collect();
        assert_ne!(first, second);
    }
}
