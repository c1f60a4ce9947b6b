use rand::RngCore;

/// Abstracts the source of randomness used by every primitive in this crate
/// that needs one (nonce generation, ephemeral key generation, SSKR share
/// randomization). The default implementation wraps the OS CSPRNG; a
/// deterministic variant is provided for reproducible tests only.
pub trait RandomNumberGenerator {
    fn random_bytes(&mut self, len: usize) -> Vec<u8>;

    /// Bounded by `Self: Sized` so the trait stays usable as `dyn
    /// RandomNumberGenerator` for `random_bytes` — a const-generic method
    /// can't be part of a vtable, so callers holding a trait object use
    /// `random_bytes` directly instead.
    fn random_array<const N: usize>(&mut self) -> [u8; N]
    where
        Self: Sized,
    {
        let bytes = self.random_bytes(N);
        let mut array = [0u8; N];
        array.copy_from_slice(&bytes);
        array
    }
}

/// Draws from the operating system's CSPRNG via `rand::rngs::OsRng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandomNumberGenerator;

impl RandomNumberGenerator for SecureRandomNumberGenerator {
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        rand::rngs::OsRng.fill_bytes(&mut buf);
        buf
    }
}

/// A deterministic, seeded generator for reproducible test fixtures only.
/// Not cryptographically secure; never use outside tests.
#[derive(Debug, Clone)]
pub struct TestRandomNumberGenerator {
    state: u64,
}

impl TestRandomNumberGenerator {
    pub fn new_with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*: fast, deterministic, good enough for fixture data.
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }
}

impl RandomNumberGenerator for TestRandomNumberGenerator {
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            out.extend_from_slice(&self.next_u64().to_le_bytes());
        }
        out.truncate(len);
        out
    }
}
