//! Fixed protocol constants, all from spec.md §4.8/§5.

/// HMAC-PRF input byte that derives the next message key from a chain key.
pub const MESSAGE_KEY_SEED: [u8; 1] = [0x01];
/// HMAC-PRF input byte that derives the next chain key from a chain key.
pub const CHAIN_KEY_SEED: [u8; 1] = [0x02];

/// Highest message-version byte this session type produces or accepts.
pub const CURRENT_VERSION: u8 = 4;
/// Lowest message-version byte this session type accepts on receive.
pub const MIN_SUPPORTED_VERSION: u8 = 3;

/// The plaintext decryption-error channel's fixed version nibble pair.
pub const PLAINTEXT_VERSION: u8 = (8 << 4) | 8;

pub const HKDF_INFO_ROOT: &[u8] = b"WhisperText_X25519_SHA-256_CRYSTALS-KYBER-1024";
pub const HKDF_INFO_MESSAGE_KEYS: &[u8] = b"WhisperMessageKeys";
pub const HKDF_INFO_RATCHET: &[u8] = b"WhisperRatchet";

pub const MAX_RECEIVER_CHAINS: usize = 5;
pub const MAX_SKIPPED_MESSAGE_KEYS: usize = 2000;
pub const MAX_ARCHIVED_STATES: usize = 40;
pub const MAX_FORWARD_JUMPS: u32 = 25_000;
