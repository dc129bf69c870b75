//! # ID Generation
//!
//! Random and timestamp-prefixed identifiers, encoded with Dbase32.
//!
//! - `random_id`: `size` bytes of entropy (default 15 bytes, 24 chars)
//! - `time_id`: 4-byte big-endian seconds since the epoch followed by 11
//!   random bytes (15 bytes, 24 chars)
//!
//! Because the alphabet keeps byte order, time IDs from later seconds sort
//! after time IDs from earlier seconds. IDs from the same second are ordered
//! only by their random suffix.
//!
//! Entropy comes from the thread-local CSPRNG of `rand`, which is seeded from
//! the operating system.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::{
    codec::{Codec, Optimized},
    constants::{MAX_BIN_LEN, TIME_ID_BYTES, TIME_PREFIX_BYTES},
    error::{Error, Result},
    length::validate_size,
};

/// What `time_id` does with a timestamp outside `0..=u32::MAX`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPolicy {
    /// Fail with [`Error::Timestamp`]
    #[default]
    Reject,
    /// Saturate to `0` or `u32::MAX`
    Clamp,
}

/// Seconds since the Unix epoch, whole or fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    Seconds(i64),
    Fractional(f64),
}

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::Seconds(Utc::now().timestamp())
    }

    /// Resolves to the 32-bit second count stored in a time ID.
    ///
    /// Fractional seconds truncate toward zero. `NaN` is rejected under
    /// either policy.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_u32(self, policy: TimestampPolicy) -> Result<u32> {
        match self {
            Self::Seconds(secs) => match u32::try_from(secs) {
                Ok(secs) => Ok(secs),
                Err(_) if policy == TimestampPolicy::Clamp => {
                    Ok(if secs < 0 { 0 } else { u32::MAX })
                }
                Err(_) => Err(Error::Timestamp(secs.to_string())),
            },
            Self::Fractional(secs) => {
                if secs.is_nan() {
                    return Err(Error::Timestamp(secs.to_string()));
                }
                let whole = secs.trunc();
                if (0.0..=f64::from(u32::MAX)).contains(&whole) {
                    Ok(whole as u32)
                } else if policy == TimestampPolicy::Clamp {
                    Ok(whole.clamp(0.0, f64::from(u32::MAX)) as u32)
                } else {
                    Err(Error::Timestamp(secs.to_string()))
                }
            }
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s}"),
            Self::Fractional(s) => write!(f, "{s}"),
        }
    }
}

impl From<u32> for Timestamp {
    fn from(secs: u32) -> Self {
        Self::Seconds(i64::from(secs))
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Self::Fractional(secs)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Seconds(at.timestamp())
    }
}

/// Returns a random Dbase32 ID of `size` bytes.
///
/// `size` must be 5..=60 and a multiple of 5; the default is
/// [`RANDOM_BYTES`](crate::constants::RANDOM_BYTES) (120 bits, 24 characters).
pub fn random_id(size: usize) -> Result<String> {
    random_id_with(&Optimized, &mut rand::rng(), size)
}

/// [`random_id`] with an explicit codec and entropy source.
pub fn random_id_with<R>(codec: &dyn Codec, rng: &mut R, size: usize) -> Result<String>
where
    R: CryptoRng + RngCore + ?Sized,
{
    validate_size(size)?;
    let mut buf = [0u8; MAX_BIN_LEN];
    let buf = &mut buf[..size];
    rng.fill_bytes(buf);
    codec.encode(buf)
}

/// Returns a time ID for the current second.
pub fn time_id(policy: TimestampPolicy) -> Result<String> {
    time_id_at(Timestamp::now(), policy)
}

/// Returns a time ID for `timestamp`.
pub fn time_id_at(timestamp: impl Into<Timestamp>, policy: TimestampPolicy) -> Result<String> {
    time_id_with(&Optimized, &mut rand::rng(), timestamp.into(), policy)
}

/// [`time_id_at`] with an explicit codec and entropy source.
pub fn time_id_with<R>(
    codec: &dyn Codec,
    rng: &mut R,
    timestamp: Timestamp,
    policy: TimestampPolicy,
) -> Result<String>
where
    R: CryptoRng + RngCore + ?Sized,
{
    let secs = timestamp.to_u32(policy)?;
    let mut buf = [0u8; TIME_ID_BYTES];
    buf[..TIME_PREFIX_BYTES].copy_from_slice(&secs.to_be_bytes());
    rng.fill_bytes(&mut buf[TIME_PREFIX_BYTES..]);
    codec.encode(&buf)
}
