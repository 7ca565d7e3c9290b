//! Expiry Module
//!
//! Models how long a value passed to `set` should live.

use std::time::Duration;

// == Expiry ==
/// Requested lifetime of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiry {
    /// Use the backend's configured default duration
    #[default]
    Default,
    /// Never expire
    Never,
    /// Expire once the duration has elapsed; a zero duration never expires
    After(Duration),
}

impl Expiry {
    /// Expires after the given number of seconds. Zero never expires.
    pub fn seconds(secs: u64) -> Self {
        Expiry::After(Duration::from_secs(secs))
    }

    // == Resolve ==
    /// Resolves the lifetime against a backend default.
    ///
    /// Returns `None` when the entry must never expire.
    pub fn resolve(self, default_duration: Duration) -> Option<Duration> {
        let duration = match self {
            Expiry::Default => default_duration,
            Expiry::Never => return None,
            Expiry::After(duration) => duration,
        };

        if duration.is_zero() {
            None
        } else {
            Some(duration)
        }
    }
}

/// Signed seconds: negative selects the default, zero never expires.
impl From<i64> for Expiry {
    fn from(secs: i64) -> Self {
        match secs {
            s if s < 0 => Expiry::Default,
            0 => Expiry::Never,
            s => Expiry::seconds(s.unsigned_abs()),
        }
    }
}

impl From<Duration> for Expiry {
    fn from(duration: Duration) -> Self {
        Expiry::After(duration)
    }
}
