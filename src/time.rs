//! FIT timestamps.
//!
//! FIT counts seconds from its own epoch, 1989-12-31T00:00:00Z, in an
//! unsigned 32-bit field. Instants before the epoch have no on-wire form.

use serde::{Deserialize, Serialize};

/// Offset of the FIT epoch (1989-12-31T00:00:00Z) from the Unix epoch, in
/// seconds.
pub const FIT_EPOCH_UNIX: i64 = 631_065_600;

/// An absolute UTC instant, stored as seconds since the FIT epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateTime(u32);

impl DateTime {
    /// The uint32 invalid sentinel. Fields left here are omitted on encode.
    pub const INVALID: DateTime = DateTime(u32::MAX);

    /// From raw seconds since the FIT epoch.
    pub fn from_fit_secs(secs: u32) -> Self {
        DateTime(secs)
    }

    /// From seconds since the Unix epoch.
    ///
    /// Instants outside the representable range map to
    /// [`DateTime::INVALID`].
    pub fn from_unix(secs: i64) -> Self {
        let since_epoch = secs - FIT_EPOCH_UNIX;
        if (0..i64::from(u32::MAX)).contains(&since_epoch) {
            DateTime(since_epoch as u32)
        } else {
            DateTime::INVALID
        }
    }

    /// Seconds since the FIT epoch, as stored on the wire.
    pub fn fit_secs(self) -> u32 {
        self.0
    }

    /// Seconds since the Unix epoch.
    pub fn to_unix(self) -> i64 {
        i64::from(self.0) + FIT_EPOCH_UNIX
    }

    pub fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime::INVALID
    }
}

/// A wall-clock instant in an unstated local time zone.
///
/// Carried by a few profile fields. There is no way to recover the UTC
/// offset from the value alone, so encoding one is rejected as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalDateTime(u32);

impl LocalDateTime {
    /// The uint32 invalid sentinel.
    pub const INVALID: LocalDateTime = LocalDateTime(u32::MAX);

    /// From raw seconds since the FIT epoch in the local time zone.
    pub fn from_fit_secs(secs: u32) -> Self {
        LocalDateTime(secs)
    }

    pub fn fit_secs(self) -> u32 {
        self.0
    }

    pub fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for LocalDateTime {
    fn default() -> Self {
        LocalDateTime::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_zero() {
        assert_eq!(DateTime::from_unix(FIT_EPOCH_UNIX).fit_secs(), 0);
    }

    #[test]
    fn test_unix_round_trip() {
        let dt = DateTime::from_unix(FIT_EPOCH_UNIX + 1_000_000_000);
        assert_eq!(dt.fit_secs(), 1_000_000_000);
        assert_eq!(dt.to_unix(), FIT_EPOCH_UNIX + 1_000_000_000);
    }

    #[test]
    fn test_pre_epoch_is_invalid() {
        assert!(DateTime::from_unix(0).is_invalid());
        assert!(DateTime::from_unix(FIT_EPOCH_UNIX - 1).is_invalid());
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(DateTime::default().is_invalid());
        assert!(LocalDateTime::default().is_invalid());
        assert!(!DateTime::from_fit_secs(0).is_invalid());
    }
}
