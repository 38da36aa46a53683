//! Geographic positions in FIT semicircles.
//!
//! Latitude and longitude travel as signed 32-bit semicircle counts, where
//! 2^31 semicircles equal 180 degrees. The fractional semicircle of a
//! degree value is truncated toward zero.

use serde::{Deserialize, Serialize};

const SEMICIRCLES_PER_DEGREE: f64 = (1u64 << 31) as f64 / 180.0;

/// Latitude as a semicircle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Latitude {
    semicircles: i32,
}

impl Latitude {
    /// The sint32 invalid sentinel. Fields left here are omitted on encode.
    pub const INVALID: Latitude = Latitude {
        semicircles: i32::MAX,
    };

    /// From decimal degrees, positive north.
    pub fn from_degrees(degrees: f64) -> Self {
        Latitude {
            semicircles: (degrees * SEMICIRCLES_PER_DEGREE) as i32,
        }
    }

    /// From a raw semicircle count.
    pub fn from_semicircles(semicircles: i32) -> Self {
        Latitude { semicircles }
    }

    pub fn semicircles(self) -> i32 {
        self.semicircles
    }

    pub fn degrees(self) -> f64 {
        f64::from(self.semicircles) / SEMICIRCLES_PER_DEGREE
    }

    pub fn is_invalid(self) -> bool {
        self.semicircles == i32::MAX
    }
}

impl Default for Latitude {
    fn default() -> Self {
        Latitude::INVALID
    }
}

/// Longitude as a semicircle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Longitude {
    semicircles: i32,
}

impl Longitude {
    /// The sint32 invalid sentinel. Fields left here are omitted on encode.
    pub const INVALID: Longitude = Longitude {
        semicircles: i32::MAX,
    };

    /// From decimal degrees, positive east.
    pub fn from_degrees(degrees: f64) -> Self {
        Longitude {
            semicircles: (degrees * SEMICIRCLES_PER_DEGREE) as i32,
        }
    }

    /// From a raw semicircle count.
    pub fn from_semicircles(semicircles: i32) -> Self {
        Longitude { semicircles }
    }

    pub fn semicircles(self) -> i32 {
        self.semicircles
    }

    pub fn degrees(self) -> f64 {
        f64::from(self.semicircles) / SEMICIRCLES_PER_DEGREE
    }

    pub fn is_invalid(self) -> bool {
        self.semicircles == i32::MAX
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Longitude::INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_conversion_truncates() {
        assert_eq!(Latitude::from_degrees(52.2053).semicircles(), 0x251F_AF51);
        assert_eq!(Longitude::from_degrees(0.1218).semicircles(), 0x0016_2C4A);
        // toward zero for negative values as well
        assert_eq!(Longitude::from_degrees(-0.1218).semicircles(), -0x0016_2C4A);
    }

    #[test]
    fn test_degrees_round_trip() {
        let lat = Latitude::from_degrees(52.2053);
        assert!((lat.degrees() - 52.2053).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(Latitude::default().is_invalid());
        assert!(Longitude::default().is_invalid());
        assert!(!Latitude::from_degrees(0.0).is_invalid());
    }
}
