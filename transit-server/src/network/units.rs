//! Conversion from grid distance to real distance and travel time.

use std::fmt;
use std::ops::Add;

use chrono::Duration;
use serde::{Serialize, Serializer};

/// A travel time in whole minutes.
///
/// Serialises as the number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(Duration);

impl TravelTime {
    pub fn from_minutes(minutes: i64) -> Self {
        Self(Duration::minutes(minutes))
    }

    pub fn total_minutes(self) -> i64 {
        self.0.num_minutes()
    }

    /// Whole hours.
    pub fn hours(self) -> i64 {
        self.0.num_hours()
    }

    /// Minutes past the whole hours.
    pub fn minutes(self) -> i64 {
        (self.0 - Duration::hours(self.hours())).num_minutes()
    }

    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for TravelTime {
    fn default() -> Self {
        Self(Duration::zero())
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Serialize for TravelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.total_minutes())
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}min", self.hours(), self.minutes())
    }
}

/// A stretch of travel in real units: whole kilometres and whole minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Leg {
    pub distance_km: i64,
    pub time: TravelTime,
}

impl Leg {
    /// Convert a grid distance travelled at `speed_kmh`.
    ///
    /// The real distance is `grid_distance * scale` rounded to the nearest
    /// kilometre. Time is taken from the unrounded distance and rounded to
    /// the nearest minute. Halves round to even.
    pub fn from_grid_distance(grid_distance: f64, speed_kmh: f64, scale: f64) -> Self {
        let real_km = grid_distance * scale;
        let minutes = (real_km / speed_kmh * 60.0).round_ties_even() as i64;
        Self {
            distance_km: real_km.round_ties_even() as i64,
            time: TravelTime::from_minutes(minutes),
        }
    }
}

impl Add for Leg {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            distance_km: self.distance_km + rhs.distance_km,
            time: self.time + rhs.time,
        }
    }
}
