//! Rough travel-time estimates derived from straight-line distances.

use serde::{Deserialize, Serialize};

/// Converts distances into minutes assuming a constant average speed, with a
/// floor so that very short hops are never reported as instantaneous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimator {
    average_speed_kmh: f64,
    min_minutes: u32,
}

impl TravelEstimator {
    pub fn new(average_speed_kmh: f64, min_minutes: u32) -> Self {
        Self {
            average_speed_kmh,
            min_minutes,
        }
    }

    /// Whole minutes needed to cover `distance_km`, truncated and then
    /// clamped to the configured minimum.
    pub fn minutes(&self, distance_km: f64) -> u32 {
        let minutes = if self.average_speed_kmh > 0.0 {
            (distance_km / self.average_speed_kmh * 60.0).floor()
        } else {
            f64::INFINITY
        };
        // `as` saturates for out of range floats
        (minutes as u32).max(self.min_minutes)
    }
}

impl Default for TravelEstimator {
    fn default() -> Self {
        Self::new(30.0, 5)
    }
}

/// Human readable arrival window for a listing, e.g. `"5-10 min"`.
pub fn eta_bucket(distance_km: f64, average_speed_kmh: f64) -> &'static str {
    let minutes = if average_speed_kmh > 0.0 {
        (distance_km / average_speed_kmh * 60.0).floor()
    } else {
        f64::INFINITY
    };
    match minutes {
        m if m < 5.0 => "2-5 min",
        m if m < 10.0 => "5-10 min",
        m if m < 15.0 => "10-15 min",
        m if m < 20.0 => "15-20 min",
        m if m < 30.0 => "20-30 min",
        _ => "30+ min",
    }
}
