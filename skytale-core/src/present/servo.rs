//! Coordinate-to-servo pulse-width mapping

use crate::config::{
    LATITUDE_RANGE, LONGITUDE_RANGE, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US,
};

/// Affine map from an input range to a pulse-width range, in microseconds
///
/// Inputs outside the range extrapolate linearly; the fixed coordinates
/// driven by the panel are always in range.
pub fn map_to_pulse_width(
    value: f32,
    in_min: f32,
    in_max: f32,
    out_min_us: f32,
    out_max_us: f32,
) -> u16 {
    let us = (value - in_min) * (out_max_us - out_min_us) / (in_max - in_min) + out_min_us;
    (us + 0.5) as u16
}

/// Pulse widths for both pointing servos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoPulses {
    /// Latitude axis pulse width in microseconds
    pub lat_us: u16,
    /// Longitude axis pulse width in microseconds
    pub lon_us: u16,
}

impl ServoPulses {
    /// Map a coordinate pair onto the servo pulse band
    pub fn from_coordinates(latitude: f32, longitude: f32) -> Self {
        Self {
            lat_us: map_to_pulse_width(
                latitude,
                LATITUDE_RANGE.0,
                LATITUDE_RANGE.1,
                SERVO_MIN_PULSE_US,
                SERVO_MAX_PULSE_US,
            ),
            lon_us: map_to_pulse_width(
                longitude,
                LONGITUDE_RANGE.0,
                LONGITUDE_RANGE.1,
                SERVO_MIN_PULSE_US,
                SERVO_MAX_PULSE_US,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_endpoints() {
        assert_eq!(map_to_pulse_width(-90.0, -90.0, 90.0, 1000.0, 2000.0), 1000);
        assert_eq!(map_to_pulse_width(90.0, -90.0, 90.0, 1000.0, 2000.0), 2000);
        assert_eq!(map_to_pulse_width(0.0, -90.0, 90.0, 1000.0, 2000.0), 1500);
    }

    #[test]
    fn test_fixed_point_coordinates() {
        let pulses = ServoPulses::from_coordinates(37.7749, -122.4194);
        assert_eq!(pulses.lat_us, 1710);
        assert_eq!(pulses.lon_us, 1160);
    }
}
