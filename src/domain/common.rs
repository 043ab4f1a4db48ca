//! Shared value objects embedded in the Location aggregate

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Geographical coordinates. Range-checked at construction; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::Validation(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::Validation(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Daily opening hours of a charging site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    opens_at: NaiveTime,
    closes_at: NaiveTime,
}

impl BusinessHours {
    pub fn new(opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self { opens_at, closes_at }
    }

    pub fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    pub fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_in_range() {
        let c = Coordinates::new(52.37, 4.89).unwrap();
        assert_eq!(c.latitude(), 52.37);
        assert_eq!(c.longitude(), 4.89);

        assert!(Coordinates::new(-90.0, 180.0).is_ok());
        assert!(Coordinates::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinates_out_of_range() {
        assert!(matches!(
            Coordinates::new(90.1, 0.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Coordinates::new(-90.1, 0.0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Coordinates::new(0.0, 180.1),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            Coordinates::new(0.0, -180.1),
            Err(DomainError::Validation(_))
        ));
    }
}
