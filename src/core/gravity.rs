use std::fmt;
use std::str::FromStr;

use glam::Vec2;

use crate::core::error::AimError;

/// Stand-in magnitude used when gravity is exactly zero, so the regime
/// formulas never divide by zero.
pub const ZERO_GRAVITY_FALLBACK_MPS2: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gravity {
    magnitude_mps2: f32,
}

impl Gravity {
    /// Default 2D physics gravity of the game engines this solver targets.
    pub const EARTH: Self = Self {
        magnitude_mps2: 9.81,
    };
    pub const MOON: Self = Self {
        magnitude_mps2: 1.62,
    };

    /// Only the magnitude matters, so the sign of `mps2` is dropped.
    pub fn new(mps2: f32) -> Self {
        Self {
            magnitude_mps2: mps2.abs(),
        }
    }

    pub fn from_vector(gravity: Vec2) -> Self {
        Self {
            magnitude_mps2: gravity.length(),
        }
    }

    pub fn magnitude(self) -> f32 {
        self.magnitude_mps2
    }

    pub fn effective(self) -> f32 {
        if self.magnitude_mps2 == 0.0 {
            ZERO_GRAVITY_FALLBACK_MPS2
        } else {
            self.magnitude_mps2
        }
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::EARTH
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s^2", self.magnitude_mps2)
    }
}

impl FromStr for Gravity {
    type Err = AimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earth" => Ok(Self::EARTH),
            "moon" => Ok(Self::MOON),
            other => other
                .parse::<f32>()
                .map(Self::new)
                .map_err(|_| AimError::InvalidNumber {
                    label: "gravity",
                    value: s.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gravity_falls_back_to_small_constant() {
        assert_eq!(Gravity::new(0.0).magnitude(), 0.0);
        assert_eq!(Gravity::new(0.0).effective(), ZERO_GRAVITY_FALLBACK_MPS2);
        assert_eq!(Gravity::EARTH.effective(), 9.81);
    }

    #[test]
    fn vector_and_negative_inputs_give_magnitude() {
        assert_eq!(Gravity::from_vector(Vec2::new(0.0, -9.81)).magnitude(), 9.81);
        assert_eq!(Gravity::from_vector(Vec2::new(3.0, -4.0)).magnitude(), 5.0);
        assert_eq!(Gravity::new(-1.62), Gravity::MOON);
    }

    #[test]
    fn parses_presets_and_numbers() {
        assert_eq!("Moon".parse::<Gravity>().unwrap(), Gravity::MOON);
        assert_eq!(" earth ".parse::<Gravity>().unwrap(), Gravity::EARTH);
        assert_eq!("3.7".parse::<Gravity>().unwrap().magnitude(), 3.7);

        let err = "jupiter".parse::<Gravity>().expect_err("unknown preset");
        assert!(err.to_string().contains("gravity"));
    }
}
