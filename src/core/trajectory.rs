//! Initial velocity for a 2D parabolic shot between two points.
//!
//! The height difference between origin and target picks one of three
//! regimes, each with its own closed-form launch:
//!
//! * [`Regime::Ascending`]: the apex of the arc sits exactly at the target
//!   height.
//! * [`Regime::Descending`]: launched flat, the projectile drops onto the
//!   target.
//! * [`Regime::NearLevel`]: a full symmetric arc whose apex height is a
//!   quarter of the horizontal distance.
//!
//! Only `x` and `y` of the input points are used.

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::core::error::{AimError, Result};
use crate::core::gravity::Gravity;
use crate::core::kinematics;

/// Height difference (m) beyond which a target counts as above or below.
pub const REGIME_THRESHOLD_M: f32 = 1.0;

/// Stand-in height used when the offset height difference is exactly zero.
pub const ZERO_HEIGHT_FALLBACK_M: f32 = 0.1;

/// Near-level arcs peak at `distance / NEAR_LEVEL_APEX_DIVISOR`.
const NEAR_LEVEL_APEX_DIVISOR: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    Ascending,
    Descending,
    NearLevel,
}

impl Regime {
    /// NaN falls through to `NearLevel`.
    pub fn classify(delta_y: f32) -> Self {
        if delta_y > REGIME_THRESHOLD_M {
            Self::Ascending
        } else if delta_y < -REGIME_THRESHOLD_M {
            Self::Descending
        } else {
            Self::NearLevel
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::NearLevel => "near-level",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    Rightward,
    Leftward,
}

impl HorizontalDirection {
    /// A zero delta is `Leftward`, so a vertical shot carries a `-0.0`
    /// horizontal component.
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x > 0.0 {
            Self::Rightward
        } else {
            Self::Leftward
        }
    }

    pub fn apply(self, speed: f32) -> f32 {
        match self {
            Self::Rightward => speed,
            Self::Leftward => -speed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct RegimeLaunch {
    horizontal: f32,
    vertical: f32,
    flight_time: f32,
    height: f32,
}

fn ascending(distance: f32, height: f32, gravity: f32) -> RegimeLaunch {
    let vertical = (2.0 * gravity * height).sqrt();
    let flight_time = vertical / gravity;
    RegimeLaunch {
        horizontal: distance / flight_time,
        vertical,
        flight_time,
        height,
    }
}

fn descending(distance: f32, height: f32, gravity: f32) -> RegimeLaunch {
    let flight_time = (2.0 * height / gravity).sqrt();
    RegimeLaunch {
        horizontal: distance / flight_time,
        vertical: 0.0,
        flight_time,
        height,
    }
}

fn near_level(distance: f32, gravity: f32) -> RegimeLaunch {
    let height = distance / NEAR_LEVEL_APEX_DIVISOR;
    let vertical = (2.0 * gravity * height).sqrt();
    let flight_time = 2.0 * vertical / gravity;
    RegimeLaunch {
        horizontal: distance / flight_time,
        vertical,
        flight_time,
        height,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchSolution {
    pub velocity: Vec2,
    pub regime: Regime,
    pub direction: HorizontalDirection,
    /// Time at which the projectile is over the target.
    pub flight_time: f32,
    /// Height the regime formulas were evaluated with.
    pub height: f32,
}

impl LaunchSolution {
    pub fn arrival(&self, origin: Vec2, gravity: Gravity) -> Vec2 {
        kinematics::position_at(origin, self.velocity, gravity.effective(), self.flight_time)
    }

    pub fn path(&self, origin: Vec2, gravity: Gravity, samples: usize) -> Vec<Vec2> {
        kinematics::sample_path(
            origin,
            self.velocity,
            gravity.effective(),
            self.flight_time,
            samples,
        )
    }
}

/// `offset_y` is added to the height difference in the ascending and
/// descending regimes, raising or lowering the apex. Fails with
/// [`AimError::NoMotion`] when both components are zero and with
/// [`AimError::NonFinite`] when either is NaN or infinite.
pub fn solve(origin: Vec3, target: Vec3, offset_y: f32, gravity: Gravity) -> Result<LaunchSolution> {
    let g = gravity.effective();
    let delta_x = target.x - origin.x;
    let delta_y = target.y - origin.y;
    let distance = delta_x.abs();

    let mut height = (delta_y + offset_y).abs();
    if height == 0.0 {
        height = ZERO_HEIGHT_FALLBACK_M;
    }

    let regime = Regime::classify(delta_y);
    let launch = match regime {
        Regime::Ascending => ascending(distance, height, g),
        Regime::Descending => descending(distance, height, g),
        Regime::NearLevel => near_level(distance, g),
    };

    if launch.horizontal == 0.0 && launch.vertical == 0.0 {
        debug!(regime = regime.name(), "no launch needed");
        return Err(AimError::NoMotion);
    }

    let direction = HorizontalDirection::from_delta(delta_x);

    if !launch.horizontal.is_finite() || !launch.vertical.is_finite() {
        debug!(
            regime = regime.name(),
            horizontal = launch.horizontal,
            vertical = launch.vertical,
            "launch velocity is not finite"
        );
        return Err(AimError::NonFinite {
            horizontal: launch.horizontal,
            vertical: launch.vertical,
        });
    }

    let velocity = Vec2::new(direction.apply(launch.horizontal), launch.vertical);
    debug!(
        regime = regime.name(),
        vx = velocity.x,
        vy = velocity.y,
        flight_time = launch.flight_time,
        "solved launch velocity"
    );

    Ok(LaunchSolution {
        velocity,
        regime,
        direction,
        flight_time: launch.flight_time,
        height: launch.height,
    })
}

/// Like [`solve`], but any failure comes back as `Vec2::ZERO`.
///
/// A zero result means "no valid launch", never "target reached already".
pub fn parable_initial_velocity(origin: Vec3, target: Vec3, offset_y: f32, gravity: Gravity) -> Vec2 {
    solve(origin, target, offset_y, gravity)
        .map(|solution| solution.velocity)
        .unwrap_or(Vec2::ZERO)
}
