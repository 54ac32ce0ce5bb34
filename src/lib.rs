//! Launch-velocity solver for 2D parabolic shots, plus the forward kinematics,
//! plotting and configuration pieces the `parabolic_aim` and `aim_preview`
//! binaries are built from.

pub mod core;

pub use crate::core::error::{AimError, Result};
pub use crate::core::gravity::Gravity;
pub use crate::core::trajectory::{
    HorizontalDirection, LaunchSolution, Regime, parable_initial_velocity, solve,
};
