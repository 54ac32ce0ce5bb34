pub mod config;
pub mod error;
pub mod gravity;
pub mod kinematics;
pub mod plot;
pub mod trajectory;
pub mod window;
