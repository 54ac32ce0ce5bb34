use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::core::gravity::Gravity;

// Runtime settings read from the environment; CLI flags override them.

pub const GRAVITY_VAR: &str = "AIM_GRAVITY";
pub const PLOT_DIR_VAR: &str = "AIM_PLOT_DIR";
pub const PATH_SAMPLES_VAR: &str = "AIM_PATH_SAMPLES";

pub const DEFAULT_PLOT_DIR: &str = "plots";
pub const DEFAULT_PATH_SAMPLES: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct AimConfig {
    pub gravity: Gravity,
    pub plot_dir: PathBuf,
    pub path_samples: usize,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::EARTH,
            plot_dir: PathBuf::from(DEFAULT_PLOT_DIR),
            path_samples: DEFAULT_PATH_SAMPLES,
        }
    }
}

impl AimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let gravity = match lookup(GRAVITY_VAR) {
            Some(raw) => raw.parse::<Gravity>().unwrap_or_else(|err| {
                warn!(%err, var = GRAVITY_VAR, "ignoring gravity setting");
                defaults.gravity
            }),
            None => defaults.gravity,
        };

        let plot_dir = lookup(PLOT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.plot_dir);

        let path_samples = match lookup(PATH_SAMPLES_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|samples| *samples >= 2)
                .unwrap_or_else(|| {
                    warn!(value = %raw, var = PATH_SAMPLES_VAR, "ignoring sample count");
                    defaults.path_samples
                }),
            None => defaults.path_samples,
        };

        Self {
            gravity,
            plot_dir,
            path_samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(AimConfig::from_lookup(|_| None), AimConfig::default());
    }

    #[test]
    fn reads_all_settings() {
        let config = AimConfig::from_lookup(lookup_from(&[
            (GRAVITY_VAR, "moon"),
            (PLOT_DIR_VAR, "/tmp/arcs"),
            (PATH_SAMPLES_VAR, "200"),
        ]));

        assert_eq!(config.gravity, Gravity::MOON);
        assert_eq!(config.plot_dir, PathBuf::from("/tmp/arcs"));
        assert_eq!(config.path_samples, 200);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = AimConfig::from_lookup(lookup_from(&[
            (GRAVITY_VAR, "lots"),
            (PLOT_DIR_VAR, "  "),
            (PATH_SAMPLES_VAR, "1"),
        ]));

        assert_eq!(config, AimConfig::default());
    }
}
