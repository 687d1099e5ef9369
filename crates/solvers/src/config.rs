use thiserror::Error;

/// Iteration budget and tolerance shared by every solver.
///
/// `max_iters` counts the starting point or bracket as the first slot, so a
/// solver performs at most `max_iters - 1` refinement passes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-9).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated iteration budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a
    /// finite, strictly positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Returns the maximum number of iterations, starting point included.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the number of refinement passes a solver may perform.
    pub(crate) fn max_passes(&self) -> usize {
        self.max_iters - 1
    }
}

/// Unvalidated mirror of [`Config`] so deserialization goes through [`Config::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    max_iters: usize,
    tolerance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.tolerance)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    use crate::equation::{Iterate, Status};

    #[test]
    fn config_round_trips() {
        let json = serde_json::to_string(&Config::default()).expect("serializes");
        let config: Config = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialization_validates_config() {
        let err = serde_json::from_str::<Config>(r#"{"max_iters":0,"tolerance":1e-9}"#)
            .expect_err("zero iterations are invalid");
        assert!(err.to_string().contains(&ConfigError::MaxIters.to_string()));

        let err = serde_json::from_str::<Config>(r#"{"max_iters":10,"tolerance":-1.0}"#)
            .expect_err("negative tolerance is invalid");
        assert!(err.to_string().contains(&ConfigError::Tolerance.to_string()));
    }

    #[test]
    fn status_and_iterate_round_trip() {
        let json = serde_json::to_string(&Status::DegenerateStop).expect("serializes");
        assert_eq!(serde_json::from_str::<Status>(&json).expect("deserializes"), Status::DegenerateStop);

        let pair = Iterate::Pair([0.5, 1.25]);
        let json = serde_json::to_string(&pair).expect("serializes");
        assert_eq!(serde_json::from_str::<Iterate>(&json).expect("deserializes"), pair);
    }
}
