use std::path::Path;

use serde::Deserialize;

use crate::error::{FlatError, Result};

/// Area and density bounds every body must satisfy at construction.
///
/// Owned by whoever creates bodies (usually a [`crate::FlatWorld`]) and
/// passed to the factories; there is no global copy.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct BodyLimits {
    #[serde(alias = "min_body_size")]
    pub min_body_size: f32,
    #[serde(alias = "max_body_size")]
    pub max_body_size: f32,
    #[serde(alias = "min_density")]
    pub min_density: f32,
    #[serde(alias = "max_density")]
    pub max_density: f32,
}

impl Default for BodyLimits {
    fn default() -> Self {
        Self {
            min_body_size: 0.01 * 0.01,
            max_body_size: 64.0 * 64.0,
            min_density: 0.5,
            max_density: 21.4,
        }
    }
}

impl BodyLimits {
    /// Build validated limits.
    pub fn new(
        min_body_size: f32,
        max_body_size: f32,
        min_density: f32,
        max_density: f32,
    ) -> Result<Self> {
        let limits = Self {
            min_body_size,
            max_body_size,
            min_density,
            max_density,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Parse limits from TOML. Missing keys keep their default value.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let limits: Self = toml::from_str(src)?;
        limits.validate()?;
        Ok(limits)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// Checks every bound is finite and each `[min, max]` pair is ordered.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("MinBodySize", self.min_body_size),
            ("MaxBodySize", self.max_body_size),
            ("MinDensity", self.min_density),
            ("MaxDensity", self.max_density),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(FlatError::InvalidLimits(format!("{name} must be finite, got {value}")));
            }
        }
        if self.min_body_size > self.max_body_size {
            return Err(FlatError::InvalidLimits(format!(
                "MinBodySize {} exceeds MaxBodySize {}",
                self.min_body_size, self.max_body_size
            )));
        }
        if self.min_density > self.max_density {
            return Err(FlatError::InvalidLimits(format!(
                "MinDensity {} exceeds MaxDensity {}",
                self.min_density, self.max_density
            )));
        }
        Ok(())
    }
}
