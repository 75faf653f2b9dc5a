use std::path::Path;

use serde::Deserialize;

use crate::constants::{
    AIR_SPECIFIC_HEAT_CP, DEFAULT_EMISSIVITY, DEFAULT_INITIAL_SURFACE_TEMPERATURE,
    DEFAULT_NOSE_DENSITY, DEFAULT_NOSE_RADIUS, DEFAULT_NOSE_SPECIFIC_HEAT, DEFAULT_NOSE_THICKNESS,
    DEFAULT_STABILITY_WARNING_FRACTION, EARTH_RADIUS, STEFAN_BOLTZMANN,
};
use crate::errors::{HeatingError, LoadError};

/// Nose-cone material and geometry at the stagnation point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialProperties {
    pub nose_radius: f64,   // m, bluntness radius
    pub density: f64,       // kg/m³
    pub specific_heat: f64, // J/kg·K
    pub thickness: f64,     // m
    pub emissivity: f64,
}

impl MaterialProperties {
    pub fn new(
        nose_radius: f64,
        density: f64,
        specific_heat: f64,
        thickness: f64,
        emissivity: f64,
    ) -> Self {
        MaterialProperties {
            nose_radius,
            density,
            specific_heat,
            thickness,
            emissivity,
        }
    }

    /// Heat capacity per unit surface area of the lumped skin (J/m²·K).
    pub fn areal_heat_capacity(&self) -> f64 {
        self.specific_heat * self.density * self.thickness
    }

    pub fn validate(&self) -> Result<(), HeatingError> {
        let positive = [
            ("nose radius", self.nose_radius),
            ("material density", self.density),
            ("specific heat", self.specific_heat),
            ("thickness", self.thickness),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(HeatingError::InvalidConfiguration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.emissivity) {
            return Err(HeatingError::InvalidConfiguration(format!(
                "emissivity must lie in [0, 1], got {}",
                self.emissivity
            )));
        }
        Ok(())
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties::new(
            DEFAULT_NOSE_RADIUS,
            DEFAULT_NOSE_DENSITY,
            DEFAULT_NOSE_SPECIFIC_HEAT,
            DEFAULT_NOSE_THICKNESS,
            DEFAULT_EMISSIVITY,
        )
    }
}

/// Run configuration. Every field falls back to the default vehicle when
/// omitted from the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatingConfig {
    pub initial_surface_temperature: f64, // K
    pub material: MaterialProperties,
    pub planet_radius: f64, // m
    /// Specific heat of air at constant pressure. Carried for completeness;
    /// none of the heating correlations read it.
    pub air_specific_heat: f64,
    pub stefan_boltzmann: f64,
    /// A step that moves the surface temperature by more than this fraction
    /// of its previous value is logged as a likely explicit-scheme instability.
    pub stability_warning_fraction: f64,
}

impl Default for HeatingConfig {
    fn default() -> Self {
        HeatingConfig {
            initial_surface_temperature: DEFAULT_INITIAL_SURFACE_TEMPERATURE,
            material: MaterialProperties::default(),
            planet_radius: EARTH_RADIUS,
            air_specific_heat: AIR_SPECIFIC_HEAT_CP,
            stefan_boltzmann: STEFAN_BOLTZMANN,
            stability_warning_fraction: DEFAULT_STABILITY_WARNING_FRACTION,
        }
    }
}

impl HeatingConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, LoadError> {
        let config: HeatingConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), HeatingError> {
        self.material.validate()?;

        if !(self.initial_surface_temperature.is_finite() && self.initial_surface_temperature >= 0.0)
        {
            return Err(HeatingError::InvalidConfiguration(format!(
                "initial surface temperature must be a non-negative kelvin value, got {}",
                self.initial_surface_temperature
            )));
        }
        if !(self.planet_radius.is_finite() && self.planet_radius > 0.0) {
            return Err(HeatingError::InvalidConfiguration(format!(
                "planet radius must be positive, got {}",
                self.planet_radius
            )));
        }
        if !(self.stefan_boltzmann.is_finite() && self.stefan_boltzmann > 0.0) {
            return Err(HeatingError::InvalidConfiguration(format!(
                "Stefan-Boltzmann constant must be positive, got {}",
                self.stefan_boltzmann
            )));
        }
        if !(self.stability_warning_fraction.is_finite() && self.stability_warning_fraction > 0.0) {
            return Err(HeatingError::InvalidConfiguration(format!(
                "stability warning fraction must be positive, got {}",
                self.stability_warning_fraction
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = HeatingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.material.nose_radius, 0.02);
        assert_relative_eq!(config.initial_surface_temperature, 288.15, epsilon = 1e-9);
        assert_eq!(config.air_specific_heat, 1006.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = HeatingConfig::from_toml_str(
            r#"
            initial_surface_temperature = 300.0

            [material]
            nose_radius = 1.5
            emissivity = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_surface_temperature, 300.0);
        assert_eq!(config.material.nose_radius, 1.5);
        assert_eq!(config.material.emissivity, 0.9);
        assert_eq!(config.material.density, DEFAULT_NOSE_DENSITY);
        assert_eq!(config.planet_radius, EARTH_RADIUS);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = HeatingConfig::from_toml_str("nose_radius = 0.5");
        assert!(matches!(result, Err(LoadError::Toml(_))));
    }

    #[test]
    fn test_invalid_material_rejected() {
        let cases = [
            MaterialProperties::new(0.0, 1270.0, 1591.0, 0.025, 0.8),
            MaterialProperties::new(0.02, -1.0, 1591.0, 0.025, 0.8),
            MaterialProperties::new(0.02, 1270.0, 0.0, 0.025, 0.8),
            MaterialProperties::new(0.02, 1270.0, 1591.0, 0.0, 0.8),
            MaterialProperties::new(0.02, 1270.0, 1591.0, 0.025, 1.2),
            MaterialProperties::new(0.02, 1270.0, 1591.0, 0.025, -0.1),
            MaterialProperties::new(f64::NAN, 1270.0, 1591.0, 0.025, 0.8),
        ];
        for material in cases {
            assert!(
                matches!(
                    material.validate(),
                    Err(HeatingError::InvalidConfiguration(_))
                ),
                "accepted {:?}",
                material
            );
        }
    }

    #[test]
    fn test_emissivity_bounds_inclusive() {
        assert!(MaterialProperties::new(0.02, 1270.0, 1591.0, 0.025, 0.0)
            .validate()
            .is_ok());
        assert!(MaterialProperties::new(0.02, 1270.0, 1591.0, 0.025, 1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_invalid_toml_values_surface_as_heating_error() {
        let result = HeatingConfig::from_toml_str("[material]\nthickness = -0.01");
        assert!(matches!(
            result,
            Err(LoadError::Heating(HeatingError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_areal_heat_capacity() {
        let material = MaterialProperties::default();
        assert_eq!(material.areal_heat_capacity(), 1591.0 * 1270.0 * 0.025);
    }
}
