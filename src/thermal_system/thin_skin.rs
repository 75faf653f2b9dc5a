use crate::config::{HeatingConfig, MaterialProperties};
use crate::errors::HeatingError;
use crate::heating_system::heat_flux::HeatFlux;

/// Lumped-capacitance ("thin-skin") surface temperature integrator.
///
/// The skin is a single isothermal node heated by the incoming flux and
/// cooled by its own grey-body radiation. Steps are forward Euler, so large
/// `dt` combined with high flux or temperature can oscillate or diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct ThinSkinIntegrator {
    stefan_boltzmann: f64,
    emissivity: f64,
    areal_heat_capacity: f64, // J/m²·K
}

impl ThinSkinIntegrator {
    pub fn new(material: &MaterialProperties, stefan_boltzmann: f64) -> Result<Self, HeatingError> {
        material.validate()?;
        if !(stefan_boltzmann.is_finite() && stefan_boltzmann > 0.0) {
            return Err(HeatingError::InvalidConfiguration(format!(
                "Stefan-Boltzmann constant must be positive, got {}",
                stefan_boltzmann
            )));
        }

        Ok(ThinSkinIntegrator {
            stefan_boltzmann,
            emissivity: material.emissivity,
            areal_heat_capacity: material.areal_heat_capacity(),
        })
    }

    pub fn from_config(config: &HeatingConfig) -> Result<Self, HeatingError> {
        Self::new(&config.material, config.stefan_boltzmann)
    }

    /// Radiative self-cooling of the surface (W/m²).
    pub fn emitted_flux(&self, temperature: f64) -> f64 {
        self.stefan_boltzmann * self.emissivity * temperature.powi(4)
    }

    /// Surface temperature rate of change (K/s) for the given skin
    /// temperature and incoming flux.
    pub fn temperature_rate(&self, temperature: f64, flux: &HeatFlux) -> f64 {
        (flux.total() - self.emitted_flux(temperature)) / self.areal_heat_capacity
    }

    /// Advances the surface temperature by one explicit step of length `dt`.
    pub fn step(
        &self,
        previous_temperature: f64,
        flux: &HeatFlux,
        dt: f64,
    ) -> Result<f64, HeatingError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(HeatingError::InvalidTrajectory(format!(
                "time step must be positive, got {} s",
                dt
            )));
        }
        Ok(previous_temperature + dt * self.temperature_rate(previous_temperature, flux))
    }
}
