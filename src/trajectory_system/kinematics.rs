use crate::environment::atmosphere::Atmosphere;
use crate::errors::HeatingError;

use super::sample::TrajectorySample;

/// Sea-level normalization quantities, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceState {
    pub temperature: f64,    // K
    pub density: f64,        // kg/m³
    pub speed_of_sound: f64, // m/s
    pub gravity: f64,        // m/s²
    pub planet_radius: f64,  // m
}

impl ReferenceState {
    pub fn from_atmosphere<A: Atmosphere>(
        atmosphere: &A,
        planet_radius: f64,
    ) -> Result<Self, HeatingError> {
        let sea_level = atmosphere.state_at(0.0)?;
        let gravity = atmosphere.gravity_at(0.0)?;

        if !(sea_level.density > 0.0 && gravity > 0.0) {
            return Err(HeatingError::AtmosphereLookupFailure {
                altitude: 0.0,
                reason: format!(
                    "reference density and gravity must be positive, got {} kg/m³ and {} m/s²",
                    sea_level.density, gravity
                ),
            });
        }

        Ok(ReferenceState {
            temperature: sea_level.temperature,
            density: sea_level.density,
            speed_of_sound: sea_level.speed_of_sound,
            gravity,
            planet_radius,
        })
    }

    /// Speed of a circular orbit at the given geocentric radius.
    pub fn circular_velocity(&self, geocentric_radius: f64) -> f64 {
        (self.gravity * self.planet_radius.powi(2) / geocentric_radius).sqrt()
    }
}

/// Flow and orbital quantities derived for one trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedKinematics {
    pub temperature: f64,
    pub density: f64,
    pub speed_of_sound: f64,
    pub gravity: f64,
    pub velocity: f64,
    pub geocentric_radius: f64,
    pub circular_velocity: f64,
}

impl DerivedKinematics {
    pub fn compute<A: Atmosphere>(
        sample: &TrajectorySample,
        reference: &ReferenceState,
        atmosphere: &A,
    ) -> Result<Self, HeatingError> {
        let ambient = atmosphere.state_at(sample.altitude)?;
        let gravity = atmosphere.gravity_at(sample.altitude)?;

        let velocity = sample.mach * ambient.speed_of_sound;
        let geocentric_radius = reference.planet_radius + sample.altitude;
        let circular_velocity = reference.circular_velocity(geocentric_radius);

        Ok(DerivedKinematics {
            temperature: ambient.temperature,
            density: ambient.density,
            speed_of_sound: ambient.speed_of_sound,
            gravity,
            velocity,
            geocentric_radius,
            circular_velocity,
        })
    }
}
