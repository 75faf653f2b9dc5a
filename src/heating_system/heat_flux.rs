use crate::config::MaterialProperties;
use crate::errors::HeatingError;
use crate::trajectory_system::kinematics::{DerivedKinematics, ReferenceState};

use super::convective::convective_heat_flux;
use super::radiative::{NoseRadiusRegime, RadiativeHeating};

/// Incoming heat flux at the stagnation point (W/m²).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeatFlux {
    pub convective: f64,
    pub radiative: f64,
}

impl HeatFlux {
    pub fn new(convective: f64, radiative: f64) -> Self {
        HeatFlux {
            convective,
            radiative,
        }
    }

    pub fn total(&self) -> f64 {
        self.convective + self.radiative
    }
}

/// Evaluates both heating correlations for one nose geometry.
#[derive(Debug, Clone)]
pub struct HeatFluxModel {
    nose_radius: f64,
    reference_density: f64,
    radiative: RadiativeHeating,
}

impl HeatFluxModel {
    pub fn new(
        material: &MaterialProperties,
        reference: &ReferenceState,
    ) -> Result<Self, HeatingError> {
        material.validate()?;
        Ok(HeatFluxModel {
            nose_radius: material.nose_radius,
            reference_density: reference.density,
            radiative: RadiativeHeating::new(material.nose_radius)?,
        })
    }

    pub fn regime(&self) -> NoseRadiusRegime {
        self.radiative.regime()
    }

    pub fn evaluate(&self, kinematics: &DerivedKinematics) -> HeatFlux {
        let convective = convective_heat_flux(
            self.nose_radius,
            kinematics.density,
            self.reference_density,
            kinematics.velocity,
            kinematics.circular_velocity,
        );
        let radiative = self
            .radiative
            .heat_flux(kinematics.velocity, kinematics.density);

        HeatFlux::new(convective, radiative)
    }
}
