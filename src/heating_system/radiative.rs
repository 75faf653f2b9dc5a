use crate::constants::{
    INTERMEDIATE_RADIUS_EXPONENT_CAP, LARGE_NOSE_RADIUS_LIMIT, LARGE_RADIUS_EXPONENT_CAP,
    RADIATIVE_COEFFICIENT, RADIATIVE_DENSITY_EXPONENT, RADIATIVE_VELOCITY_FUNCTION,
    RADIATIVE_VELOCITY_TABLE_KM_S, RADIUS_EXPONENT_COEFFICIENT, RADIUS_EXPONENT_DENSITY_POWER,
    RADIUS_EXPONENT_VELOCITY_POWER, SMALL_NOSE_RADIUS_LIMIT,
};
use crate::errors::HeatingError;
use crate::utils::interpolation::ClampedTable;

/// Nose-radius regime of the Tauber correlation; selects the cap applied to
/// the radius exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoseRadiusRegime {
    /// `R_nose <= 1 m`, exponent uncapped
    Small,
    /// `1 m < R_nose < 2 m`, exponent capped at 0.6
    Intermediate,
    /// `R_nose >= 2 m`, exponent capped at 0.5
    Large,
}

impl NoseRadiusRegime {
    pub fn classify(nose_radius: f64) -> Self {
        if nose_radius <= SMALL_NOSE_RADIUS_LIMIT {
            NoseRadiusRegime::Small
        } else if nose_radius >= LARGE_NOSE_RADIUS_LIMIT {
            NoseRadiusRegime::Large
        } else {
            NoseRadiusRegime::Intermediate
        }
    }

    pub fn apply_cap(&self, uncapped_exponent: f64) -> f64 {
        match self {
            NoseRadiusRegime::Small => uncapped_exponent,
            NoseRadiusRegime::Intermediate => {
                INTERMEDIATE_RADIUS_EXPONENT_CAP.min(uncapped_exponent)
            }
            NoseRadiusRegime::Large => LARGE_RADIUS_EXPONENT_CAP.min(uncapped_exponent),
        }
    }
}

/// Velocity/density dependent exponent on the nose radius before any cap.
pub fn uncapped_radius_exponent(velocity: f64, density: f64) -> f64 {
    RADIUS_EXPONENT_COEFFICIENT
        * velocity.abs().powf(RADIUS_EXPONENT_VELOCITY_POWER)
        * density.powf(RADIUS_EXPONENT_DENSITY_POWER)
}

/// Tauber-Sutton radiative heating at the stagnation point.
#[derive(Debug, Clone)]
pub struct RadiativeHeating {
    nose_radius: f64,
    regime: NoseRadiusRegime,
    velocity_function: ClampedTable,
}

impl RadiativeHeating {
    pub fn new(nose_radius: f64) -> Result<Self, HeatingError> {
        let velocity_function = ClampedTable::new(
            RADIATIVE_VELOCITY_TABLE_KM_S.to_vec(),
            RADIATIVE_VELOCITY_FUNCTION.to_vec(),
        )?;
        Ok(RadiativeHeating {
            nose_radius,
            regime: NoseRadiusRegime::classify(nose_radius),
            velocity_function,
        })
    }

    pub fn regime(&self) -> NoseRadiusRegime {
        self.regime
    }

    /// Tabulated velocity function, clamped to the table ends outside
    /// 9-16 km/s. Input in m/s.
    pub fn velocity_function(&self, velocity: f64) -> f64 {
        self.velocity_function.lookup(velocity.abs() / 1000.0)
    }

    pub fn radius_exponent(&self, velocity: f64, density: f64) -> f64 {
        self.regime.apply_cap(uncapped_radius_exponent(velocity, density))
    }

    /// Radiative heat flux in W/m².
    pub fn heat_flux(&self, velocity: f64, density: f64) -> f64 {
        RADIATIVE_COEFFICIENT
            * self.nose_radius.powf(self.radius_exponent(velocity, density))
            * density.powf(RADIATIVE_DENSITY_EXPONENT)
            * self.velocity_function(velocity)
    }
}
