use crate::errors::HeatingError;

/// Ambient air state at a single altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    pub temperature: f64,    // K
    pub pressure: f64,       // Pa
    pub density: f64,        // kg/m³
    pub speed_of_sound: f64, // m/s
}

/// Source of ambient air properties and gravity along the trajectory.
///
/// Implementations must resolve altitude 0, which is used to build the
/// sea-level reference state, and every altitude present in the trajectory.
pub trait Atmosphere {
    fn state_at(&self, altitude: f64) -> Result<AtmosphericState, HeatingError>;

    fn gravity_at(&self, altitude: f64) -> Result<f64, HeatingError>;
}

impl<A: Atmosphere + ?Sized> Atmosphere for &A {
    fn state_at(&self, altitude: f64) -> Result<AtmosphericState, HeatingError> {
        (**self).state_at(altitude)
    }

    fn gravity_at(&self, altitude: f64) -> Result<f64, HeatingError> {
        (**self).gravity_at(altitude)
    }
}
