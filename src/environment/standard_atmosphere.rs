use crate::constants::{
    EARTH_RADIUS, GAS_CONSTANT_AIR, GRAVITY, HEAT_CAPACITY_RATIO_AIR, MAX_MODEL_ALTITUDE,
    MIN_MODEL_ALTITUDE, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
};
use crate::environment::atmosphere::{Atmosphere, AtmosphericState};
use crate::errors::HeatingError;

// Effective earth radius for the geopotential altitude conversion (m)
const GEOPOTENTIAL_RADIUS: f64 = 6_356_766.0;
const MESOPAUSE: f64 = 84_852.0; // geopotential m

// (base geopotential altitude m, lapse rate K/m)
const LAYERS: [(f64, f64); 7] = [
    (0.0, -6.5e-3),      // troposphere
    (11_000.0, 0.0),     // tropopause
    (20_000.0, 1.0e-3),  // stratosphere
    (32_000.0, 2.8e-3),  // stratosphere
    (47_000.0, 0.0),     // stratopause
    (51_000.0, -2.8e-3), // mesosphere
    (71_000.0, -2.0e-3), // mesosphere
];

/// U.S. Standard Atmosphere 1976 up to the mesopause, continued isothermally
/// above it, with inverse-square gravity.
#[derive(Debug, Clone)]
pub struct StandardAtmosphere {
    pub planet_radius: f64,
    pub surface_gravity: f64,
}

impl StandardAtmosphere {
    pub fn new(planet_radius: f64, surface_gravity: f64) -> Self {
        StandardAtmosphere {
            planet_radius,
            surface_gravity,
        }
    }

    fn check_altitude(&self, altitude: f64) -> Result<(), HeatingError> {
        if !altitude.is_finite() {
            return Err(HeatingError::AtmosphereLookupFailure {
                altitude,
                reason: "altitude is not a finite number".to_string(),
            });
        }
        if !(MIN_MODEL_ALTITUDE..=MAX_MODEL_ALTITUDE).contains(&altitude) {
            return Err(HeatingError::AtmosphereLookupFailure {
                altitude,
                reason: format!(
                    "outside modeled range [{} m, {} m]",
                    MIN_MODEL_ALTITUDE, MAX_MODEL_ALTITUDE
                ),
            });
        }
        Ok(())
    }

    fn geopotential_altitude(altitude: f64) -> f64 {
        GEOPOTENTIAL_RADIUS * altitude / (GEOPOTENTIAL_RADIUS + altitude)
    }

    /// Temperature and pressure at a geopotential altitude, marching the
    /// hydrostatic equation up through the layer stack.
    fn temperature_and_pressure(geopotential: f64) -> (f64, f64) {
        let mut base_temperature = SEA_LEVEL_TEMPERATURE;
        let mut base_pressure = SEA_LEVEL_PRESSURE;
        let g_over_r = GRAVITY / GAS_CONSTANT_AIR;

        for (index, &(base_altitude, lapse_rate)) in LAYERS.iter().enumerate() {
            let top = LAYERS
                .get(index + 1)
                .map_or(MESOPAUSE, |&(next_base, _)| next_base);
            let height = geopotential.min(top) - base_altitude;

            let (temperature, pressure) =
                Self::layer_state(base_temperature, base_pressure, lapse_rate, height, g_over_r);

            if geopotential <= top {
                return (temperature, pressure);
            }
            base_temperature = temperature;
            base_pressure = pressure;
        }

        // Isothermal continuation above the mesopause
        let height = geopotential - MESOPAUSE;
        Self::layer_state(base_temperature, base_pressure, 0.0, height, g_over_r)
    }

    fn layer_state(
        base_temperature: f64,
        base_pressure: f64,
        lapse_rate: f64,
        height: f64,
        g_over_r: f64,
    ) -> (f64, f64) {
        if lapse_rate == 0.0 {
            let pressure = base_pressure * (-g_over_r * height / base_temperature).exp();
            (base_temperature, pressure)
        } else {
            let temperature = base_temperature + lapse_rate * height;
            let pressure =
                base_pressure * (temperature / base_temperature).powf(-g_over_r / lapse_rate);
            (temperature, pressure)
        }
    }
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        StandardAtmosphere::new(EARTH_RADIUS, GRAVITY)
    }
}

impl Atmosphere for StandardAtmosphere {
    fn state_at(&self, altitude: f64) -> Result<AtmosphericState, HeatingError> {
        self.check_altitude(altitude)?;

        let geopotential = Self::geopotential_altitude(altitude);
        let (temperature, pressure) = Self::temperature_and_pressure(geopotential);
        let density = pressure / (GAS_CONSTANT_AIR * temperature);
        let speed_of_sound = (HEAT_CAPACITY_RATIO_AIR * GAS_CONSTANT_AIR * temperature).sqrt();

        Ok(AtmosphericState {
            temperature,
            pressure,
            density,
            speed_of_sound,
        })
    }

    fn gravity_at(&self, altitude: f64) -> Result<f64, HeatingError> {
        self.check_altitude(altitude)?;
        let distance = self.planet_radius + altitude;
        Ok(self.surface_gravity * (self.planet_radius / distance).powi(2))
    }
}
