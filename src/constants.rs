// Physical Constants
pub const EARTH_RADIUS: f64 = 6_371_000.0; // meters
pub const STEFAN_BOLTZMANN: f64 = 5.669e-8; // W/m²·K⁴
pub const AIR_SPECIFIC_HEAT_CP: f64 = 1006.0; // J/kg·K, reserved: not used by the correlations
pub const GAS_CONSTANT_AIR: f64 = 287.053; // J/kg·K
pub const HEAT_CAPACITY_RATIO_AIR: f64 = 1.4;
pub const GRAVITY: f64 = 9.80665; // m/s² at sea level

// Standard Atmosphere
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
pub const MIN_MODEL_ALTITUDE: f64 = -5_000.0; // m
pub const MAX_MODEL_ALTITUDE: f64 = 150_000.0; // m

// Heating Correlations
pub const CONVECTIVE_COEFFICIENT: f64 = 11030.0 * 1.0e4; // W/m^1.5, folds cm² -> m²
pub const CONVECTIVE_DENSITY_EXPONENT: f64 = 0.5;
pub const CONVECTIVE_VELOCITY_EXPONENT: f64 = 3.05;
pub const RADIATIVE_COEFFICIENT: f64 = 4.736e4 * 1.0e4;
pub const RADIATIVE_DENSITY_EXPONENT: f64 = 1.22;
pub const RADIUS_EXPONENT_COEFFICIENT: f64 = 1.072e6;
pub const RADIUS_EXPONENT_VELOCITY_POWER: f64 = -1.88;
pub const RADIUS_EXPONENT_DENSITY_POWER: f64 = -0.325;
pub const INTERMEDIATE_RADIUS_EXPONENT_CAP: f64 = 0.6;
pub const LARGE_RADIUS_EXPONENT_CAP: f64 = 0.5;
pub const SMALL_NOSE_RADIUS_LIMIT: f64 = 1.0; // m
pub const LARGE_NOSE_RADIUS_LIMIT: f64 = 2.0; // m

// Tauber radiative velocity function, velocity in km/s
pub const RADIATIVE_VELOCITY_TABLE_KM_S: [f64; 19] = [
    9.0, 9.25, 9.5, 9.75, 10.0, 10.25, 10.5, 10.75, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0, 14.5,
    15.0, 15.5, 16.0,
];
pub const RADIATIVE_VELOCITY_FUNCTION: [f64; 19] = [
    1.5, 4.3, 9.7, 18.5, 35.0, 55.0, 81.0, 115.0, 151.0, 238.0, 359.0, 495.0, 660.0, 850.0,
    1065.0, 1313.0, 1550.0, 1780.0, 2040.0,
];

// Default Vehicle (nose-cone)
pub const DEFAULT_INITIAL_SURFACE_TEMPERATURE: f64 = 15.0 + 273.15; // K
pub const DEFAULT_NOSE_RADIUS: f64 = 0.02; // m
pub const DEFAULT_NOSE_DENSITY: f64 = 1270.0; // kg/m³
pub const DEFAULT_NOSE_THICKNESS: f64 = 0.025; // m at stagnation point
pub const DEFAULT_NOSE_SPECIFIC_HEAT: f64 = 1591.0; // J/kg·K
pub const DEFAULT_EMISSIVITY: f64 = 0.8;

// Simulation Parameters
pub const DEFAULT_STABILITY_WARNING_FRACTION: f64 = 0.5; // of the previous temperature per step
