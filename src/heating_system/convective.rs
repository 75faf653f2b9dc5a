use crate::constants::{
    CONVECTIVE_COEFFICIENT, CONVECTIVE_DENSITY_EXPONENT, CONVECTIVE_VELOCITY_EXPONENT,
};

/// Stagnation-point convective heat flux of a blunt body (W/m²).
///
/// Density is normalized by the sea-level reference and velocity by the
/// local circular-orbit velocity.
pub fn convective_heat_flux(
    nose_radius: f64,
    density: f64,
    reference_density: f64,
    velocity: f64,
    circular_velocity: f64,
) -> f64 {
    CONVECTIVE_COEFFICIENT / nose_radius.sqrt()
        * (density / reference_density).powf(CONVECTIVE_DENSITY_EXPONENT)
        * (velocity.abs() / circular_velocity).powf(CONVECTIVE_VELOCITY_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RHO0: f64 = 1.225;
    const UC: f64 = 7_900.0;

    #[test]
    fn test_unit_ratios() {
        let q = convective_heat_flux(0.02, RHO0, RHO0, UC, UC);

        assert_relative_eq!(q, 11030.0 / 0.02_f64.sqrt() * 1e4, max_relative = 1e-12);
        assert_relative_eq!(q, 7.8e8, max_relative = 2e-3);
    }

    #[test]
    fn test_zero_density_gives_zero_flux() {
        for velocity in [0.0, 1_000.0, 7_900.0, 12_000.0] {
            assert_eq!(convective_heat_flux(0.02, 0.0, RHO0, velocity, UC), 0.0);
        }
    }

    #[test]
    fn test_monotonic_in_speed() {
        let mut previous = 0.0;
        for step in 0..200 {
            let velocity = step as f64 * 60.0;
            let q = convective_heat_flux(0.5, 0.01, RHO0, velocity, UC);
            assert!(q >= previous, "flux decreased at {} m/s", velocity);
            previous = q;
        }
    }

    #[test]
    fn test_uses_absolute_velocity() {
        let forward = convective_heat_flux(0.02, 0.1, RHO0, 3_000.0, UC);
        let backward = convective_heat_flux(0.02, 0.1, RHO0, -3_000.0, UC);
        assert_relative_eq!(forward, backward, max_relative = 1e-15);
    }

    #[test]
    fn test_scaling_laws() {
        let base = convective_heat_flux(0.02, 0.1, RHO0, 3_000.0, UC);

        let quartered_radius = convective_heat_flux(0.005, 0.1, RHO0, 3_000.0, UC);
        assert_relative_eq!(quartered_radius / base, 2.0, max_relative = 1e-12);

        let quadrupled_density = convective_heat_flux(0.02, 0.4, RHO0, 3_000.0, UC);
        assert_relative_eq!(quadrupled_density / base, 2.0, max_relative = 1e-12);

        let doubled_speed = convective_heat_flux(0.02, 0.1, RHO0, 6_000.0, UC);
        assert_relative_eq!(doubled_speed / base, 2.0_f64.powf(3.05), max_relative = 1e-12);
    }
}
