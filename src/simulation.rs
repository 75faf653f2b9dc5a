use tracing::{debug, info, trace, warn};

use crate::config::HeatingConfig;
use crate::environment::atmosphere::Atmosphere;
use crate::errors::HeatingError;
use crate::heating_system::heat_flux::{HeatFlux, HeatFluxModel};
use crate::thermal_system::thin_skin::ThinSkinIntegrator;
use crate::trajectory_system::kinematics::{DerivedKinematics, ReferenceState};
use crate::trajectory_system::sample::Trajectory;

/// One output row, aligned with the input sample of the same index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatingRecord {
    pub time: f64,                // s
    pub ambient_temperature: f64, // K
    pub q_convective: f64,        // W/m²
    pub q_radiative: f64,         // W/m²
    pub surface_temperature: f64, // K
}

/// Complete result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatingHistory {
    pub records: Vec<HeatingRecord>,
    pub altitudes: Vec<f64>,
    pub kinematics: Vec<DerivedKinematics>,
}

impl HeatingHistory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn surface_temperatures(&self) -> Vec<f64> {
        self.records
            .iter()
            .map(|record| record.surface_temperature)
            .collect()
    }
}

/// Drives kinematics, heating and the thin-skin integrator over a trajectory.
pub struct HeatingSimulation<A: Atmosphere> {
    config: HeatingConfig,
    atmosphere: A,
    reference: ReferenceState,
    flux_model: HeatFluxModel,
    integrator: ThinSkinIntegrator,
}

impl<A: Atmosphere> HeatingSimulation<A> {
    pub fn new(config: HeatingConfig, atmosphere: A) -> Result<Self, HeatingError> {
        config.validate()?;

        let reference = ReferenceState::from_atmosphere(&atmosphere, config.planet_radius)?;
        debug!(
            temperature = reference.temperature,
            density = reference.density,
            speed_of_sound = reference.speed_of_sound,
            gravity = reference.gravity,
            "reference state at sea level"
        );

        let flux_model = HeatFluxModel::new(&config.material, &reference)?;
        let integrator = ThinSkinIntegrator::from_config(&config)?;

        Ok(HeatingSimulation {
            config,
            atmosphere,
            reference,
            flux_model,
            integrator,
        })
    }

    pub fn config(&self) -> &HeatingConfig {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceState {
        &self.reference
    }

    pub fn flux_model(&self) -> &HeatFluxModel {
        &self.flux_model
    }

    /// Validates raw series into a trajectory, then runs it.
    pub fn run_series(
        &self,
        time: &[f64],
        altitude: &[f64],
        mach: &[f64],
    ) -> Result<HeatingHistory, HeatingError> {
        let trajectory = Trajectory::from_series(time, altitude, mach)?;
        self.run(&trajectory)
    }

    pub fn run(&self, trajectory: &Trajectory) -> Result<HeatingHistory, HeatingError> {
        info!(
            samples = trajectory.len(),
            duration = trajectory.duration(),
            regime = ?self.flux_model.regime(),
            "starting heating reconstruction"
        );

        // Kinematics and flux have no history dependence, so they are
        // evaluated up front; only the temperature recurrence is sequential.
        let mut kinematics = Vec::with_capacity(trajectory.len());
        let mut fluxes = Vec::with_capacity(trajectory.len());
        for sample in trajectory.samples() {
            let state = DerivedKinematics::compute(sample, &self.reference, &self.atmosphere)?;
            fluxes.push(self.flux_model.evaluate(&state));
            kinematics.push(state);
        }

        let samples = trajectory.samples();
        let mut records = Vec::with_capacity(samples.len());
        let mut surface_temperature = self.config.initial_surface_temperature;
        records.push(Self::record(
            samples[0].time,
            &kinematics[0],
            &fluxes[0],
            surface_temperature,
        ));

        for i in 1..samples.len() {
            let dt = samples[i].time - samples[i - 1].time;
            let previous = surface_temperature;
            surface_temperature = self.integrator.step(previous, &fluxes[i], dt)?;
            self.check_step(samples[i].time, previous, surface_temperature);

            trace!(
                time = samples[i].time,
                ambient_temperature = kinematics[i].temperature,
                q_convective = fluxes[i].convective,
                q_radiative = fluxes[i].radiative,
                surface_temperature,
                "step"
            );
            records.push(Self::record(
                samples[i].time,
                &kinematics[i],
                &fluxes[i],
                surface_temperature,
            ));
        }

        info!(
            final_surface_temperature = surface_temperature,
            "heating reconstruction complete"
        );

        Ok(HeatingHistory {
            records,
            altitudes: samples.iter().map(|sample| sample.altitude).collect(),
            kinematics,
        })
    }

    fn record(
        time: f64,
        kinematics: &DerivedKinematics,
        flux: &HeatFlux,
        surface_temperature: f64,
    ) -> HeatingRecord {
        HeatingRecord {
            time,
            ambient_temperature: kinematics.temperature,
            q_convective: flux.convective,
            q_radiative: flux.radiative,
            surface_temperature,
        }
    }

    fn check_step(&self, time: f64, previous: f64, current: f64) {
        if current < 0.0 {
            warn!(
                time,
                surface_temperature = current,
                "surface temperature went negative; time step too coarse for the explicit scheme"
            );
        } else if previous > 0.0
            && (current - previous).abs() > self.config.stability_warning_fraction * previous
        {
            warn!(
                time,
                previous,
                current,
                "large surface temperature jump; explicit step may be unstable"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::atmosphere::AtmosphericState;
    use crate::environment::standard_atmosphere::StandardAtmosphere;
    use crate::trajectory_system::sample::TrajectorySample;
    use approx::assert_relative_eq;
    use std::cell::Cell;

    /// Counts lookups so tests can tell whether any flux work happened.
    struct CountingAtmosphere {
        inner: StandardAtmosphere,
        lookups: Cell<usize>,
    }

    impl Atmosphere for CountingAtmosphere {
        fn state_at(&self, altitude: f64) -> Result<AtmosphericState, HeatingError> {
            self.lookups.set(self.lookups.get() + 1);
            self.inner.state_at(altitude)
        }

        fn gravity_at(&self, altitude: f64) -> Result<f64, HeatingError> {
            self.inner.gravity_at(altitude)
        }
    }

    fn simulation() -> HeatingSimulation<StandardAtmosphere> {
        HeatingSimulation::new(HeatingConfig::default(), StandardAtmosphere::default()).unwrap()
    }

    #[test]
    fn test_first_record_is_seeded() {
        let simulation = simulation();
        let history = simulation
            .run_series(&[0.0, 1.0], &[60_000.0, 59_000.0], &[20.0, 20.0])
            .unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.records[0].surface_temperature,
            simulation.config().initial_surface_temperature
        );
        assert!(history.records[0].q_convective > 0.0);
    }

    #[test]
    fn test_records_follow_recurrence() {
        let simulation = simulation();
        let time = [0.0, 0.5, 1.5, 2.0];
        let altitude = [70_000.0, 68_000.0, 65_000.0, 63_000.0];
        let mach = [25.0, 24.8, 24.5, 24.0];
        let history = simulation.run_series(&time, &altitude, &mach).unwrap();

        let integrator = ThinSkinIntegrator::from_config(simulation.config()).unwrap();
        for i in 1..time.len() {
            let previous = history.records[i - 1].surface_temperature;
            let flux = HeatFlux::new(history.records[i].q_convective, history.records[i].q_radiative);
            let expected = integrator
                .step(previous, &flux, time[i] - time[i - 1])
                .unwrap();
            assert_relative_eq!(
                history.records[i].surface_temperature,
                expected,
                max_relative = 1e-12
            );
            assert_eq!(history.records[i].time, time[i]);
        }
    }

    #[test]
    fn test_output_aligned_with_kinematics() {
        let simulation = simulation();
        let history = simulation
            .run_series(&[0.0, 1.0, 2.0], &[0.0, 10_000.0, 20_000.0], &[0.5, 1.0, 1.5])
            .unwrap();

        assert_eq!(history.kinematics.len(), 3);
        assert_eq!(history.altitudes, vec![0.0, 10_000.0, 20_000.0]);
        for (record, kinematics) in history.records.iter().zip(&history.kinematics) {
            assert_eq!(record.ambient_temperature, kinematics.temperature);
        }
    }

    #[test]
    fn test_invalid_trajectory_rejected_before_flux() {
        let atmosphere = CountingAtmosphere {
            inner: StandardAtmosphere::default(),
            lookups: Cell::new(0),
        };
        let simulation = HeatingSimulation::new(HeatingConfig::default(), &atmosphere).unwrap();
        let after_init = atmosphere.lookups.get();

        let result = simulation.run_series(&[0.0, 1.0, 1.0], &[0.0; 3], &[1.0; 3]);

        assert!(matches!(result, Err(HeatingError::InvalidTrajectory(_))));
        assert_eq!(atmosphere.lookups.get(), after_init);
    }

    #[test]
    fn test_atmosphere_failure_aborts_run() {
        let simulation = simulation();
        let samples = vec![
            TrajectorySample::new(0.0, 100_000.0, 25.0),
            TrajectorySample::new(1.0, 400_000.0, 25.0),
        ];
        let trajectory = Trajectory::new(samples).unwrap();

        assert!(matches!(
            simulation.run(&trajectory),
            Err(HeatingError::AtmosphereLookupFailure { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = HeatingConfig::default();
        config.material.thickness = 0.0;
        assert!(matches!(
            HeatingSimulation::new(config, StandardAtmosphere::default()),
            Err(HeatingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_stationary_body_cools() {
        // At rest on the ground only the table floor of the radiative
        // correlation remains, which vanishes for a 2 cm nose.
        let simulation = HeatingSimulation::new(
            HeatingConfig {
                initial_surface_temperature: 600.0,
                ..HeatingConfig::default()
            },
            StandardAtmosphere::default(),
        )
        .unwrap();
        let time: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let history = simulation
            .run_series(&time, &[0.0; 20], &[0.0; 20])
            .unwrap();

        let temperatures = history.surface_temperatures();
        for pair in temperatures.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(history.records.iter().all(|r| r.q_convective == 0.0));
        assert!(history.records.iter().all(|r| r.q_radiative == 0.0));
    }
}
