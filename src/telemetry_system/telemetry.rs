use crate::simulation::HeatingHistory;

/// A peak value and the time it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub value: f64,
    pub time: f64,
}

impl Peak {
    fn track(&mut self, value: f64, time: f64) {
        if value > self.value {
            self.value = value;
            self.time = time;
        }
    }
}

impl Default for Peak {
    fn default() -> Self {
        Peak {
            value: f64::NEG_INFINITY,
            time: 0.0,
        }
    }
}

/// Summary statistics of a heating history.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub samples: usize,
    pub duration: f64,
    pub max_convective: Peak,
    pub max_radiative: Peak,
    pub max_total_flux: Peak,
    pub max_surface_temperature: Peak,
    pub final_surface_temperature: f64,
    pub max_velocity: f64,
    /// Time integral of total incoming flux (J/m²), trapezoidal.
    pub heat_load: f64,
}

impl Telemetry {
    pub fn from_history(history: &HeatingHistory) -> Self {
        let mut max_convective = Peak::default();
        let mut max_radiative = Peak::default();
        let mut max_total_flux = Peak::default();
        let mut max_surface_temperature = Peak::default();

        for record in &history.records {
            max_convective.track(record.q_convective, record.time);
            max_radiative.track(record.q_radiative, record.time);
            max_total_flux.track(record.q_convective + record.q_radiative, record.time);
            max_surface_temperature.track(record.surface_temperature, record.time);
        }

        let heat_load = history
            .records
            .windows(2)
            .map(|pair| {
                let q0 = pair[0].q_convective + pair[0].q_radiative;
                let q1 = pair[1].q_convective + pair[1].q_radiative;
                0.5 * (q0 + q1) * (pair[1].time - pair[0].time)
            })
            .sum();

        let duration = match (history.records.first(), history.records.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        };

        let max_velocity = history
            .kinematics
            .iter()
            .map(|state| state.velocity.abs())
            .fold(0.0, f64::max);

        Telemetry {
            samples: history.len(),
            duration,
            max_convective,
            max_radiative,
            max_total_flux,
            max_surface_temperature,
            final_surface_temperature: history
                .records
                .last()
                .map_or(f64::NAN, |record| record.surface_temperature),
            max_velocity,
            heat_load,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_flux(flux: f64) -> String {
        format!("{:.4} MW/m²", flux / 1.0e6)
    }

    pub fn summary(&self) -> String {
        format!(
            "--- Heating Summary ---\n\
             Samples: {}\n\
             Duration: {}\n\
             Max Velocity: {:.2} m/s\n\
             Peak Convective Flux: {} at t={}\n\
             Peak Radiative Flux: {} at t={}\n\
             Peak Total Flux: {} at t={}\n\
             Heat Load: {:.4} MJ/m²\n\
             Peak Surface Temperature: {:.2} K at t={}\n\
             Final Surface Temperature: {:.2} K",
            self.samples,
            Self::format_time(self.duration),
            self.max_velocity,
            Self::format_flux(self.max_convective.value),
            Self::format_time(self.max_convective.time),
            Self::format_flux(self.max_radiative.value),
            Self::format_time(self.max_radiative.time),
            Self::format_flux(self.max_total_flux.value),
            Self::format_time(self.max_total_flux.time),
            self.heat_load / 1.0e6,
            self.max_surface_temperature.value,
            Self::format_time(self.max_surface_temperature.time),
            self.final_surface_temperature,
        )
    }

    pub fn display_data(&self) {
        println!("{}", self.summary());
    }
}
