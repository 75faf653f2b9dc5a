pub mod config;
pub mod constants;
pub mod environment;
pub mod errors;
pub mod heating_system;
pub mod io;
pub mod simulation;
pub mod telemetry_system;
pub mod thermal_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{HeatingConfig, MaterialProperties};
pub use constants::*;
pub use environment::atmosphere::{Atmosphere, AtmosphericState};
pub use environment::standard_atmosphere::StandardAtmosphere;
pub use errors::{HeatingError, LoadError};
pub use simulation::{HeatingHistory, HeatingRecord, HeatingSimulation};

// Re-export commonly used items from heating_system and thermal_system
pub use heating_system::convective::convective_heat_flux;
pub use heating_system::heat_flux::{HeatFlux, HeatFluxModel};
pub use heating_system::radiative::{NoseRadiusRegime, RadiativeHeating};
pub use thermal_system::thin_skin::ThinSkinIntegrator;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::kinematics::{DerivedKinematics, ReferenceState};
pub use trajectory_system::sample::{Trajectory, TrajectorySample};

// Re-export file adapters and reporting
pub use io::loader::{load_trajectory, read_trajectory, ColumnBinding, TrajectoryColumns};
pub use io::writer::{save_history, write_history};
pub use telemetry_system::telemetry::Telemetry;

// Re-export commonly used utilities
pub use utils::interpolation::ClampedTable;
