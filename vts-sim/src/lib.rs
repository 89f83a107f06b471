//! Vehicle dynamics models and the trip simulator

pub mod anomaly;
pub mod driver;
pub mod dynamics;
pub mod gearbox;
pub mod powertrain;
pub mod profile;
pub mod row;
pub mod simulator;
pub mod state;
pub mod thermal;

pub use anomaly::AnomalyPolicy;
pub use simulator::{TripConfig, TripSimulator};
pub use state::SimulationState;
