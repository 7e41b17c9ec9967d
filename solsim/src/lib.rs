pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod headless;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::history::History;
pub use simulation::forces::{Attraction, ForceLaw, NetForce, NewtonianGravity};
pub use simulation::integrator::{euler_sequential, euler_simultaneous};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig};
pub use configuration::error::ScenarioError;

pub use visualization::{solsim_vis2d::run_2d, view::{distance_label, View}};

pub use benchmark::benchmark::bench_step;
pub use headless::run_headless;
