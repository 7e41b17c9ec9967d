pub mod states;
pub mod history;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
