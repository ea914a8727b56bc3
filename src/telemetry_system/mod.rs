pub mod export;
pub mod recorder;
pub mod telemetry;
