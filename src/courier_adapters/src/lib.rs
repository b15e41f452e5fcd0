pub mod cleanup;
pub mod config;
pub mod email;
pub mod notify;
pub mod persistence;
pub mod telemetry;
