pub mod anti_spam;
pub mod config;
pub mod persistence;
pub mod telemetry;
