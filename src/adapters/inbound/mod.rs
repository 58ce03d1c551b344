/// Inbound adapters - Driving adapters that call into the application core
pub mod tool;
