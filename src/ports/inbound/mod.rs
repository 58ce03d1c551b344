/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the tool
/// handler or the CLI) use to interact with the application core.
pub mod dependency_report_port;

pub use dependency_report_port::DependencyReportPort;
