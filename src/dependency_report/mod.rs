/// Dependency report core - pure domain logic
///
/// Domain models, the document/summary builders and the policies that shape
/// a report. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
