/// ProgressReporter port for reporting progress during an analysis
///
/// This port abstracts user-facing progress output (e.g., to stderr)
/// so that stdout stays reserved for the envelope.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
