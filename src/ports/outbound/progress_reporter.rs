/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while a dependency tree is walked.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that a module was visited
    ///
    /// # Arguments
    /// * `visited` - Number of modules visited so far, this one included
    /// * `identity` - The module's `name@version`
    fn report_module(&self, visited: usize, identity: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// A reporter that drops every message
impl ProgressReporter for () {
    fn report(&self, _message: &str) {}
    fn report_module(&self, _visited: usize, _identity: &str) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}
