//! Run-level summary formatting.

use std::fmt;

use crate::models::DeviceReport;

/// Wrapper formatting the end-of-run footer, with failure counts for
/// logging.
pub struct RunSummary<'a> {
    reports: &'a [DeviceReport],
}

impl<'a> RunSummary<'a> {
    /// Create a summary over a finished run.
    pub fn new(reports: &'a [DeviceReport]) -> Self {
        Self { reports }
    }

    /// Number of devices visited.
    pub fn attempted(&self) -> usize {
        self.reports.len()
    }

    /// Number of devices that ended with a classified failure.
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.succeeded()).count()
    }
}

impl fmt::Display for RunSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        write!(f, "##### Proceso de configuración completado #####")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProvisionerError;

    #[test]
    fn test_footer_text() {
        let summary = RunSummary::new(&[]);
        assert!(format!("{summary}").contains("##### Proceso de configuración completado #####"));
    }

    #[test]
    fn test_counts() {
        let ok = DeviceReport::new("SW1", "10.10.12.2");
        let mut failed = DeviceReport::new("SW2", "10.10.12.3");
        failed.failure = Some(ProvisionerError::connection_timeout("10.10.12.3"));

        let reports = [ok, failed];
        let summary = RunSummary::new(&reports);
        assert_eq!(summary.attempted(), 2);
        assert_eq!(summary.failed(), 1);
    }
}
