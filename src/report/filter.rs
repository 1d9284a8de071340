use crate::report::{Confidence, ErrorKey, LogReport, Severity};

/// Determines whether a given Report should be printed.
#[derive(Default, Debug)]
pub struct ReportFilter {
    /// Minimum severity to log
    pub min_severity: Severity,
}

impl ReportFilter {
    /// Returns true iff the report should be printed.
    /// Confidence is carried along for the JSON output, but does not affect printing.
    pub fn should_print_report(&self, report: &LogReport) -> bool {
        self.should_print(report.severity, report.key)
    }

    pub fn should_print(&self, severity: Severity, key: ErrorKey) -> bool {
        if key == ErrorKey::Config && severity >= Severity::Error {
            // Configuration errors are always shown.
            return true;
        }
        severity >= self.min_severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::PointedMessage;
    use crate::token::{FileKind, Loc};

    fn report(key: ErrorKey, severity: Severity, confidence: Confidence) -> LogReport {
        let loc = Loc::for_path(std::path::Path::new("test.c5m"), FileKind::Data);
        LogReport {
            key,
            severity,
            confidence,
            msg: "test".to_owned(),
            info: None,
            pointers: vec![PointedMessage { loc, length: 0, msg: None }],
        }
    }

    #[test]
    fn test_min_severity() {
        let filter = ReportFilter::default();
        assert!(!filter.should_print(Severity::Tips, ErrorKey::EmptyRecord));
        assert!(filter.should_print(Severity::Warning, ErrorKey::UnknownTier));

        let filter = ReportFilter { min_severity: Severity::Tips };
        assert!(filter.should_print(Severity::Tips, ErrorKey::EmptyRecord));
    }

    #[test]
    fn test_weak_tips_shown_with_tips() {
        let empty = report(ErrorKey::EmptyRecord, Severity::Tips, Confidence::Weak);
        assert!(!ReportFilter::default().should_print_report(&empty));
        assert!(ReportFilter { min_severity: Severity::Tips }.should_print_report(&empty));
    }

    #[test]
    fn test_config_errors_always_print() {
        let filter = ReportFilter { min_severity: Severity::Fatal };
        assert!(filter.should_print(Severity::Error, ErrorKey::Config));
        assert!(!filter.should_print(Severity::Warning, ErrorKey::Config));
        assert!(!filter.should_print(Severity::Error, ErrorKey::MissingBaseMod));
    }
}
