//! Collect error reports and then write them out.

use std::collections::HashMap;
use std::io::{stderr, Write};
use std::mem::take;
use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::datafile::decode;
use crate::report::filter::ReportFilter;
use crate::report::output_style::OutputStyle;
use crate::report::writer::log_report;
use crate::report::writer_json::log_report_json;
use crate::report::{LogReport, Severity};
use crate::token::Loc;

static ERRORS: LazyLock<Mutex<Errors>> = LazyLock::new(|| Mutex::new(Errors::default()));

#[allow(missing_debug_implementations)]
pub struct Errors {
    pub(crate) output: Box<dyn Write + Send>,

    /// Files that have been read in to get the lines where errors occurred.
    /// Cached here to avoid duplicate I/O and decoding.
    filecache: HashMap<PathBuf, String>,

    /// Determines whether a report should be printed.
    pub(crate) filter: ReportFilter,
    /// Output color and style configuration.
    pub(crate) styles: OutputStyle,

    /// All reports that passed the checks, stored here to be sorted before being emitted all at once.
    storage: Vec<LogReport>,
}

impl Default for Errors {
    fn default() -> Self {
        Errors {
            output: Box::new(stderr()),
            filecache: HashMap::default(),
            filter: ReportFilter::default(),
            styles: OutputStyle::default(),
            storage: Vec::default(),
        }
    }
}

impl Errors {
    /// Fetch the contents of a single line from a source file.
    pub(crate) fn get_line(&mut self, loc: &Loc) -> Option<String> {
        if loc.line == 0 {
            return None;
        }
        let idx = loc.line as usize - 1;
        let pathname = loc.pathname().to_path_buf();
        if let Some(contents) = self.filecache.get(&pathname) {
            return contents.lines().nth(idx).map(str::to_owned);
        }
        let bytes = std::fs::read(&pathname).ok()?;
        let (contents, _) = decode(&bytes);
        let line = contents.lines().nth(idx).map(str::to_owned);
        self.filecache.insert(pathname, contents);
        line
    }

    /// Perform some checks to see whether the report should actually be logged.
    /// If yes, it will add it to the storage.
    fn push_report(&mut self, report: LogReport) {
        if !self.filter.should_print_report(&report) {
            return;
        }
        if !self.storage.contains(&report) {
            self.storage.push(report);
        }
    }

    /// Extract the stored reports, sort them, and return them.
    /// The storage is left empty.
    fn take_reports(&mut self) -> Vec<LogReport> {
        let mut reports = take(&mut self.storage);
        reports.sort_by(|a, b| {
            a.primary()
                .loc
                .cmp(&b.primary().loc)
                .then_with(|| b.severity.cmp(&a.severity))
                .then_with(|| a.msg.cmp(&b.msg))
        });
        reports
    }

    /// Print all the stored reports to the error output.
    /// Set `json` if they should be printed as a JSON array. Otherwise they are printed in the
    /// default output format.
    ///
    /// Returns true iff any reports were printed.
    pub fn emit_reports(&mut self, json: bool) -> bool {
        let reports = self.take_reports();
        let result = !reports.is_empty();
        if json {
            let _ = writeln!(self.output, "[");
        }
        let mut first = true;
        for report in &reports {
            if json {
                if !first {
                    let _ = writeln!(self.output, ",");
                }
                first = false;
                log_report_json(self, report);
            } else {
                log_report(self, report);
            }
        }
        if json {
            let _ = writeln!(self.output, "\n]");
        }
        let _ = self.output.flush();
        result
    }

    /// A poisoned lock only means some earlier report panicked mid-write; the store is still usable.
    pub fn get_mut() -> MutexGuard<'static, Errors> {
        ERRORS.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Record a report. It is printed when [`emit_reports`] is called.
pub fn log(report: LogReport) {
    Errors::get_mut().push_report(report);
}

/// Print all the stored reports to the error output.
/// Returns true iff any reports were printed.
pub fn emit_reports(json: bool) -> bool {
    Errors::get_mut().emit_reports(json)
}

/// Extract the stored reports, sorted by location, leaving the storage empty.
pub fn take_reports() -> Vec<LogReport> {
    Errors::get_mut().take_reports()
}

/// Disable color in the output.
pub fn disable_ansi_colors() {
    Errors::get_mut().styles = OutputStyle::no_color();
}

/// Only reports at or above this severity will be stored.
pub fn set_minimum_severity(severity: Severity) {
    Errors::get_mut().filter.min_severity = severity;
}
