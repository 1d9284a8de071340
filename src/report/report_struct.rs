use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::report::ErrorKey;
use crate::token::Loc;

/// Describes a report about a potentially problematic situation that can be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogReport {
    /// Used for choosing output colors and for filtering reports.
    pub severity: Severity,
    /// Only shown in the JSON output.
    pub confidence: Confidence,
    /// Defines the problem category. Used for filtering reports.
    pub key: ErrorKey,
    /// The primary error message. A short description of the problem.
    pub msg: String,
    /// Optional info message to be printed at the end.
    pub info: Option<String>,
    /// Should contain one or more elements.
    pub pointers: Vec<PointedMessage>,
}

impl LogReport {
    /// Returns the primary pointer.
    #[allow(clippy::missing_panics_doc)] // the builder guarantees at least one pointer
    pub fn primary(&self) -> &PointedMessage {
        self.pointers.first().expect("A LogReport must always have at least one PointedMessage.")
    }

    /// Returns the length of the longest line number.
    pub fn indentation(&self) -> usize {
        self.pointers.iter().map(|pointer| pointer.loc.line.to_string().len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointedMessage {
    /// Which file and where in the file the error occurs.
    /// Might point to a whole file, rather than a specific location in the file.
    pub loc: Loc,
    /// The length of the offending phrase in characters.
    /// This will determine the number of carets that are printed at the given location.
    pub length: usize,
    /// A short message that will be printed at the caret location.
    pub msg: Option<String>,
}

/// Determines the output colour.
/// User can also filter by minimum severity level: e.g. don't show me Tips-level messages.
#[derive(Default, Debug, Display, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[derive(EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Notes about leniencies in the input: lines that were skipped, records that were dropped.
    Tips,
    /// Harmless oddities in the input data.
    Untidy,
    /// Something in the configuration probably doesn't do what the user intended.
    #[default]
    Warning,
    /// Something that makes the generated mod incomplete.
    Error,
    /// The run cannot continue.
    Fatal,
}

/// Mostly invisible in the output.
/// Reported in the JSON output.
#[derive(Default, Debug, Display, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Quite likely to be a false positive.
    Weak,
    /// Reasonably confident that the problem is real.
    #[default]
    Reasonable,
    /// Very confident that this problem is real.
    Strong,
}
