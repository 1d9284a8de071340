//! Structured diagnostics. Everything that a run wants to tell the user about the input data or
//! the configuration goes through here, so it can be filtered, sorted and printed in one place.

pub use builder::{fatal, tips, untidy, warn};
pub use error_loc::ErrorLoc;
pub use errorkey::ErrorKey;
pub use errors::{
    disable_ansi_colors, emit_reports, log, set_minimum_severity, take_reports, Errors,
};
pub use report_struct::{Confidence, LogReport, PointedMessage, Severity};

mod builder;
mod error_loc;
mod errorkey;
mod errors;
mod filter;
mod output_style;
mod report_struct;
mod writer;
mod writer_json;
