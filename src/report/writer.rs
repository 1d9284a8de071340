use std::io::Write;

use ansiterm::{ANSIString, ANSIStrings};
use unicode_width::UnicodeWidthChar;

use crate::report::errors::Errors;
use crate::report::output_style::Styled;
use crate::report::{LogReport, PointedMessage, Severity};

/// Log the report.
pub fn log_report(errors: &mut Errors, report: &LogReport) {
    let indentation = report.indentation();
    // Log error lvl and message:
    log_line_title(errors, report);
    // Log the pointers. Only repeat the file location when it changes.
    let mut previous: Option<&PointedMessage> = None;
    for pointer in &report.pointers {
        log_pointer(errors, previous, pointer, indentation, report.severity);
        previous = Some(pointer);
    }
    // Log the info line, if one exists.
    if let Some(info) = &report.info {
        log_line_info(errors, indentation, info);
    }
    // Write a blank line to visually separate reports:
    let _ = writeln!(errors.output);
}

fn print_line(errors: &mut Errors, line: &[ANSIString<'static>]) {
    let _ = writeln!(errors.output, "{}", ANSIStrings(line));
}

fn log_pointer(
    errors: &mut Errors,
    previous: Option<&PointedMessage>,
    pointer: &PointedMessage,
    indentation: usize,
    severity: Severity,
) {
    if previous.is_none_or(|previous| previous.loc.pathname != pointer.loc.pathname) {
        log_line_file_location(errors, pointer, indentation);
    }
    if pointer.loc.line == 0 {
        // Zero-length line means the location is an entire file,
        // not any particular location within the file.
        return;
    }
    if let Some(line) = errors.get_line(&pointer.loc) {
        log_line_from_source(errors, pointer, indentation, &line);
        log_line_carets(errors, pointer, indentation, &line, severity);
    }
}

/// Log the first line of a report, containing the severity level and the error message.
fn log_line_title(errors: &mut Errors, report: &LogReport) {
    let styles = &errors.styles;
    let line = [
        styles.style(Styled::Tag(report.severity, true)).paint(report.severity.to_string()),
        styles.style(Styled::Tag(report.severity, false)).paint("("),
        styles.style(Styled::Tag(report.severity, false)).paint(report.key.to_string()),
        styles.style(Styled::Tag(report.severity, false)).paint(")"),
        styles.style(Styled::Default).paint(": "),
        styles.style(Styled::ErrorMessage).paint(report.msg.clone()),
    ];
    print_line(errors, &line);
}

/// Log the optional info line that is part of the overall report.
fn log_line_info(errors: &mut Errors, indentation: usize, info: &str) {
    let styles = &errors.styles;
    let line = [
        styles.style(Styled::Default).paint(format!("{:width$}", "", width = indentation)),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("="),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::InfoTag).paint("Info:"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Info).paint(info.to_owned()),
    ];
    print_line(errors, &line);
}

/// Log the line containing the file kind and filename.
fn log_line_file_location(errors: &mut Errors, pointer: &PointedMessage, indentation: usize) {
    let styles = &errors.styles;
    let mut location = pointer.loc.pathname().display().to_string();
    if pointer.loc.line > 0 {
        location = format!("{location}:{}:{}", pointer.loc.line, pointer.loc.column);
    }
    let line = [
        styles.style(Styled::Default).paint(format!("{:width$}", "", width = indentation)),
        styles.style(Styled::Location).paint("-->"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint(format!("[{}]", pointer.loc.kind)),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint(location),
    ];
    print_line(errors, &line);
}

/// Print a line from the source file.
fn log_line_from_source(
    errors: &mut Errors,
    pointer: &PointedMessage,
    indentation: usize,
    line: &str,
) {
    let styles = &errors.styles;
    let line = [
        styles
            .style(Styled::Location)
            .paint(format!("{:width$}", pointer.loc.line, width = indentation)),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("|"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::SourceText).paint(line.to_owned()),
    ];
    print_line(errors, &line);
}

/// A line containing the carets that point upwards at the source line.
fn log_line_carets(
    errors: &mut Errors,
    pointer: &PointedMessage,
    indentation: usize,
    line: &str,
    severity: Severity,
) {
    let mut spacing = String::new();
    for c in line.chars().take((pointer.loc.column as usize).saturating_sub(1)) {
        if c == '\t' {
            spacing.push('\t');
        } else {
            for _ in 0..c.width().unwrap_or(0) {
                spacing.push(' ');
            }
        }
    }
    let styles = &errors.styles;
    let line = [
        styles.style(Styled::Default).paint(format!("{:width$}", "", width = indentation)),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Location).paint("|"),
        styles.style(Styled::Default).paint(" "),
        styles.style(Styled::Default).paint(spacing),
        styles.style(Styled::Tag(severity, true)).paint("^".repeat(pointer.length)),
        styles.style(Styled::Default).paint(" "),
        styles
            .style(Styled::Tag(severity, true))
            .paint(pointer.msg.as_ref().map_or(String::new(), |msg| format!("<-- {msg}"))),
    ];
    print_line(errors, &line);
}
