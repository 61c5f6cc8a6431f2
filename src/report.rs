//! Report emission: the tab-separated console line and the XML sidecar.
//!
//! Both sinks carry the same four fields: input filename, stable
//! orientation id, orientation name, and formatted confidence. A failed
//! pipeline run still produces well-formed reports (ERROR / -1 / 0), so
//! downstream consumers never see a partial result.
use crate::types::{OrientationError, TextOrientation};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Report sinks selected by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    pub emit_console: bool,
    pub emit_file: bool,
}

/// Emit the selected reports for one processed image.
pub fn emit(
    filename: &str,
    orientation: TextOrientation,
    confidence: f32,
    options: ReportOptions,
) -> Result<(), OrientationError> {
    if options.emit_console {
        print!("{}", console_line(filename, orientation, confidence));
    }
    if options.emit_file {
        let path = xml_output_path(filename);
        write_xml_report(&path, filename, orientation, confidence)?;
        debug!("wrote XML report to {}", path.display());
    }
    Ok(())
}

/// Tab-separated single-line report, newline-terminated.
pub fn console_line(filename: &str, orientation: TextOrientation, confidence: f32) -> String {
    format!(
        "TextOrientation: \t{}\t{}\t{}\t{}\n",
        filename,
        orientation.id(),
        orientation.name(),
        format_confidence(confidence)
    )
}

/// Sidecar path: the input name truncated at its last `.` plus `.xml`;
/// when there is no `.`, `.xml` is appended to the full name.
pub fn xml_output_path(input: &str) -> PathBuf {
    match input.rfind('.') {
        Some(pos) => PathBuf::from(format!("{}.xml", &input[..pos])),
        None => PathBuf::from(format!("{input}.xml")),
    }
}

/// Four-element XML document mirroring the console line.
pub fn xml_document(filename: &str, orientation: TextOrientation, confidence: f32) -> String {
    format!(
        "<input_filename>{}</input_filename>\n\
         <orientation_id>{}</orientation_id>\n\
         <orientation_name>{}</orientation_name>\n\
         <confidence>{}</confidence>\n",
        xml_escape(filename),
        orientation.id(),
        orientation.name(),
        format_confidence(confidence)
    )
}

/// Confidence renders with two decimals, except a bare `0` when exactly
/// zero.
pub fn format_confidence(confidence: f32) -> String {
    if confidence == 0.0 {
        "0".to_string()
    } else {
        format!("{confidence:.2}")
    }
}

fn write_xml_report(
    path: &Path,
    filename: &str,
    orientation: TextOrientation,
    confidence: f32,
) -> Result<(), OrientationError> {
    fs::write(path, xml_document(filename, orientation, confidence)).map_err(|e| {
        OrientationError::Report {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
