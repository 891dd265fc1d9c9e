//! Submission file validation.
//!
//! Checks run on assembled bytes, so the same code validates freshly built
//! files and files read back from disk:
//!
//! - every non-empty line is exactly the declared width for the file kind
//! - every byte is 7-bit ASCII
//! - monthly files start with a header, end with a trailer, and the trailer
//!   count equals the number of lines including header and trailer
//!
//! Validation stops at the first violation.

use sacrra_model::FileKind;

use crate::error::{LayoutError, Result};
use crate::layout::LayoutVersion;

/// Line terminator used between lines.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Summary of a file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFile {
    pub kind: FileKind,
    /// Non-empty lines in the file.
    pub line_count: usize,
    /// Data lines (all lines for daily files; excludes header and trailer for
    /// monthly files).
    pub data_line_count: usize,
    pub line_width: usize,
}

/// Validates assembled submission files against a layout version.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileValidator {
    version: LayoutVersion,
}

impl FileValidator {
    #[must_use]
    pub fn new(version: LayoutVersion) -> Self {
        Self { version }
    }

    /// Validate the bytes of a file named `file`.
    pub fn validate(&self, file: &str, kind: FileKind, bytes: &[u8]) -> Result<ValidatedFile> {
        let expected = self.version.line_width(kind);
        let lines = split_lines(bytes);
        for (idx, line) in lines.iter().enumerate() {
            check_line(file, idx + 1, line, expected)?;
        }
        let non_empty: Vec<&[u8]> = lines.into_iter().filter(|line| !line.is_empty()).collect();
        let data_line_count = match kind {
            FileKind::Daily => non_empty.len(),
            FileKind::Monthly => check_monthly_structure(file, &non_empty)?,
        };
        Ok(ValidatedFile {
            kind,
            line_count: non_empty.len(),
            data_line_count,
            line_width: expected,
        })
    }
}

/// Split on LF, dropping a trailing CR from each line.
fn split_lines(bytes: &[u8]) -> Vec<&[u8]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    bytes
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

fn check_line(file: &str, line_no: usize, line: &[u8], expected: usize) -> Result<()> {
    if line.is_empty() {
        return Ok(());
    }
    if let Some(column) = line.iter().position(|byte| !byte.is_ascii()) {
        return Err(LayoutError::NonAscii {
            file: file.to_string(),
            line: line_no,
            column: column + 1,
            byte: line[column],
        });
    }
    if line.len() != expected {
        return Err(LayoutError::LineLength {
            file: file.to_string(),
            line: line_no,
            expected,
            actual: line.len(),
        });
    }
    Ok(())
}

/// Returns the number of data lines.
fn check_monthly_structure(file: &str, lines: &[&[u8]]) -> Result<usize> {
    let (Some(first), Some(last)) = (lines.first(), lines.last()) else {
        return Err(LayoutError::EmptyFile {
            file: file.to_string(),
        });
    };
    if lines.len() < 2 {
        return Err(LayoutError::structure(
            file,
            "monthly file needs both a header and a trailer",
        ));
    }
    if first.first() != Some(&b'H') {
        return Err(LayoutError::structure(file, "first line is not a header"));
    }
    if last.first() != Some(&b'T') {
        return Err(LayoutError::structure(file, "last line is not a trailer"));
    }
    let count_field = last.get(1..10).unwrap_or_default();
    let declared = std::str::from_utf8(count_field)
        .ok()
        .and_then(|count| count.parse::<usize>().ok())
        .ok_or_else(|| LayoutError::structure(file, "trailer record count is not numeric"))?;
    if declared != lines.len() {
        return Err(LayoutError::structure(
            file,
            format!(
                "trailer declares {declared} records but file has {}",
                lines.len()
            ),
        ));
    }
    Ok(lines.len() - 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(tag: char, width: usize) -> String {
        let mut line = String::from(tag);
        line.push_str(&" ".repeat(width - 1));
        line
    }

    fn monthly(data_lines: usize, declared: usize) -> Vec<u8> {
        let mut lines = vec![line('H', 700)];
        lines.extend((0..data_lines).map(|_| line('D', 700)));
        let mut trailer = format!("T{declared:09}");
        trailer.push_str(&" ".repeat(690));
        lines.push(trailer);
        lines.join(LINE_TERMINATOR).into_bytes()
    }

    #[test]
    fn accepts_well_formed_monthly() {
        let result = FileValidator::default()
            .validate("m.txt", FileKind::Monthly, &monthly(2, 4))
            .expect("valid");
        assert_eq!(result.line_count, 4);
        assert_eq!(result.data_line_count, 2);
    }

    #[test]
    fn rejects_wrong_trailer_count() {
        let error = FileValidator::default()
            .validate("m.txt", FileKind::Monthly, &monthly(2, 3))
            .unwrap_err();
        assert!(matches!(error, LayoutError::Structure { .. }));
    }

    #[test]
    fn reports_first_short_line() {
        let bytes = [line('R', 718), line('C', 717), line('C', 10)].join(LINE_TERMINATOR);
        let error = FileValidator::default()
            .validate("d.txt", FileKind::Daily, bytes.as_bytes())
            .unwrap_err();
        match error {
            LayoutError::LineLength {
                file,
                line,
                expected,
                actual,
            } => {
                assert_eq!(file, "d.txt");
                assert_eq!(line, 2);
                assert_eq!(expected, 718);
                assert_eq!(actual, 717);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_ascii() {
        let mut text = line('R', 718);
        text.replace_range(5..7, "é");
        let error = FileValidator::default()
            .validate("d.txt", FileKind::Daily, text.as_bytes())
            .unwrap_err();
        assert!(matches!(
            error,
            LayoutError::NonAscii {
                line: 1,
                column: 6,
                ..
            }
        ));
    }

    #[test]
    fn skips_trailing_blank_line() {
        let mut bytes = line('R', 718).into_bytes();
        bytes.extend_from_slice(b"\r\n");
        let result = FileValidator::default()
            .validate("d.txt", FileKind::Daily, &bytes)
            .expect("valid");
        assert_eq!(result.line_count, 1);
    }

    #[test]
    fn empty_monthly_is_an_error() {
        let error = FileValidator::default()
            .validate("m.txt", FileKind::Monthly, b"")
            .unwrap_err();
        assert!(matches!(error, LayoutError::EmptyFile { .. }));
    }
}
