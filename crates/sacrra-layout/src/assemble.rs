//! Joining built lines into a validated submission file.

use tracing::debug;

use sacrra_model::FileKind;

use crate::error::Result;
use crate::layout::LayoutVersion;
use crate::validate::{FileValidator, LINE_TERMINATOR, ValidatedFile};

/// A validated, ready-to-write submission file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    pub kind: FileKind,
    /// File name per the bureau naming convention.
    pub name: String,
    pub bytes: Vec<u8>,
    pub line_count: usize,
    pub data_line_count: usize,
}

/// Joins lines with CRLF and validates the result.
///
/// Nothing is returned for a file that fails validation.
pub fn assemble(
    version: LayoutVersion,
    kind: FileKind,
    name: impl Into<String>,
    lines: &[String],
) -> Result<SubmissionFile> {
    let name = name.into();
    let bytes = lines.join(LINE_TERMINATOR).into_bytes();
    let ValidatedFile {
        line_count,
        data_line_count,
        line_width,
        ..
    } = FileValidator::new(version).validate(&name, kind, &bytes)?;
    debug!(
        file = %name,
        kind = %kind,
        line_count,
        line_width,
        bytes = bytes.len(),
        "assembled submission file"
    );
    Ok(SubmissionFile {
        kind,
        name,
        bytes,
        line_count,
        data_line_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn joins_with_crlf_without_trailing_terminator() {
        let lines = vec!["R".repeat(718), "C".repeat(718)];
        let file = assemble(LayoutVersion::V700, FileKind::Daily, "d.txt", &lines).expect("valid");
        assert_eq!(file.bytes.len(), 718 * 2 + 2);
        assert_eq!(&file.bytes[718..720], b"\r\n");
        assert!(!file.bytes.ends_with(b"\r\n"));
        assert_eq!(file.data_line_count, 2);
    }

    #[test]
    fn refuses_mixed_widths() {
        let lines = vec!["R".repeat(718), "R".repeat(700)];
        let error =
            assemble(LayoutVersion::V700, FileKind::Daily, "d.txt", &lines).unwrap_err();
        assert_eq!(error.line(), Some(2));
        assert!(matches!(error, LayoutError::LineLength { .. }));
    }
}
