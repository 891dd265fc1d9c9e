//! Writing submission files and checking them back from disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use sha2::Digest;
use tracing::{debug, info, warn};

use sacrra_layout::{FileValidator, LayoutVersion, SubmissionFile, kind_from_file_name};
use sacrra_model::FileKind;

/// One produced file as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub kind: FileKind,
    pub name: String,
    /// `None` for dry runs.
    pub path: Option<PathBuf>,
    pub line_count: usize,
    pub data_line_count: usize,
    pub byte_count: usize,
    pub sha256: String,
}

impl FileReport {
    fn new(file: &SubmissionFile, path: Option<PathBuf>) -> Self {
        Self {
            kind: file.kind,
            name: file.name.clone(),
            path,
            line_count: file.line_count,
            data_line_count: file.data_line_count,
            byte_count: file.bytes.len(),
            sha256: sha256_hex(&file.bytes),
        }
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Report a file without writing it.
pub fn describe(file: &SubmissionFile) -> FileReport {
    FileReport::new(file, None)
}

/// Write `file` into `dir`, then re-read and re-validate it.
///
/// Bytes go to a temporary name first and are renamed into place only after
/// the copy on disk validates and matches what was generated.
pub fn write_verified(dir: &Path, file: &SubmissionFile, version: LayoutVersion) -> Result<FileReport> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(&file.name);
    let staging = dir.join(format!(".{}.partial", file.name));

    fs::write(&staging, &file.bytes).with_context(|| format!("write {}", staging.display()))?;
    let verified = verify_staged(&staging, file, version);
    if let Err(error) = verified {
        if let Err(cleanup) = fs::remove_file(&staging) {
            warn!(
                path = %staging.display(),
                error = %cleanup,
                "failed to remove staged file"
            );
        }
        return Err(error);
    }
    fs::rename(&staging, &path)
        .with_context(|| format!("move {} into place", path.display()))?;

    let report = FileReport::new(file, Some(path));
    info!(
        file = %report.name,
        lines = report.line_count,
        bytes = report.byte_count,
        sha256 = %report.sha256,
        "submission file written"
    );
    Ok(report)
}

fn verify_staged(staging: &Path, file: &SubmissionFile, version: LayoutVersion) -> Result<()> {
    let on_disk = fs::read(staging).with_context(|| format!("re-read {}", staging.display()))?;
    if on_disk != file.bytes {
        return Err(anyhow!("{}: bytes on disk differ from generated output", file.name));
    }
    FileValidator::new(version)
        .validate(&file.name, file.kind, &on_disk)
        .with_context(|| format!("re-validate {}", file.name))?;
    debug!(file = %file.name, "re-validated from disk");
    Ok(())
}

/// Outcome of validating a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub kind: FileKind,
    pub line_count: usize,
    pub data_line_count: usize,
    pub line_width: usize,
    pub sha256: String,
}

/// Validate a submission file on disk.
///
/// The kind comes from `kind` or, when absent, from the file name.
pub fn check_file(path: &Path, kind: Option<FileKind>, version: LayoutVersion) -> Result<CheckedFile> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let kind = kind
        .or_else(|| kind_from_file_name(&name))
        .ok_or_else(|| anyhow!("cannot infer file kind from '{name}'; pass --kind"))?;
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let validated = FileValidator::new(version).validate(&name, kind, &bytes)?;
    Ok(CheckedFile {
        kind,
        line_count: validated.line_count,
        data_line_count: validated.data_line_count,
        line_width: validated.line_width,
        sha256: sha256_hex(&bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_known_input() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
