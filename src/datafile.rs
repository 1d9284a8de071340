//! Reading the game's `.c5m` data files from disk.

use std::fs::read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::{UTF_8, WINDOWS_1252};
use thiserror::Error;

use crate::report::{untidy, ErrorKey};
use crate::token::{FileKind, Loc};

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("Could not find '{}'", .0.display())]
    NotFound(PathBuf),
}

/// How the bytes of a file were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Windows1252,
}

/// Decode file contents. UTF-8 is tried first (with or without BOM), and anything that isn't
/// valid UTF-8 is read as Windows-1252, which is what older game data tends to use.
pub fn decode(bytes: &[u8]) -> (String, SourceEncoding) {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    if let Some(contents) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return (contents.into_owned(), SourceEncoding::Utf8);
    }
    let (contents, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    (contents.into_owned(), SourceEncoding::Windows1252)
}

/// Read a whole file into memory as text.
/// A missing file is reported as [`DataFileError::NotFound`] so callers can name the path.
pub fn read_data_file(pathname: &Path, kind: FileKind) -> Result<String> {
    if !pathname.is_file() {
        return Err(DataFileError::NotFound(pathname.to_path_buf()).into());
    }
    let bytes =
        read(pathname).with_context(|| format!("Could not read {}", pathname.display()))?;
    let (contents, encoding) = decode(&bytes);
    if encoding == SourceEncoding::Windows1252 {
        let msg = "file is not valid UTF-8; reading it as Windows-1252";
        untidy(ErrorKey::Encoding).msg(msg).loc(Loc::for_path(pathname, kind)).push();
    }
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_decode_utf8_with_bom() {
        let (text, encoding) = decode(b"\xef\xbb\xbfnewritual \"A\"");
        assert_eq!(text, "newritual \"A\"");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn test_decode_windows_1252() {
        let (text, encoding) = decode(b"newmonster \"Tr\xe4ll\"");
        assert_eq!(text, "newmonster \"Tr\u{e4}ll\"");
        assert_eq!(encoding, SourceEncoding::Windows1252);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Ritual Data v5.33.c5m");
        let err = read_data_file(&path, FileKind::Data).unwrap_err();
        assert!(matches!(err.downcast_ref::<DataFileError>(), Some(DataFileError::NotFound(_))));
        assert!(err.to_string().contains("Ritual Data v5.33.c5m"));
    }

    #[test]
    fn test_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "newritual \"Summon Imp\"").unwrap();
        let text = read_data_file(file.path(), FileKind::Data).unwrap();
        assert_eq!(text, "newritual \"Summon Imp\"\n");
    }
}
