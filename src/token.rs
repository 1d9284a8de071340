//! Strings that remember where in which file they came from.

use std::fmt::{Display, Error, Formatter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

/// What role a file plays in a run. Shown in front of paths in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[derive(StrumDisplay, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A game data file such as `Ritual Data v5.33.c5m`.
    Data,
    /// An existing mod that gets prepended to the generated one.
    Base,
    /// The user's JSON modifier configuration.
    Config,
}

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Loc {
    pub pathname: Arc<PathBuf>,
    pub kind: FileKind,
    /// line 0 means the loc applies to the file as a whole.
    pub line: u32,
    pub column: u32,
}

impl Loc {
    pub fn for_file(pathname: Arc<PathBuf>, kind: FileKind) -> Self {
        Loc { pathname, kind, line: 0, column: 0 }
    }

    pub fn for_path(pathname: &Path, kind: FileKind) -> Self {
        Self::for_file(Arc::new(pathname.to_path_buf()), kind)
    }

    pub fn pathname(&self) -> &Path {
        &self.pathname
    }
}

#[derive(Clone, Debug)]
pub struct Token {
    s: String,
    pub loc: Loc,
}

impl Token {
    pub fn new(s: String, loc: Loc) -> Self {
        Token { s, loc }
    }

    pub fn as_str(&self) -> &str {
        &self.s
    }

    /// Parse the token as an unsigned decimal number.
    /// Only plain digits are accepted; signs, spaces and fractions are not.
    pub fn get_number(&self) -> Option<u32> {
        if self.s.is_empty() || !self.s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.s.parse::<u32>().ok()
    }
}

/// Tokens are compared for equality regardless of their loc.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.s == other.s
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.s)
    }
}
