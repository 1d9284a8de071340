use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The category of a report. Shown in parentheses after the severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKey {
    /// Problems in the JSON modifier configuration.
    Config,
    /// A file was not valid UTF-8 and had to be decoded differently.
    Encoding,
    /// A recognized line whose arguments could not be understood.
    ParseError,
    /// A record without any attributes worth modifying.
    EmptyRecord,
    /// A ritual power id that was given more than one name.
    DuplicateName,
    /// A configuration entry that refers to a ritual power that the data doesn't have.
    UnknownCategory,
    /// A class assigned to a tier that has no percentage.
    UnknownTier,
    /// The base mod named in the configuration could not be found.
    MissingBaseMod,
}
