pub mod cli;
mod path;

pub use self::path::*;

use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionTripleError {
    #[error("Failed to parse major version from {version:?}: {source}")]
    MajorInvalid {
        version: String,
        source: ParseIntError,
    },
    #[error("Failed to parse minor version from {version:?}: {source}")]
    MinorInvalid {
        version: String,
        source: ParseIntError,
    },
    #[error("Failed to parse patch version from {version:?}: {source}")]
    PatchInvalid {
        version: String,
        source: ParseIntError,
    },
    #[error(
        "Failed to parse version string {version:?}: string must be in format <major>[.minor][.patch]"
    )]
    VersionStringInvalid { version: String },
}

// Generic version triple
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

macro_rules! parse {
    ($component:expr, $version:expr, $variant:ident) => {
        $component
            .parse::<u32>()
            .map_err(|source| VersionTripleError::$variant {
                version: $version.to_owned(),
                source,
            })
    };
}

impl FromStr for VersionTriple {
    type Err = VersionTripleError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        match v.split('.').collect::<Vec<_>>().as_slice() {
            [major] => Ok(Self::new(parse!(major, v, MajorInvalid)?, 0, 0)),
            [major, minor] => Ok(Self::new(
                parse!(major, v, MajorInvalid)?,
                parse!(minor, v, MinorInvalid)?,
                0,
            )),
            [major, minor, patch] => Ok(Self::new(
                parse!(major, v, MajorInvalid)?,
                parse!(minor, v, MinorInvalid)?,
                parse!(patch, v, PatchInvalid)?,
            )),
            _ => Err(VersionTripleError::VersionStringInvalid {
                version: v.to_owned(),
            }),
        }
    }
}

impl VersionTriple {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}
