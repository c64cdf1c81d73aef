//! Makes sure the host has a JavaScript runtime recent enough for the
//! generated project before we touch the filesystem.

use crate::util::{
    cli::{Report, Reportable},
    VersionTriple, VersionTripleError,
};
use std::io;
use thiserror::Error;

pub static NODE: &str = "node";

pub static MIN_NODE_VERSION: VersionTriple = VersionTriple::new(6, 0, 0);

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to find `node` on your `PATH`: {0}")]
    NodeMissing(#[source] which::Error),
    #[error("Failed to run `node --version`: {0}")]
    VersionCheckFailed(#[source] io::Error),
    #[error("`node --version` printed {raw:?}, which isn't a version: {source}")]
    VersionInvalid {
        raw: String,
        source: VersionTripleError,
    },
    #[error("Node {found} is older than the required 6.0.0")]
    TooOld { found: VersionTriple },
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::TooOld { found } => Report::error(
                "Looks like your Node version is too old.",
                format!(
                    "Please, upgrade to v{}.{}+ and try again (found v{}).",
                    MIN_NODE_VERSION.major, MIN_NODE_VERSION.minor, found
                ),
            ),
            _ => Report::error("Failed to check your Node version", self),
        }
    }
}

/// Parses what `node --version` prints, i.e. `v16.3.0`. Pre-release and build
/// suffixes are ignored.
pub fn parse_node_version(raw: &str) -> Result<VersionTriple, Error> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let version = version
        .split(|c: char| c == '-' || c == '+')
        .next()
        .unwrap_or(version);
    version.parse().map_err(|source| Error::VersionInvalid {
        raw: trimmed.to_owned(),
        source,
    })
}

pub fn ensure_supported(found: VersionTriple) -> Result<VersionTriple, Error> {
    if found < MIN_NODE_VERSION {
        Err(Error::TooOld { found })
    } else {
        Ok(found)
    }
}

pub fn node_version() -> Result<VersionTriple, Error> {
    let node = which::which(NODE).map_err(Error::NodeMissing)?;
    log::debug!("found {} at {:?}", NODE, node);
    let raw = duct::cmd(node, ["--version"])
        .read()
        .map_err(Error::VersionCheckFailed)?;
    parse_node_version(&raw)
}

pub fn check() -> Result<VersionTriple, Error> {
    let found = ensure_supported(node_version()?)?;
    log::info!("detected node {}", found);
    Ok(found)
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest(raw, result,
        case("v16.3.0\n", VersionTriple::new(16, 3, 0)),
        case("v6.0.0", VersionTriple::new(6, 0, 0)),
        case("12.22.1", VersionTriple::new(12, 22, 1)),
        case("v18.0.0-nightly20220419", VersionTriple::new(18, 0, 0)),
    )]
    fn test_parse_node_version(raw: &str, result: VersionTriple) {
        assert_eq!(parse_node_version(raw).unwrap(), result);
    }

    #[rstest(raw, case("node"), case("v"), case("vX.1.0"))]
    fn test_parse_node_version_failure(raw: &str) {
        assert!(matches!(
            parse_node_version(raw),
            Err(Error::VersionInvalid { .. })
        ));
    }

    #[rstest(raw, supported,
        case("v5.12.0", false),
        case("v0.12.18", false),
        case("v6.0.0", true),
        case("v16.3.0", true),
    )]
    fn test_ensure_supported(raw: &str, supported: bool) {
        let result = ensure_supported(parse_node_version(raw).unwrap());
        assert_eq!(result.is_ok(), supported);
    }

    #[test]
    fn too_old_report_asks_for_upgrade() {
        let report = Error::TooOld {
            found: VersionTriple::new(5, 12, 0),
        }
        .report();
        assert_eq!(report.msg(), "Looks like your Node version is too old.");
        assert!(report.details().contains("v6.0+"));
        assert!(report.details().contains("v5.12.0"));
    }
}
