//! The starter files every new project gets, copied verbatim.

mod traverse;

pub use self::traverse::*;

use crate::util::{
    self,
    cli::{Report, Reportable},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Relative to both the crate root and the install dir.
pub static TEMPLATE_DIR: &str = "templates/app";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Template directory {dir:?} doesn't exist")]
    Missing { dir: PathBuf },
    #[error("Failed to find the installed templates: {0}")]
    NoHomeDir(#[from] util::NoHomeDir),
    #[error("Failed to traverse templates at {src:?}: {cause}")]
    Traversal {
        src: PathBuf,
        #[source]
        cause: TraversalError,
    },
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::Missing { dir } => Report::error(
                "Failed to copy template files",
                format!(
                    "{:?} doesn't exist; reinstall `create-proton-app` or pass `--template <DIR>`",
                    dir
                ),
            ),
            _ => Report::error("Failed to copy template files", self),
        }
    }
}

/// The templates shipped with this tool. The build script installs them
/// into the install dir, but a source checkout's copy is used when that's
/// missing (i.e. the build script couldn't write to the home directory).
pub fn bundled_dir() -> Result<PathBuf, Error> {
    let installed = util::install_dir().map(|dir| dir.join(TEMPLATE_DIR));
    if let Ok(installed) = &installed {
        if installed.is_dir() {
            return Ok(installed.clone());
        }
    }
    let checkout = Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATE_DIR);
    if checkout.is_dir() {
        log::info!(
            "installed templates missing from {:?}; using {:?}",
            installed,
            checkout
        );
        Ok(checkout)
    } else {
        Err(match installed {
            Ok(dir) => Error::Missing { dir },
            Err(err) => err.into(),
        })
    }
}

/// Recreates the tree at `src` inside `dest`. Existing files are overwritten,
/// and anything else already in `dest` stays put.
pub fn copy(src: &Path, dest: &Path) -> Result<(), Error> {
    if !src.is_dir() {
        return Err(Error::Missing {
            dir: src.to_owned(),
        });
    }
    log::info!("copying templates from {:?} to {:?}", src, dest);
    let actions = traverse(src, dest).map_err(|cause| Error::Traversal {
        src: src.to_owned(),
        cause,
    })?;
    process_actions(actions.iter()).map_err(Into::into)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn copy_keeps_existing_files() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        fs::write(src.path().join("index.js"), "new").unwrap();
        fs::write(dest.path().join("index.js"), "old").unwrap();
        fs::write(dest.path().join("package.json"), "{}").unwrap();
        copy(src.path(), dest.path()).unwrap();
        assert_eq!(fs::read_to_string(dest.path().join("index.js")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dest.path().join("package.json")).unwrap(), "{}");
    }

    #[test]
    fn copy_from_missing_dir_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing");
        let err = copy(&missing, temp.path()).unwrap_err();
        assert!(matches!(&err, Error::Missing { dir } if *dir == missing));
        assert_eq!(err.report().msg(), "Failed to copy template files");
    }

    #[test]
    fn bundled_templates_are_available() {
        let dir = bundled_dir().unwrap();
        assert!(dir.join("index.js").is_file());
    }
}
