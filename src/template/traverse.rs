use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Instruction for recreating one entry of a template tree.
#[derive(Debug, Eq, PartialEq)]
pub enum Action {
    /// Specifies to create a new directory at `dest`.
    CreateDirectory { dest: PathBuf },
    /// Specifies to copy the file at `src` to `dest`.
    CopyFile { src: PathBuf, dest: PathBuf },
}

/// An error encountered when executing an [`Action`].
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Failed to create directory.
    #[error("Failed to create directory at {dest:?}: {cause}")]
    DirectoryCreation {
        dest: PathBuf,
        #[source]
        cause: io::Error,
    },
    /// Failed to copy file.
    #[error("Failed to copy file {src:?} to {dest:?}: {cause}")]
    FileCopy {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        cause: io::Error,
    },
}

impl Action {
    #[cfg(test)]
    pub fn is_create_directory(&self) -> bool {
        matches!(self, Self::CreateDirectory { .. })
    }

    #[cfg(test)]
    pub fn is_copy_file(&self) -> bool {
        matches!(self, Self::CopyFile { .. })
    }

    /// Gets the destination of any [`Action`] variant.
    #[cfg(test)]
    pub fn dest(&self) -> &Path {
        match self {
            Self::CreateDirectory { dest } | Self::CopyFile { dest, .. } => dest,
        }
    }

    /// Executes the action.
    ///
    /// - [`Action::CreateDirectory`] has the same semantics as `mkdir -p`:
    ///   missing parents are created too, and an existing directory is fine.
    /// - [`Action::CopyFile`] has the same semantics as `cp`: an existing
    ///   destination file is overwritten.
    pub fn run(&self) -> Result<(), ProcessingError> {
        log::debug!("{:?}", self);
        match self {
            Self::CreateDirectory { dest } => {
                fs::create_dir_all(dest).map_err(|cause| ProcessingError::DirectoryCreation {
                    dest: dest.clone(),
                    cause,
                })
            }
            Self::CopyFile { src, dest } => fs::copy(src, dest)
                .map(|_bytes| ())
                .map_err(|cause| ProcessingError::FileCopy {
                    src: src.clone(),
                    dest: dest.clone(),
                    cause,
                }),
        }
    }
}

/// An error encountered when traversing a file tree.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// Failed to get directory listing.
    #[error("Failed to read directory at {path:?}: {cause}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    /// Failed to inspect entry from directory listing.
    #[error("Failed to read directory entry in {dir:?}: {cause}")]
    EntryRead {
        dir: PathBuf,
        #[source]
        cause: io::Error,
    },
    /// Entry has no file name, i.e. it ends in `..`.
    #[error("Template entry {path:?} has no file name")]
    NoFileName { path: PathBuf },
}

fn append_path(base: &Path, other: &Path) -> Result<PathBuf, TraversalError> {
    other
        .file_name()
        .map(|tail| base.join(tail))
        .ok_or_else(|| TraversalError::NoFileName {
            path: other.to_owned(),
        })
}

fn traverse_dir(
    src: &Path,
    dest: &Path,
    actions: &mut VecDeque<Action>,
) -> Result<(), TraversalError> {
    actions.push_front(Action::CreateDirectory {
        dest: dest.to_owned(),
    });
    let entries = fs::read_dir(src).map_err(|cause| TraversalError::DirectoryRead {
        path: src.to_owned(),
        cause,
    })?;
    for entry in entries {
        let path = entry
            .map_err(|cause| TraversalError::EntryRead {
                dir: src.to_owned(),
                cause,
            })?
            .path();
        let entry_dest = append_path(dest, &path)?;
        if path.is_dir() {
            traverse_dir(&path, &entry_dest, actions)?;
        } else {
            actions.push_back(Action::CopyFile {
                src: path,
                dest: entry_dest,
            });
        }
    }
    Ok(())
}

/// Traverse the file tree at `src` to generate an [`Action`] list that
/// recreates it at `dest`.
///
/// Every directory (including `src` itself) becomes an
/// [`Action::CreateDirectory`] at the front of the list, and every file an
/// [`Action::CopyFile`] at the back, so running the actions in order never
/// copies into a directory that doesn't exist yet.
pub fn traverse(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
) -> Result<VecDeque<Action>, TraversalError> {
    let mut actions = VecDeque::new();
    traverse_dir(src.as_ref(), dest.as_ref(), &mut actions).map(|_| actions)
}

/// Iterates over `actions`, running each one in turn.
pub fn process_actions<'a>(
    actions: impl Iterator<Item = &'a Action>,
) -> Result<(), ProcessingError> {
    for action in actions {
        action.run()?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn touch(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn directories_come_before_files() {
        let src = tempfile::tempdir().unwrap();
        touch(&src.path().join("index.js"), "");
        touch(&src.path().join("assets").join("icon.svg"), "");
        touch(&src.path().join("assets").join("fonts").join("a.ttf"), "");
        let dest = Path::new("/nowhere/myapp");
        let actions = traverse(src.path(), dest).unwrap();
        assert_eq!(actions.len(), 6);
        let first_copy = actions.iter().position(Action::is_copy_file).unwrap();
        assert!(actions.iter().take(first_copy).all(Action::is_create_directory));
        assert!(actions.iter().skip(first_copy).all(Action::is_copy_file));
        let dests = actions.iter().map(Action::dest).collect::<Vec<_>>();
        assert!(dests.contains(&dest));
        assert!(dests.contains(&dest.join("assets").join("fonts").as_path()));
        assert!(dests.contains(&dest.join("assets").join("fonts").join("a.ttf").as_path()));
    }

    #[test]
    fn process_mirrors_tree() {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        touch(&src.path().join(".babelrc"), "{}");
        touch(&src.path().join("src").join("app.js"), "app");
        let actions = traverse(src.path(), dest.path().join("myapp")).unwrap();
        process_actions(actions.iter()).unwrap();
        let root = dest.path().join("myapp");
        assert_eq!(fs::read_to_string(root.join(".babelrc")).unwrap(), "{}");
        assert_eq!(fs::read_to_string(root.join("src").join("app.js")).unwrap(), "app");
    }

    #[test]
    fn missing_src_fails_to_traverse() {
        let temp = tempfile::tempdir().unwrap();
        let result = traverse(temp.path().join("missing"), temp.path().join("dest"));
        assert!(matches!(result, Err(TraversalError::DirectoryRead { .. })));
    }
}
