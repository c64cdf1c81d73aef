use path_abs::PathAbs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Failed to get user's home directory!")]
pub struct NoHomeDir;

pub fn home_dir() -> Result<PathBuf, NoHomeDir> {
    home::home_dir().ok_or(NoHomeDir)
}

/// Where the build script leaves the bundled templates.
pub fn install_dir() -> Result<PathBuf, NoHomeDir> {
    home_dir().map(|home| home.join(concat!(".", env!("CARGO_PKG_NAME"))))
}

#[derive(Debug, Error)]
#[error("Failed to make path {path:?} absolute: {cause}")]
pub struct AbsolutizeError {
    path: PathBuf,
    #[source]
    cause: path_abs::Error,
}

/// Makes `path` absolute without touching the filesystem: relative paths are
/// joined onto the current directory and `.`/`..` are resolved lexically, so
/// symlinks are left alone and the path doesn't need to exist yet. A `..`
/// at the root stays at the root, i.e. `/..` is `/`.
pub fn absolute(path: impl AsRef<Path>) -> Result<PathBuf, AbsolutizeError> {
    let path = path.as_ref();
    let cwd = PathAbs::new(".").map_err(|cause| AbsolutizeError {
        path: path.to_owned(),
        cause,
    })?;
    let mut resolved = PathBuf::new();
    for component in cwd.as_path().join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            _ => resolved.push(component),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest(path, result,
        #[cfg(unix)]
        case("/srv/apps/myapp", "/srv/apps/myapp"),
        #[cfg(unix)]
        case("/srv/apps/./nested/../myapp", "/srv/apps/myapp"),
        #[cfg(unix)]
        case("/..", "/"),
        #[cfg(unix)]
        case("/srv/../../myapp", "/myapp"),
        #[cfg(windows)]
        case("C:\\apps\\nested\\..\\myapp", "C:\\apps\\myapp"),
    )]
    fn test_absolute(path: &str, result: &str) {
        assert_eq!(absolute(path).unwrap(), PathBuf::from(result));
    }

    #[test]
    fn relative_paths_land_in_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute("myapp").unwrap(), cwd.join("myapp"));
        assert_eq!(absolute("a/../myapp").unwrap(), cwd.join("myapp"));
    }

    #[test]
    fn install_dir_is_named_after_package() {
        if let Ok(dir) = install_dir() {
            assert_eq!(dir.file_name().unwrap(), ".create-proton-app");
        }
    }
}
