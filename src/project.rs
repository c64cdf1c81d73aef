use crate::util::{
    self,
    cli::{Report, Reportable},
};
use indexmap::IndexMap;
use serde::Serialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub static MANIFEST_FILE_NAME: &str = "package.json";

#[cfg(windows)]
static LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
static LINE_ENDING: &str = "\n";

#[derive(Clone, Debug, Serialize)]
pub struct MacBuild {
    identity: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    proton_node_version: String,
    mac: MacBuild,
}

/// The generated `package.json`.
///
/// `name` and `version` are placeholders; the project name the user typed
/// only decides where the manifest goes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    name: String,
    version: String,
    private: bool,
    scripts: IndexMap<String, String>,
    dependencies: IndexMap<String, String>,
    dev_dependencies: IndexMap<String, String>,
    build: Build,
}

fn string_map(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(key, val)| ((*key).to_owned(), (*val).to_owned()))
        .collect()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: "app".to_owned(),
            version: "0.0.1".to_owned(),
            private: true,
            scripts: string_map(&[
                ("start", "babel-watch index.js"),
                ("build", "babel index.js -d bin/"),
                ("pack", "electron-builder --dir"),
                ("dist", "electron-builder"),
            ]),
            dependencies: string_map(&[("proton-native", "latest"), ("react", "^16.8.6")]),
            dev_dependencies: string_map(&[
                ("@babel/cli", "^7.4.4"),
                ("@babel/core", "^7.4.4"),
                ("@babel/preset-env", "^7.4.4"),
                ("@babel/preset-react", "^7.0.0"),
                ("babel-watch", "^7.0.0"),
                ("electron-builder", "latest"),
            ]),
            build: Build {
                proton_node_version: "current".to_owned(),
                mac: MacBuild { identity: None },
            },
        }
    }
}

impl Manifest {
    /// Two-space indented JSON with a trailing newline, like `npm` writes it.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self).map(|mut json| {
            json.push_str(LINE_ENDING);
            json
        })
    }
}

#[derive(Debug)]
pub enum Error {
    PathResolutionFailed(util::AbsolutizeError),
    DirCreationFailed {
        path: PathBuf,
        cause: io::Error,
    },
    ManifestSerializationFailed(serde_json::Error),
    ManifestWriteFailed {
        path: PathBuf,
        cause: io::Error,
    },
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::PathResolutionFailed(err) => {
                Report::error("Failed to resolve project directory", err)
            }
            Self::DirCreationFailed { path, cause } => Report::error(
                format!("Failed to create project directory {:?}", path),
                cause,
            ),
            Self::ManifestSerializationFailed(err) => {
                Report::error("Failed to serialize project manifest", err)
            }
            Self::ManifestWriteFailed { path, cause } => Report::error(
                format!("Failed to write project manifest to {:?}", path),
                cause,
            ),
        }
    }
}

pub fn resolve(project_dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
    util::absolute(project_dir).map_err(Error::PathResolutionFailed)
}

/// Creates `root` if it's missing and (over)writes the manifest inside it.
/// Nothing else in `root` is touched.
pub fn gen(root: &Path, manifest: &Manifest) -> Result<PathBuf, Error> {
    if !root.is_dir() {
        log::info!("creating project directory {:?}", root);
        fs::create_dir_all(root).map_err(|cause| Error::DirCreationFailed {
            path: root.to_owned(),
            cause,
        })?;
    }
    let path = root.join(MANIFEST_FILE_NAME);
    let json = manifest
        .to_pretty_json()
        .map_err(Error::ManifestSerializationFailed)?;
    log::info!("writing manifest to {:?}", path);
    fs::write(&path, json).map_err(|cause| Error::ManifestWriteFailed {
        path: path.clone(),
        cause,
    })?;
    Ok(path)
}
