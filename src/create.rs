use crate::{
    connectivity::{Probe, RegistryProbe},
    install::{self, Installer},
    opts,
    project::{self, Manifest},
    runtime, template,
    util::cli::{Report, Reportable},
};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    NoDirectory,
    RuntimeCheckFailed(runtime::Error),
    ProjectGenFailed(project::Error),
    TemplateCopyFailed(template::Error),
    Offline,
    InstallFailed(install::Error),
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::NoDirectory => Report::error(
                "No directory specified ...",
                "Usage: create-proton-app <project-name> [options]",
            ),
            Self::RuntimeCheckFailed(err) => err.report(),
            Self::ProjectGenFailed(err) => err.report(),
            Self::TemplateCopyFailed(err) => err.report(),
            Self::Offline => Report::error(
                "Looks like you are offline.",
                "Installing packages needs a connection to the npm registry. Your project files are in place, so you can run `npm install` inside it once you're back online.",
            ),
            Self::InstallFailed(err) => err.report(),
        }
    }
}

/// A freshly scaffolded project.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Created {
    pub root: PathBuf,
    pub name: String,
}

impl Created {
    fn new(root: PathBuf) -> Self {
        // A filesystem root has no last component, so it's named after itself.
        let name = match root.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => dunce::simplified(&root).display().to_string(),
        };
        Self { root, name }
    }
}

/// Scaffolds `project_dir`, copies `template_dir` into it, and installs its
/// dependencies. Each step finishes before the next one starts, and `probe`
/// is consulted before anything gets spawned.
pub fn run(
    project_dir: &Path,
    template_dir: &Path,
    probe: &impl Probe,
    installer: &Installer,
) -> Result<Created, Error> {
    let root = project::resolve(project_dir).map_err(Error::ProjectGenFailed)?;
    println!(
        "Creating a new Proton Native app on {}",
        dunce::simplified(&root).display()
    );
    println!();
    project::gen(&root, &Manifest::default()).map_err(Error::ProjectGenFailed)?;
    template::copy(template_dir, &root).map_err(Error::TemplateCopyFailed)?;

    println!("Installing packages... This may take a few minutes.");
    println!();
    if !probe.is_online() {
        return Err(Error::Offline);
    }
    installer.run(&root).map_err(Error::InstallFailed)?;
    Ok(Created::new(root))
}

/// Checks the host's Node before looking at anything else, then creates the
/// project with the bundled (or given) template.
pub fn exec(
    project_dir: Option<PathBuf>,
    template_dir: Option<PathBuf>,
    noise_level: opts::NoiseLevel,
) -> Result<Created, Error> {
    runtime::check().map_err(Error::RuntimeCheckFailed)?;
    let project_dir = project_dir.ok_or(Error::NoDirectory)?;
    let template_dir = match template_dir {
        Some(dir) => dir,
        None => template::bundled_dir().map_err(Error::TemplateCopyFailed)?,
    };
    run(
        &project_dir,
        &template_dir,
        &RegistryProbe::default(),
        &Installer::npm(noise_level.verbose()),
    )
}
