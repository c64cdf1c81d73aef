use crate::util::cli::{Report, Reportable};
use std::{
    io,
    path::{Path, PathBuf},
    process::ExitStatus,
};
use thiserror::Error;

pub static NPM: &str = "npm";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to find `{program}` on your `PATH`: {cause}")]
    ProgramMissing {
        program: String,
        #[source]
        cause: which::Error,
    },
    #[error("Failed to run {command}: {cause}")]
    SpawnFailed {
        command: String,
        #[source]
        cause: io::Error,
    },
    #[error("{command} has failed.")]
    CommandFailed { command: String, status: ExitStatus },
}

impl Reportable for Error {
    fn report(&self) -> Report {
        match self {
            Self::ProgramMissing { program, cause } => Report::error(
                format!("Failed to find `{}`", program),
                format!("{}; is it installed and on your `PATH`?", cause),
            ),
            Self::SpawnFailed { command, cause } => {
                Report::error(format!("{} has failed.", command), cause)
            }
            Self::CommandFailed { command, status } => Report::error(
                format!("{} has failed.", command),
                match status.code() {
                    Some(code) => format!("It exited with code {}.", code),
                    None => "It was terminated by a signal.".to_owned(),
                },
            ),
        }
    }
}

/// Runs `<program> install` inside a project.
#[derive(Clone, Debug)]
pub struct Installer {
    program: String,
    args: Vec<String>,
}

impl Installer {
    pub fn new(program: impl Into<String>, verbose: bool) -> Self {
        let mut args = vec!["install".to_owned()];
        if verbose {
            args.push("--verbose".to_owned());
        }
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn npm(verbose: bool) -> Self {
        Self::new(NPM, verbose)
    }

    /// How the command reads on a terminal, i.e. `npm install --verbose`.
    pub fn command(&self) -> String {
        let mut command = self.program.clone();
        for arg in &self.args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }

    fn program_path(&self) -> Result<PathBuf, Error> {
        // `which` honors `PATHEXT`, so this finds `npm.cmd` on Windows.
        which::which(&self.program).map_err(|cause| Error::ProgramMissing {
            program: self.program.clone(),
            cause,
        })
    }

    /// Blocks until the install finishes. The child writes straight to our
    /// stdout and stderr, so its output shows up as it's produced.
    pub fn run(&self, project_dir: &Path) -> Result<(), Error> {
        let program = self.program_path()?;
        let command = self.command();
        log::info!("running {:?} in {:?}", command, project_dir);
        let output = duct::cmd(program, &self.args)
            .dir(project_dir)
            .unchecked()
            .run()
            .map_err(|cause| Error::SpawnFailed {
                command: command.clone(),
                cause,
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command,
                status: output.status,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest(program, verbose, command,
        case("npm", false, "npm install"),
        case("npm", true, "npm install --verbose"),
        case("yarn", false, "yarn install"),
    )]
    fn test_command(program: &str, verbose: bool, command: &str) {
        assert_eq!(Installer::new(program, verbose).command(), command);
    }

    #[test]
    fn missing_program_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let err = Installer::new("create-proton-app-no-such-program", false)
            .run(temp.path())
            .unwrap_err();
        assert!(matches!(err, Error::ProgramMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_succeeds() {
        let temp = tempfile::tempdir().unwrap();
        Installer::new("true", true).run(temp.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_names_the_command() {
        let temp = tempfile::tempdir().unwrap();
        let err = Installer::new("false", false).run(temp.path()).unwrap_err();
        assert!(matches!(
            &err,
            Error::CommandFailed { command, .. } if command == "false install"
        ));
        let report = err.report();
        assert_eq!(report.msg(), "false install has failed.");
        assert_eq!(report.details(), "It exited with code 1.");
    }
}
