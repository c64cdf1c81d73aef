#![forbid(unsafe_code)]

use create_proton_app::{
    create,
    next_steps::NextSteps,
    util::cli::{self, Exec, GlobalFlags},
    NAME,
};
use std::path::PathBuf;
use structopt::StructOpt;

static EXAMPLE: &str = "Example:

    $ create-proton-app `project_name`
";

#[derive(Debug, StructOpt)]
#[structopt(
    bin_name = NAME,
    about = "Creates a new Proton Native app",
    usage = "create-proton-app <project-name> [options]",
    after_help = EXAMPLE,
    settings = cli::SETTINGS,
)]
pub struct Input {
    #[structopt(flatten)]
    flags: GlobalFlags,
    #[structopt(
        long = "template",
        value_name = "DIR",
        help = "Copy this directory instead of the bundled template",
        parse(from_os_str)
    )]
    template: Option<PathBuf>,
    #[structopt(
        name = "project-name",
        help = "Directory to create the app in",
        parse(from_os_str)
    )]
    project_dir: Option<PathBuf>,
}

impl Exec for Input {
    type Report = create::Error;

    fn global_flags(&self) -> GlobalFlags {
        self.flags
    }

    fn exec(self) -> Result<(), Self::Report> {
        let Self {
            flags: GlobalFlags { noise_level },
            template,
            project_dir,
        } = self;
        let created = create::exec(project_dir, template, noise_level)?;
        NextSteps::new(created.name, created.root).print();
        Ok(())
    }
}

fn main() {
    cli::exec::<Input>()
}
