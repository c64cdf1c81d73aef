use crate::util::cli::colors;
use colored::Colorize as _;
use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
};

/// What to tell the user once their project is ready.
#[derive(Debug)]
pub struct NextSteps {
    name: String,
    root: PathBuf,
}

impl NextSteps {
    pub fn new(name: impl Into<String>, root: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            root: dunce::simplified(root.as_ref()).to_owned(),
        }
    }

    pub fn print(&self) {
        println!("{}", self);
    }
}

impl Display for NextSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = |s: &str| s.color(colors::ACTION);
        writeln!(f)?;
        writeln!(f, "Great! You are all set.")?;
        writeln!(f, "Created {} inside {}", self.name, self.root.display())?;
        writeln!(f)?;
        writeln!(f, "Inside that directory, you can run the following commands:")?;
        writeln!(f)?;
        writeln!(f, "    {}", command("npm run start"))?;
        writeln!(f, "  Will run your application.")?;
        writeln!(f)?;
        writeln!(f, "    {}", command("npm run build"))?;
        writeln!(f, "  Bundles and transpiles your source files.")?;
        writeln!(f)?;
        writeln!(f, "Go to your project folder and run your application typing:")?;
        writeln!(f, "    {} {}", command("cd"), self.name)?;
        write!(f, "    {}", command("npm run start"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mentions_project_and_commands() {
        let steps = NextSteps::new("myapp", "/home/user/myapp").to_string();
        assert!(steps.contains("Created myapp inside"));
        assert!(steps.contains("npm run start"));
        assert!(steps.contains("npm run build"));
        // the `cd` line
        assert!(steps.contains(" myapp\n"));
    }
}
