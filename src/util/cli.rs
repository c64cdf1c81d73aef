use crate::opts;
use colored::Colorize as _;
use std::fmt::{Debug, Display};
use structopt::{
    clap::{self, AppSettings},
    StructOpt,
};

pub static SETTINGS: &[AppSettings] = &[AppSettings::ColoredHelp, AppSettings::DeriveDisplayOrder];

pub mod colors {
    use colored::Color;

    pub const ERROR: Color = Color::BrightRed;
    pub const ACTION: Color = Color::Green;
}

#[derive(Clone, Copy, Debug, StructOpt)]
pub struct GlobalFlags {
    #[structopt(
        short = "v",
        long = "verbose",
        help = "Print additional logs (-vv for more)",
        multiple = true,
        parse(from_occurrences = opts::NoiseLevel::from_occurrences),
    )]
    pub noise_level: opts::NoiseLevel,
}

pub type TextWrapper = textwrap::Wrapper<'static, textwrap::NoHyphenation>;

/// A user-facing account of what went wrong.
#[derive(Debug)]
pub struct Report {
    msg: String,
    details: String,
}

impl Report {
    pub fn error(msg: impl Display, details: impl Display) -> Self {
        Self {
            msg: msg.to_string(),
            details: details.to_string(),
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    #[cfg(test)]
    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn format(&self, wrapper: &TextWrapper) -> String {
        let mut formatted = format!(
            "\n{}\n{}",
            "An error occurred:".bold(),
            wrapper.fill(&self.msg).color(colors::ERROR)
        );
        if !self.details.is_empty() {
            formatted.push('\n');
            formatted.push_str(&wrapper.fill(&self.details));
        }
        formatted.push('\n');
        formatted
    }

    pub fn print(&self, wrapper: &TextWrapper) {
        eprintln!("{}", self.format(wrapper));
    }
}

pub trait Reportable: Debug {
    fn report(&self) -> Report;
}

pub trait Exec: Debug + StructOpt {
    type Report: Reportable;

    fn global_flags(&self) -> GlobalFlags;

    fn exec(self) -> Result<(), Self::Report>;
}

fn init_logging(noise_level: opts::NoiseLevel) {
    use env_logger::{Builder, Env};
    let default_level = match noise_level {
        opts::NoiseLevel::Polite => "warn",
        opts::NoiseLevel::LoudAndProud => "create_proton_app=info",
        opts::NoiseLevel::FranklyQuitePedantic => "info,create_proton_app=debug",
    };
    let env = Env::default().default_filter_or(default_level);
    Builder::from_env(env).init();
}

#[derive(Debug)]
pub enum Exit {
    Report(Report),
    Clap(clap::Error),
}

impl Exit {
    fn report(reportable: impl Reportable) -> Self {
        log::info!("exiting with {:#?}", reportable);
        Self::Report(reportable.report())
    }

    fn do_the_thing(self, wrapper: TextWrapper) -> ! {
        match self {
            Self::Report(report) => {
                report.print(&wrapper);
                std::process::exit(report.exit_code())
            }
            Self::Clap(err) => err.exit(),
        }
    }

    pub fn main(inner: impl FnOnce() -> Result<(), Self>) {
        if let Err(exit) = inner() {
            let wrapper =
                TextWrapper::with_splitter(textwrap::termwidth(), textwrap::NoHyphenation);
            exit.do_the_thing(wrapper)
        }
    }
}

pub fn exec<E: Exec>() {
    Exit::main(|| {
        let args: Vec<String> = std::env::args().collect();
        let input = E::from_iter_safe(&args).map_err(Exit::Clap)?;
        init_logging(input.global_flags().noise_level);
        log::debug!("raw args: {:#?}", args);
        input.exec().map_err(Exit::report)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn report_format_includes_msg_and_details() {
        let wrapper = TextWrapper::with_splitter(80, textwrap::NoHyphenation);
        let report = Report::error("No directory specified ...", "Pass a project name");
        let formatted = report.format(&wrapper);
        assert!(formatted.contains("An error occurred:"));
        assert!(formatted.contains("No directory specified ..."));
        assert!(formatted.contains("Pass a project name"));
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn report_format_skips_empty_details() {
        let wrapper = TextWrapper::with_splitter(80, textwrap::NoHyphenation);
        let without = Report::error("npm install has failed.", "").format(&wrapper);
        let with = Report::error("npm install has failed.", "exit code 1").format(&wrapper);
        assert_eq!(without.lines().count(), 3);
        assert_eq!(with.lines().count(), 4);
    }
}
