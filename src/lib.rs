#![forbid(unsafe_code)]

pub mod connectivity;
pub mod create;
pub mod install;
pub mod next_steps;
pub mod opts;
pub mod project;
pub mod runtime;
pub mod template;
pub mod util;

pub static NAME: &str = "create-proton-app";
