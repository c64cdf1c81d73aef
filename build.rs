#[allow(dead_code)]
#[path = "src/template/traverse.rs"]
mod traverse;

use std::path::{Path, PathBuf};

fn main() {
    let pkg_name = std::env::var("CARGO_PKG_NAME").unwrap();
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let rel = Path::new("templates").join("app");
    let src = manifest_dir.join(&rel);
    println!("cargo:rerun-if-changed={}", src.display());

    // Failing to install isn't fatal; the binary falls back to the checkout.
    let install_dir = match home::home_dir() {
        Some(home) => home.join(format!(".{}", pkg_name)),
        None => {
            println!("cargo:warning=failed to get user's home dir; templates won't be installed");
            return;
        }
    };
    let dest = install_dir.join(&rel);
    let actions = traverse::traverse(&src, &dest).expect("failed to traverse src templates dir");
    for action in &actions {
        if let traverse::Action::CopyFile { src, .. } = action {
            println!("cargo:rerun-if-changed={}", src.display());
        }
    }
    if dest.is_dir() {
        if let Err(err) = std::fs::remove_dir_all(&dest) {
            println!("cargo:warning=failed to delete old templates: {}", err);
            return;
        }
    }
    if let Err(err) = traverse::process_actions(actions.iter()) {
        println!("cargo:warning=failed to install templates: {}", err);
    }
}
