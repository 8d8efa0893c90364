//! Terminal messages. Status goes to stdout, warnings and errors to stderr.

use std::path::Path;

use cgen_codegen::Artifact;
use cgen_core::ComponentName;
use console::style;

pub fn created(artifact: &Artifact, base_dir: &Path) {
    let path = artifact.path();
    let shown = path.strip_prefix(base_dir).unwrap_or(path);
    let kind = match artifact {
        Artifact::Directory(_) => "directory",
        Artifact::File(_) => "file",
    };

    println!(
        "{} Created {}: {}",
        style("✓").green(),
        kind,
        style(shown.display()).cyan()
    );
}

pub fn renamed(original: &str, name: &ComponentName) {
    eprintln!(
        "{} Component name must be camelCase: using {} instead of {}",
        style("⚠").yellow(),
        style(name).cyan(),
        style(original).dim()
    );
}

pub fn done(name: &ComponentName, component_dir: &Path) {
    println!();
    println!(
        "{} Generated component {} in {}",
        style("✅").green(),
        style(name).cyan(),
        style(component_dir.display()).cyan()
    );
}

pub fn error(err: &anyhow::Error) {
    eprintln!("{} {}", style("✗").red().bold(), style(format!("{err:#}")).red());
}
