pub mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cgen_codegen::{ComponentEmitter, OsFileSystem};
use cgen_core::{ComponentName, Language, LanguageError, NameError};
use clap::Parser;
use tracing::info;

/// Scaffold a frontend component: logic file, template and style stub.
#[derive(Parser, Debug)]
#[command(name = "cgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Component name (camelCase).
    #[arg(short, long)]
    pub name: String,

    /// Language of the logic file: ts or js.
    #[arg(short, long, default_value = "ts", value_parser = parse_language)]
    pub language: Language,

    /// Directory to create the component folder in (defaults to the current directory).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print debug diagnostics.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_language(s: &str) -> Result<Language, LanguageError> {
    s.parse()
}

impl Cli {
    /// Validate the name and write the component.
    pub async fn execute(self) -> Result<()> {
        let resolved = resolve_name(&self.name)?;
        if let Some(original) = &resolved.corrected_from {
            output::renamed(original, &resolved.name);
        }

        let base_dir = match self.output {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        if !base_dir.is_dir() {
            anyhow::bail!("Output directory not found: {}", base_dir.display());
        }

        info!(
            name = %resolved.name,
            language = %self.language,
            base = %base_dir.display(),
            "Generating component"
        );

        let component_dir = generate(&base_dir, &resolved.name, self.language)?;
        output::done(&resolved.name, &component_dir);

        Ok(())
    }
}

/// Initialize tracing on stderr, honoring `RUST_LOG`.
pub fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
        .with_writer(std::io::stderr)
        .init();
}

/// Outcome of name validation.
#[derive(Debug, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: ComponentName,
    /// Set when the input was rejected and a corrected name is used instead.
    pub corrected_from: Option<String>,
}

/// Accept a camelCase name, or fall back to its suggestion when that is valid.
pub fn resolve_name(raw: &str) -> Result<ResolvedName> {
    match ComponentName::parse(raw) {
        Ok(name) => Ok(ResolvedName {
            name,
            corrected_from: None,
        }),
        Err(err @ NameError::NotCamelCase { .. }) => {
            let suggestion = err.suggestion().unwrap_or_default();
            let name = ComponentName::parse(suggestion).map_err(|_| {
                anyhow::anyhow!(
                    "{err}: no valid name could be derived from {raw:?} (closest was {suggestion:?})"
                )
            })?;
            Ok(ResolvedName {
                name,
                corrected_from: Some(raw.to_string()),
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn generate(base_dir: &Path, name: &ComponentName, language: Language) -> Result<PathBuf> {
    let emitter = ComponentEmitter::new(OsFileSystem);
    let component_dir = emitter.create(base_dir, name, language, |artifact| {
        output::created(artifact, base_dir)
    })?;
    Ok(component_dir)
}
