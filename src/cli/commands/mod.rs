pub mod cmd_config;
pub mod cmd_list;
pub mod cmd_run;
pub mod cmd_version;

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::cli::commands::{cmd_list::ListArgs, cmd_run::RunArgs, cmd_version::VersionCommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through every migration, pausing after each one (default)
    Run(RunArgs),

    /// List migrations in execution order without pausing
    List(ListArgs),

    /// Print the effective configuration
    Config,

    /// Print version
    Version(VersionCommand),
}

pub trait ExitOnErr<T> {
    fn exit_on_err(self, msg: &str) -> T;
}

impl<T, E: std::fmt::Display> ExitOnErr<T> for Result<T, E> {
    fn exit_on_err(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("❌ {}: {}", msg, e);
                std::process::exit(1);
            }
        }
    }
}

/// The `--dir` flag wins over the configured directory.
pub fn resolve_dir<'a>(flag: Option<&'a PathBuf>, configured: &'a Path) -> &'a Path {
    flag.map(PathBuf::as_path).unwrap_or(configured)
}
