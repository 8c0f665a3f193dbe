use std::io;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, resolve_dir},
    },
    migrations::{LineGate, PresenterOptions, enumerate, present},
    utils::validate_dir,
};

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Migrations directory, overrides MIGCAT__MIGRATIONS__DIR
    #[arg(long, short, value_name = "DIR", value_parser = validate_dir)]
    pub dir: Option<PathBuf>,
}

pub fn execute(args: &RunArgs, ctx: &Context<'_>) {
    let settings = ctx.settings;
    let dir = resolve_dir(args.dir.as_ref(), &settings.migrations.dir);

    let batch = enumerate(dir, &settings.migrations.extension)
        .exit_on_err("Failed to list migrations");
    info!(dir = %dir.display(), count = batch.len(), "Starting migration walkthrough");

    let options = PresenterOptions::for_stdout(&settings.console);
    let report = present(&batch, io::stdout().lock(), LineGate::stdin(), &options)
        .exit_on_err("Migration walkthrough aborted");

    info!(presented = report.presented, waits = report.waits, "Walkthrough finished");
}
