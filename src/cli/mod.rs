pub mod commands;

use clap::Parser;
use colored::Colorize;

use crate::cli::commands::{Commands, cmd_config, cmd_list, cmd_run, cmd_version};
use crate::config::Settings;

pub struct Context<'a> {
    pub settings: &'a Settings,
}

#[derive(Parser, Debug)]
#[command(
    name = "migcat",
    about = "Print SQL migrations one at a time for manual execution",
    long_about = format!(
r#"{} - {}
Run without arguments to walk through every migration in order."#,
"MIGCAT".green().bold(),
"Copy-paste companion for database consoles.",
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn execute(&self, ctx: &Context<'_>) {
        match &self.command {
            Some(Commands::Run(args)) => cmd_run::execute(args, ctx),
            Some(Commands::List(args)) => cmd_list::execute(args, ctx),
            Some(Commands::Config) => cmd_config::execute(ctx),
            Some(Commands::Version(action)) => cmd_version::execute(action),
            None => cmd_run::execute(&cmd_run::RunArgs::default(), ctx),
        }
    }
}
