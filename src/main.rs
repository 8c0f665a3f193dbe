use migcat::{
    cli::{Cli, Context, commands::ExitOnErr},
    config::Settings,
    utils,
};

fn main() {
    let settings = Settings::new().exit_on_err("Failed to load configuration");
    let cli = Cli::parse_args();

    utils::logger::init_logging(&settings.logs);

    cli.execute(&Context {
        settings: &settings,
    });
}
