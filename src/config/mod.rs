pub mod console;
pub mod log;
pub mod migrations;
pub mod settings;

pub use console::ConsoleConfig;
pub use log::LogConfig;
pub use migrations::MigrationsConfig;
pub use settings::Settings;
