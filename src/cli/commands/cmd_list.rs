use std::fs;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, resolve_dir},
    },
    migrations::{MigrationBatch, enumerate},
    utils::{format_size, validate_dir},
};

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Migrations directory, overrides MIGCAT__MIGRATIONS__DIR
    #[arg(long, short, value_name = "DIR", value_parser = validate_dir)]
    pub dir: Option<PathBuf>,
}

#[derive(Tabled, Debug, PartialEq, Eq)]
pub struct MigrationRow {
    #[tabled(rename = "#")]
    index: String,

    #[tabled(rename = "File")]
    file_name: String,

    #[tabled(rename = "Size")]
    size: String,
}

pub fn execute(args: &ListArgs, ctx: &Context<'_>) {
    let settings = ctx.settings;
    let dir = resolve_dir(args.dir.as_ref(), &settings.migrations.dir);

    let batch = enumerate(dir, &settings.migrations.extension)
        .exit_on_err("Failed to list migrations");

    if batch.is_empty() {
        println!(
            "⚠️ No *.{} files found in {}",
            settings.migrations.extension,
            dir.display()
        );
        return;
    }

    println!(
        "{} migration(s) in {}",
        batch.len().to_string().green().bold(),
        dir.display()
    );
    println!("{}", render_table(&batch));
}

pub fn migration_rows(batch: &MigrationBatch) -> Vec<MigrationRow> {
    batch
        .iter()
        .map(|file| MigrationRow {
            index: file.ordinal.to_string(),
            file_name: file.file_name.clone(),
            size: fs::metadata(&file.path)
                .map(|meta| format_size(meta.len()))
                .unwrap_or_else(|_| "-".to_string()),
        })
        .collect()
}

fn render_table(batch: &MigrationBatch) -> String {
    Table::new(migration_rows(batch))
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rows_follow_batch_order() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("002_add_col.sql"), "ALTER TABLE a ADD b INT;").unwrap();
        fs::write(tmp.path().join("001_init.sql"), "CREATE TABLE a();").unwrap();
        let batch = enumerate(tmp.path(), "sql").unwrap();

        let rows = migration_rows(&batch);

        assert_eq!(
            rows,
            vec![
                MigrationRow {
                    index: "1".to_string(),
                    file_name: "001_init.sql".to_string(),
                    size: "17 B".to_string(),
                },
                MigrationRow {
                    index: "2".to_string(),
                    file_name: "002_add_col.sql".to_string(),
                    size: "24 B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_table_renders_file_names() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("001_init.sql"), "CREATE TABLE a();").unwrap();
        let batch = enumerate(tmp.path(), "sql").unwrap();

        let table = render_table(&batch);

        assert!(table.contains("001_init.sql"));
        assert!(table.contains("File"));
    }
}
