use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::MigrationError;

/// A migration script discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Path as discovered, joined onto the scanned directory.
    pub path: PathBuf,
    /// Base file name, e.g. `001_init.sql`.
    pub file_name: String,
    /// 1-based position in the sorted batch.
    pub ordinal: usize,
}

/// The sorted set of migration files found in one run.
#[derive(Debug, Clone, Default)]
pub struct MigrationBatch {
    dir: PathBuf,
    files: Vec<MigrationFile>,
}

impl MigrationBatch {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[MigrationFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MigrationFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a MigrationBatch {
    type Item = &'a MigrationFile;
    type IntoIter = std::slice::Iter<'a, MigrationFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Lists every `*.<extension>` file directly under `dir`, sorted ascending by
/// the full path string.
///
/// Matching follows shell glob rules: non-recursive, case-sensitive, and
/// dot-files are skipped. Directories whose names happen to end in the
/// extension are ignored.
pub fn enumerate(dir: &Path, extension: &str) -> Result<MigrationBatch, MigrationError> {
    let read_dir_err = |source: std::io::Error| MigrationError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if matches_pattern(&path, extension) && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

    let files: Vec<MigrationFile> = paths
        .into_iter()
        .enumerate()
        .map(|(idx, path)| MigrationFile {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path,
            ordinal: idx + 1,
        })
        .collect();

    debug!(dir = %dir.display(), count = files.len(), "Enumerated migrations");

    Ok(MigrationBatch {
        dir: dir.to_path_buf(),
        files,
    })
}

fn matches_pattern(path: &Path, extension: &str) -> bool {
    // Raw bytes, so names that are not valid UTF-8 still match
    let hidden = path
        .file_name()
        .is_none_or(|name| name.as_encoded_bytes().first() == Some(&b'.'));

    !hidden && path.extension().is_some_and(|e| e == extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "SELECT 1;").unwrap();
    }

    fn names(batch: &MigrationBatch) -> Vec<&str> {
        batch.iter().map(|f| f.file_name.as_str()).collect()
    }

    #[test]
    fn test_sorted_lexicographically() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "20240102_add_col.sql");
        touch(tmp.path(), "20240101_init.sql");
        touch(tmp.path(), "20240110_index.sql");

        let batch = enumerate(tmp.path(), "sql").unwrap();

        assert_eq!(
            names(&batch),
            vec![
                "20240101_init.sql",
                "20240102_add_col.sql",
                "20240110_index.sql"
            ]
        );
    }

    #[test]
    fn test_string_order_not_numeric() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "10_late.sql");
        touch(tmp.path(), "9_early.sql");

        let batch = enumerate(tmp.path(), "sql").unwrap();

        // "1" sorts before "9" as a string
        assert_eq!(names(&batch), vec!["10_late.sql", "9_early.sql"]);
    }

    #[test]
    fn test_ordinals_are_one_based() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "b.sql");
        touch(tmp.path(), "a.sql");

        let batch = enumerate(tmp.path(), "sql").unwrap();
        let ordinals: Vec<usize> = batch.iter().map(|f| f.ordinal).collect();

        assert_eq!(ordinals, vec![1, 2]);
        assert_eq!(batch.files()[0].path, tmp.path().join("a.sql"));
    }

    #[test]
    fn test_filters_by_extension() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "001_init.sql");
        touch(tmp.path(), "README.md");
        touch(tmp.path(), "002_notes.sql.bak");
        touch(tmp.path(), "003_upper.SQL");
        touch(tmp.path(), "noext");

        let batch = enumerate(tmp.path(), "sql").unwrap();

        assert_eq!(names(&batch), vec!["001_init.sql"]);
    }

    #[test]
    fn test_skips_hidden_files_and_directories() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), ".hidden.sql");
        touch(tmp.path(), "001_init.sql");
        fs::create_dir(tmp.path().join("002_dir.sql")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "003_nested.sql");

        let batch = enumerate(tmp.path(), "sql").unwrap();

        assert_eq!(names(&batch), vec!["001_init.sql"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_listed() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().unwrap();
        touch(tmp.path(), "001_init.sql");
        fs::write(
            tmp.path().join(OsStr::from_bytes(b"002_caf\xe9.sql")),
            "SELECT 2;",
        )
        .unwrap();

        let batch = enumerate(tmp.path(), "sql").unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(names(&batch), vec!["001_init.sql", "002_caf\u{FFFD}.sql"]);
        assert_eq!(batch.files()[1].ordinal, 2);
    }

    #[test]
    fn test_custom_extension() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "001_init.sql");
        touch(tmp.path(), "001_init.pgsql");

        let batch = enumerate(tmp.path(), "pgsql").unwrap();

        assert_eq!(names(&batch), vec!["001_init.pgsql"]);
    }

    #[test]
    fn test_empty_directory() {
        let tmp = tempdir().unwrap();

        let batch = enumerate(tmp.path(), "sql").unwrap();

        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.dir(), tmp.path());
    }

    #[test]
    fn test_missing_directory() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("does_not_exist");

        let err = enumerate(&missing, "sql").unwrap_err();

        match err {
            MigrationError::ReadDir { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected ReadDir error, got {:?}", other),
        }
    }
}
