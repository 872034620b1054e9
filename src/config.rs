use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "copycat";
pub const DATA_FILE: &str = "CopyPastaData";
pub const LOG_FILE: &str = "copycat.log";

/// Filesystem locations used by a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppPaths {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    /// Resolves paths from an optional `--file` override, falling back to
    /// the platform data directory (or the current directory when none).
    pub fn resolve(file_override: Option<&Path>) -> Self {
        let data_file = match file_override {
            Some(p) => p.to_path_buf(),
            None => default_data_file(),
        };
        Self::for_data_file(data_file)
    }

    pub fn for_data_file(data_file: PathBuf) -> Self {
        let log_file = data_file
            .parent()
            .map(|dir| dir.join(LOG_FILE))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE));
        Self {
            data_file,
            log_file,
        }
    }
}

pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR).join(DATA_FILE),
        None => PathBuf::from(DATA_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_and_log_sits_next_to_data() {
        let p = AppPaths::resolve(Some(Path::new("/tmp/x/snips.json")));
        assert_eq!(p.data_file, PathBuf::from("/tmp/x/snips.json"));
        assert_eq!(p.log_file, PathBuf::from("/tmp/x/copycat.log"));
    }

    #[test]
    fn default_file_uses_fixed_name() {
        let p = AppPaths::resolve(None);
        assert_eq!(
            p.data_file.file_name().and_then(|n| n.to_str()),
            Some(DATA_FILE)
        );
    }

    #[test]
    fn bare_file_name_logs_in_cwd() {
        let p = AppPaths::for_data_file(PathBuf::from("snips"));
        assert_eq!(p.log_file, PathBuf::from("copycat.log"));
    }
}
