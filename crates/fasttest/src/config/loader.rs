//! Configuration file loading and environment overrides

use super::types::RunnerConfig;
use crate::error::ConfigError;
use std::{
    env,
    fs,
    path::{
        Path,
        PathBuf,
    },
};
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FASTTEST_CONFIG";

const FILE_NAME: &str = "fasttest.toml";

fn parse_flag(
    key: &str,
    value: &str,
) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid(key, value)),
    }
}

impl RunnerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file to use, searched in this order:
    /// 1. `explicit`, usually the value of [`CONFIG_ENV`]
    /// 2. `{base}/fasttest.toml`
    /// 3. `{base}/config/fasttest.toml`
    pub fn locate(
        explicit: Option<PathBuf>,
        base: &Path,
    ) -> Option<PathBuf> {
        explicit.or_else(|| {
            [base.join(FILE_NAME), base.join("config").join(FILE_NAME)]
                .into_iter()
                .find(|path| path.is_file())
        })
    }

    /// Load from the located config file or defaults, then apply the
    /// environment on top.
    ///
    /// An explicitly named file that can not be read is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let base = env::current_dir().unwrap_or_default();
        let mut config = match Self::locate(explicit, &base) {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                Self::from_file(&path)?
            },
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            },
        };
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides read through `var`.
    ///
    /// - `FASTTEST_VERBOSE=1`
    /// - `FASTTEST_ANSI=0`
    /// - `FASTTEST_FORMAT=json`
    /// - `NO_COLOR` (any non-empty value disables colors)
    /// - `LOG_STDOUT=1`
    /// - `LOG_FILTER=fasttest=trace`
    pub fn apply_env(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("FASTTEST_VERBOSE") {
            self.verbose = parse_flag("FASTTEST_VERBOSE", &val)?;
        }
        if let Some(val) = var("FASTTEST_ANSI") {
            self.enable_ansi = parse_flag("FASTTEST_ANSI", &val)?;
            self.log.enable_ansi = self.enable_ansi;
        }
        if let Some(val) = var("FASTTEST_FORMAT") {
            self.format = val.parse()?;
        }
        if var("NO_COLOR").is_some_and(|val| !val.is_empty()) {
            self.enable_ansi = false;
            self.log.enable_ansi = false;
        }
        if let Some(val) = var("LOG_STDOUT") {
            self.log.log_to_stdout = parse_flag("LOG_STDOUT", &val)?;
        }
        if let Some(val) = var("LOG_FILTER") {
            self.log.log_filter = Some(val);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportFormat;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn reads_sections_and_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(
            &path,
            "verbose = true\nformat = \"json\"\n\n[log]\nlog_filter = \"fasttest=debug\"\n",
        )
        .unwrap();
        let config = RunnerConfig::from_file(&path).unwrap();
        assert!(config.verbose);
        assert!(config.enable_ansi);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.log.log_filter.as_deref(), Some("fasttest=debug"));
        assert!(config.log.enable_ansi);
        assert!(config.panic.show);
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "verbos = true\n").unwrap();
        let err = RunnerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = RunnerConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn locates_in_search_order() {
        let dir = TempDir::new().unwrap();
        assert_eq!(RunnerConfig::locate(None, dir.path()), None);

        let nested = dir.path().join("config");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join(FILE_NAME), "").unwrap();
        assert_eq!(
            RunnerConfig::locate(None, dir.path()),
            Some(nested.join(FILE_NAME))
        );

        fs::write(dir.path().join(FILE_NAME), "").unwrap();
        assert_eq!(
            RunnerConfig::locate(None, dir.path()),
            Some(dir.path().join(FILE_NAME))
        );

        let explicit = PathBuf::from("elsewhere.toml");
        assert_eq!(
            RunnerConfig::locate(Some(explicit.clone()), dir.path()),
            Some(explicit)
        );
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config = RunnerConfig::default();
        config
            .apply_env(env_of(&[
                ("FASTTEST_VERBOSE", "yes"),
                ("FASTTEST_FORMAT", "JSON"),
                ("NO_COLOR", "1"),
                ("LOG_FILTER", "fasttest=trace"),
            ]))
            .unwrap();
        assert!(config.verbose);
        assert!(!config.enable_ansi);
        assert!(!config.log.enable_ansi);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.log.is_enabled());
    }

    #[test]
    fn invalid_flags_are_reported() {
        let mut config = RunnerConfig::default();
        let err = config
            .apply_env(env_of(&[("FASTTEST_VERBOSE", "maybe")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"maybe\" for FASTTEST_VERBOSE");
    }
}
