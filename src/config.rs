use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default fixture root, relative to the crate under test.
pub const DEFAULT_FIXTURE_ROOT: &str = "tests/fixtures";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub fixtures: FixtureSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FixtureSettings {
    pub root: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("fixtures.root", DEFAULT_FIXTURE_ROOT)?
            .set_default("logging.level", "debug")?
            // Add configuration file if it exists
            .add_source(File::with_name("testkit").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("DASHBOARD_TESTKIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Fixture root as a path, for handing to `FixtureLoader::new`.
    pub fn fixture_root(&self) -> PathBuf {
        PathBuf::from(&self.fixtures.root)
    }
}
