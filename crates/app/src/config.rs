use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local use.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the per-key JSON snapshots.
    pub data_dir: PathBuf,
    /// Whether missing collections are seeded with the demo dataset.
    pub seed_demo_data: bool,
    /// Origin used when formatting shareable portal links.
    pub portal_origin: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                      |
    /// |------------------|------------------------------|
    /// | `DATA_DIR`       | `.complytrack`               |
    /// | `SEED_DEMO_DATA` | `true`                       |
    /// | `PORTAL_ORIGIN`  | `https://portal.localhost`   |
    pub fn from_env() -> Self {
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".complytrack"));

        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        let portal_origin = std::env::var("PORTAL_ORIGIN")
            .unwrap_or_else(|_| "https://portal.localhost".into());

        Self {
            data_dir,
            seed_demo_data,
            portal_origin,
        }
    }
}
