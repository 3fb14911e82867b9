pub mod domain;
pub mod explain;
pub mod generate;
pub mod market;
pub mod seed;
pub mod timeframe;

pub mod config {
    const DEFAULT_ATTRIBUTION: &str = "stockcast";

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        /// Written into the `generatedBy`/`updatedBy` style fields of every payload.
        pub attribution: String,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
                attribution: std::env::var("STOCKCAST_ATTRIBUTION")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_ATTRIBUTION.to_string()),
            })
        }
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                sentry_dsn: None,
                attribution: DEFAULT_ATTRIBUTION.to_string(),
            }
        }
    }
}
