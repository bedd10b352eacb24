//! Application Configuration
//!
//! Endpoint and credential for the hosted table, baked in at build time
//! (`SUPABASE_URL`, `SUPABASE_ANON_KEY`, optional `TASKS_TABLE`).

const DEFAULT_TABLE: &str = "todos";

/// Remote table configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl AppConfig {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Read values captured from the build environment.
    ///
    /// Missing values are left empty; the first remote call will fail.
    pub fn from_build_env() -> Self {
        let mut config = Self::new(
            option_env!("SUPABASE_URL").unwrap_or_default(),
            option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
        );
        if let Some(table) = option_env!("TASKS_TABLE").filter(|t| !t.trim().is_empty()) {
            config.table = table.to_string();
        }
        config
    }

    /// Both required values are present
    pub fn is_complete(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}
