//! Configuration for the music library module

use serde::{Deserialize, Serialize};

/// Music library module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Front-end origins allowed to call the API cross-origin
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Delete a composer's works and recordings together with it
    #[serde(default)]
    pub cascade_composer_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors_allowed_origins: default_cors_allowed_origins(),
            cascade_composer_delete: false,
        }
    }
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(), // Vite dev server
    ]
}

/// Which backing store the module talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// Hosted database behind a PostgREST (Supabase) endpoint
    #[default]
    Postgrest,
    /// In-process tables, lost on exit
    Memory,
}

/// Backing store connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,

    /// Project URL, e.g. `https://<project>.supabase.co`
    #[serde(default)]
    pub url: Option<String>,

    /// Service key sent with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Non-default database schema to target
    #[serde(default)]
    pub schema: Option<String>,
}
