use anyhow::{Context, Result};
use std::env;

/// Default endpoint used when OMNIVORE_API_URL is not set.
const DEFAULT_API_URL: &str = "https://api-prod.omnivore.app/api/graphql";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let api_url = env::var("OMNIVORE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = env::var("OMNIVORE_API_KEY").context(
            "OMNIVORE_API_KEY not found.\n\n\
            To fix this, create ~/.config/omnivore-summary/.env with:\n  \
            OMNIVORE_API_KEY=your_key_here\n\n\
            Get your API key from: https://omnivore.app/settings/api",
        )?;

        Ok(Self { api_url, api_key })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/omnivore-summary/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("omnivore-summary").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
