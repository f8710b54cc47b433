use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Seed the in-memory store with demo listings on startup.
    pub seed_demo_pets: bool,
    /// Enable the best-effort breed detection heuristic.
    pub breed_detection: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            seed_demo_pets: env::var("SEED_DEMO_PETS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            breed_detection: env::var("BREED_DETECTION")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        })
    }
}
