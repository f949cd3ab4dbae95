use std::env;
use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    /// Where the SQLite file lives. Created on first open.
    pub database_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        let database_path = env::var("SUPREG_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("supplier.db"));

        Ok(Config { database_path })
    }
}
