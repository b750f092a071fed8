//! Service configuration read from the environment.

use anyhow::{Context, Result};
use vocab_core::QuizGenerator;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Fixed seed for practice generation; `None` uses OS entropy.
    pub practice_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            practice_seed: None,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `PRACTICE_SEED` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let practice_seed = lookup("PRACTICE_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("PRACTICE_SEED must be an unsigned integer, got {:?}", raw))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            practice_seed,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn quiz_generator(&self) -> QuizGenerator {
        match self.practice_seed {
            Some(seed) => QuizGenerator::from_seed(seed),
            None => QuizGenerator::from_entropy(),
        }
    }
}
