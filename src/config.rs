use thiserror::Error;

use crate::game::rules::GameRules;

pub const TOKEN_VARS: [&str; 2] = ["TELOXIDE_TOKEN", "TOKEN"];
pub const WORKER_COST_VAR: &str = "CLICKER_WORKER_COST";
pub const WORKER_YIELD_VAR: &str = "CLICKER_WORKER_YIELD";
pub const WIN_BALANCE_VAR: &str = "CLICKER_WIN_BALANCE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No bot token: set TELOXIDE_TOKEN or TOKEN")]
    MissingToken,
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub rules: GameRules,
}

impl Config {
    /// Reads the configuration from the process environment. `main` loads
    /// `.env` into the environment beforehand.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = TOKEN_VARS
            .iter()
            .filter_map(|var| lookup(*var))
            .find(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let defaults = GameRules::default();
        let rules = GameRules {
            worker_cost: read_number(&lookup, WORKER_COST_VAR, defaults.worker_cost)?,
            worker_yield: read_number(&lookup, WORKER_YIELD_VAR, defaults.worker_yield)?,
            win_balance: read_number(&lookup, WIN_BALANCE_VAR, defaults.win_balance)?,
        };

        if rules.worker_cost == 0 {
            return Err(ConfigError::NotPositive(WORKER_COST_VAR));
        }
        if rules.win_balance == 0 {
            return Err(ConfigError::NotPositive(WIN_BALANCE_VAR));
        }

        Ok(Config {
            token: token.trim().to_string(),
            rules,
        })
    }
}

fn read_number<F>(lookup: &F, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
