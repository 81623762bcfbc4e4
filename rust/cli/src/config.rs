use duelpoker_ai::create_ai;
use duelpoker_engine::game::TableConfig;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "DUELPOKER_CONFIG";
pub const SEED_ENV: &str = "DUELPOKER_SEED";
pub const STARTING_CHIPS_ENV: &str = "DUELPOKER_STARTING_CHIPS";
pub const SMALL_BLIND_ENV: &str = "DUELPOKER_SMALL_BLIND";
pub const BIG_BLIND_ENV: &str = "DUELPOKER_BIG_BLIND";
pub const TURN_TIMEOUT_ENV: &str = "DUELPOKER_TURN_TIMEOUT_SECS";
pub const THINK_MS_ENV: &str = "DUELPOKER_THINK_MS";
pub const AI_ENV: &str = "DUELPOKER_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub turn_timeout_secs: u32,
    pub think_ms: u64,
    pub seed: Option<u64>,
    pub ai: String,
}

impl Config {
    pub fn table(&self) -> TableConfig {
        TableConfig {
            starting_chips: self.starting_chips,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            turn_timeout_secs: self.turn_timeout_secs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub turn_timeout_secs: ValueSource,
    pub think_ms: ValueSource,
    pub seed: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            turn_timeout_secs: ValueSource::Default,
            think_ms: ValueSource::Default,
            seed: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            starting_chips: table.starting_chips,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            turn_timeout_secs: table.turn_timeout_secs,
            think_ms: duelpoker_ai::DEFAULT_THINK_TIME.as_millis() as u64,
            seed: None,
            ai: "random".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.turn_timeout_secs {
            cfg.turn_timeout_secs = v;
            sources.turn_timeout_secs = ValueSource::File;
        }
        if let Some(v) = f.think_ms {
            cfg.think_ms = v;
            sources.think_ms = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(seed) = env_value(SEED_ENV)? {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_value(STARTING_CHIPS_ENV)? {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_value(SMALL_BLIND_ENV)? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_value(BIG_BLIND_ENV)? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_value(TURN_TIMEOUT_ENV)? {
        cfg.turn_timeout_secs = v;
        sources.turn_timeout_secs = ValueSource::Env;
    }
    if let Some(v) = env_value(THINK_MS_ENV)? {
        cfg.think_ms = v;
        sources.think_ms = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

/// Parse a numeric env var; unset and empty both mean "not provided".
fn env_value<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if !raw.is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid value for {}: {}", key, raw))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    turn_timeout_secs: Option<u32>,
    #[serde(default)]
    think_ms: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    create_ai(&cfg.ai).map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    Ok(())
}
