use crate::chart::{CHART_LABEL_LEN, DEFAULT_PALETTE, MIN_PALETTE_SIZE};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputConfig,
    pub chart: ChartConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: String, // "table" or "json"
    pub colored: bool,
    pub date_format: String, // "medium", "yyyy-mm-dd", "dd-mm-yyyy", "mm-dd-yyyy"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Ordered palette for deterministic category colors. Reordering it
    /// reassigns every category's color.
    pub palette: Vec<String>,
    pub max_label_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                format: "table".to_string(),
                colored: false,
                date_format: "medium".to_string(),
            },
            chart: ChartConfig {
                palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
                max_label_len: CHART_LABEL_LEN,
            },
            ranking: RankingConfig { top_n: 5 },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &PathBuf) -> Result<Self> {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, config_path: &PathBuf) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("chatlens").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart.palette.len() < MIN_PALETTE_SIZE {
            return Err(anyhow!(
                "chart.palette needs at least {} colors, got {}",
                MIN_PALETTE_SIZE,
                self.chart.palette.len()
            ));
        }
        if self.chart.max_label_len == 0 {
            return Err(anyhow!("chart.max_label_len must be positive"));
        }
        if self.ranking.top_n == 0 {
            return Err(anyhow!("ranking.top_n must be positive"));
        }
        crate::utils::date_format::DateFormat::from_config_str(&self.output.date_format)?;
        Ok(())
    }

    /// Set a configuration value by dotted key, e.g. "ranking.top_n".
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.format" => {
                if value != "table" && value != "json" {
                    return Err(anyhow!("output.format must be 'table' or 'json'"));
                }
                self.output.format = value.to_string();
            }
            "output.colored" => {
                self.output.colored = value
                    .parse()
                    .map_err(|_| anyhow!("output.colored must be 'true' or 'false'"))?;
            }
            "output.date_format" => {
                crate::utils::date_format::DateFormat::from_config_str(value)?;
                self.output.date_format = value.to_string();
            }
            "chart.max_label_len" => {
                self.chart.max_label_len = value
                    .parse()
                    .map_err(|_| anyhow!("chart.max_label_len must be a positive integer"))?;
            }
            "ranking.top_n" => {
                self.ranking.top_n = value
                    .parse()
                    .map_err(|_| anyhow!("ranking.top_n must be a positive integer"))?;
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key '{}'. Supported keys: output.format, output.colored, output.date_format, chart.max_label_len, ranking.top_n",
                    key
                ));
            }
        }
        self.validate()
    }
}
