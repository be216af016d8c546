#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::GlobeConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "globe-founders")]
#[command(about = "Founder directory on a globe: country groups and camera commands")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory source: builtin, a .json/.csv/.toml file, or an http(s) URL
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[arg(long, env = "MAPBOX_TOKEN", global = true, hide_env_values = true)]
    pub map_token: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔（若有），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<GlobeConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                GlobeConfig::from_file(path)?
            }
            None => GlobeConfig::default(),
        };

        if let Some(source) = &self.source {
            tracing::debug!("Source overridden to: {}", source);
            config.source.location = source.clone();
        }
        if let Some(token) = &self.map_token {
            config.map.token = Some(token.clone());
        }

        Ok(config)
    }
}
