use clap::Subcommand;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List countries by number of founders
    Countries,

    /// Select a country and print the camera command
    Select {
        country: String,
    },

    /// Show the popup card of one founder
    Founder {
        id: u32,
    },

    /// Rotate through the ticker banner
    Ticker {
        #[arg(long, default_value = "6")]
        count: usize,
    },

    /// Print directory totals
    Summary,
}

impl Command {
    /// Commands that draw on the map need a valid access token.
    pub fn needs_map(&self) -> bool {
        matches!(self, Command::Select { .. } | Command::Founder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    #[test]
    fn test_parse_select_with_overrides() {
        let cli = CliConfig::try_parse_from([
            "globe-founders",
            "select",
            "United States",
            "--source",
            "founders.json",
            "--map-token",
            "pk.cli",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Select {
                country: "United States".to_string()
            }
        );
        assert!(cli.command.needs_map());

        let config = cli.resolve().unwrap();
        assert_eq!(config.source.location, "founders.json");
        assert_eq!(config.validate_map_token().unwrap(), "pk.cli");
    }

    #[test]
    fn test_listing_does_not_need_map() {
        let cli = CliConfig::try_parse_from(["globe-founders", "countries"]).unwrap();
        assert!(!cli.command.needs_map());
    }
}
