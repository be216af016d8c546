use clap::Parser;
use globe_founders::config::cli::Command;
use globe_founders::utils::error::ErrorSeverity;
use globe_founders::utils::{logger, validation::Validate};
use globe_founders::{
    load_directory, source_from_location, CliConfig, GlobeError, GlobeSession, RecordingSurface,
    Result,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🌍 Starting globe-founders");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.resolve()?;
    config.validate()?;

    // 需要地圖的指令先確認 token，沒有就直接停在設定錯誤
    if cli.command.needs_map() {
        config.validate_map_token()?;
        tracing::debug!("Map style {} ({} projection)", config.map.style, config.map.projection);
    }

    let source = source_from_location(&config.source.location)?;
    let directory = load_directory(source.as_ref()).await?;
    let mut session = GlobeSession::from_config(directory, &config)?;

    match &cli.command {
        Command::Countries => {
            let stats = session.stats();
            println!("🌐 Global Founders · {}", stats.worldwide());
            for summary in session.summaries() {
                println!("  {:<20} {:>3}  {}", summary.country, summary.count, summary.preview);
            }
        }
        Command::Summary => {
            let stats = session.stats();
            println!("{}", stats.headline());
            if session.directory().skipped() > 0 {
                println!("{} record(s) skipped", session.directory().skipped());
            }
        }
        Command::Select { country } => {
            let mut surface = RecordingSurface::default();
            session.place_markers(&mut surface);

            match session.handle_country_click(country, &mut surface) {
                Some(command) => println!("{}", serde_json::to_string_pretty(&command)?),
                None => tracing::warn!("No founders in '{}', camera unchanged", country),
            }
        }
        Command::Founder { id } => {
            let mut surface = RecordingSurface::default();
            session.place_markers(&mut surface);

            let card = session
                .handle_marker_click(*id, &mut surface)
                .ok_or_else(|| GlobeError::InvalidConfigValueError {
                    field: "id".to_string(),
                    value: id.to_string(),
                    reason: "No founder with this id".to_string(),
                })?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        Command::Ticker { count } => {
            let mut interval = tokio::time::interval(session.ticker().interval());
            for _ in 0..*count {
                interval.tick().await;
                println!("{}", session.ticker().banner());
                session.ticker_mut().advance();
            }
        }
    }

    Ok(())
}
