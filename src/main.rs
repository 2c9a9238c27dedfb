use anyhow::Context;
use clap::Parser;
use portfolio_check::config::toml_config::{to_toml_string, ContentFile, ValidationSection};
use portfolio_check::core::content::builtin;
use portfolio_check::utils::{logger, validation::Validate};
use portfolio_check::{CliConfig, ContentStore, PortfolioError, SelfTest};
use std::collections::HashMap;

fn load_content(config: &CliConfig) -> portfolio_check::Result<(ContentStore, ValidationSection)> {
    match &config.content {
        Some(path) => {
            tracing::info!("📁 Loading content from: {}", path);
            let vars = HashMap::from([("BASE_URL".to_string(), config.base_url.clone())]);
            let file = ContentFile::from_file(path, &vars)?;
            file.validate()?;
            Ok(file.into_parts())
        }
        None => {
            tracing::info!("📦 Using built-in page content");
            Ok((builtin(&config.base_url), ValidationSection::default()))
        }
    }
}

fn report_error(e: &PortfolioError) {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting portfolio-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let (store, section) = match load_content(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    if config.dump {
        print!("{}", to_toml_string(&store)?);
        return Ok(());
    }

    // 命令列設定優先於內容檔
    let mode = config.mode.unwrap_or(section.mode);
    tracing::debug!("Validation mode: {:?}", mode);

    let self_test = SelfTest::new(&store, &section.rules)?;
    let report = self_test.run();

    if config.json {
        let json = serde_json::to_string_pretty(report).context("serializing report")?;
        println!("{}", json);
    }

    if let Err(e) = report.enforce(mode) {
        report_error(&e);
        std::process::exit(2);
    }

    Ok(())
}
