use funding_ledger::{
    apis::FillsClient,
    arguments::{
        get_config_path, get_enabled_debug_modes, get_top_override, is_json_output_enabled,
        patterns, print_help,
    },
    config::{self, Config},
    display,
    errors::FundingError,
    funding::{self, ParticipantEntry},
    logger::{self, LogTag},
};

/// Entry point: run the participants pipeline once and print the result
///
/// Any failure ends the run with a single error message and exit code 1;
/// no partial table is printed.
#[tokio::main]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::debug(
            LogTag::System,
            &format!("Enabled debug modes: {:?}", debug_modes),
        );
    }

    if let Err(e) = run().await {
        logger::error(LogTag::System, &format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn run() -> Result<(), FundingError> {
    let path = get_config_path().unwrap_or_else(|| config::CONFIG_FILE_PATH.to_string());
    config::load_config_from_path(&path)?;
    let cfg = config::get_config_clone()?;

    logger::info(
        LogTag::System,
        &format!(
            "Loading funding participants for market {} (treasury {})",
            cfg.feed.market_id, cfg.funding.treasury_wallet
        ),
    );

    let client = FillsClient::new(&cfg.feed)?;
    let entries = funding::fetch_all_participants(&client, &cfg).await?;

    if is_json_output_enabled() {
        print_json(&entries)
    } else {
        print_table(&entries, &cfg);
        Ok(())
    }
}

fn print_json(entries: &[ParticipantEntry]) -> Result<(), FundingError> {
    let json = serde_json::to_string_pretty(entries)?;
    println!("{}", json);
    Ok(())
}

fn print_table(entries: &[ParticipantEntry], cfg: &Config) {
    let top = get_top_override().unwrap_or(cfg.display.top_participants);
    let summary = funding::summarize(entries, &cfg.funding);

    println!();
    println!("{}", display::render_summary(&summary, top));
    println!();
    if entries.is_empty() {
        println!("No participants found.");
    } else {
        println!("{}", display::render_participants_table(entries, top));
    }
}
