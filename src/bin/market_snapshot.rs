use market_desk::prelude::*;
use std::env;

/// Prints the previous close and reference details of the tickers given on
/// the command line, plus the resolved web app build settings.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Config::new();

    info!("market-desk {}", version());
    info!("Web app config: {}", app_config(BuildMode::from_env()));

    let market = MarketServiceImpl::new(&config.polygon)?;
    let tickers: Vec<String> = env::args().skip(1).collect();
    if tickers.is_empty() {
        warn!("No tickers given; usage: market_snapshot <TICKER>...");
        return Ok(());
    }

    for ticker in &tickers {
        let details = market.get_ticker_details(ticker).await?;
        let prev = market.get_previous_close(ticker).await?;
        println!("{}", serde_json::to_string_pretty(&details)?);
        println!("{}", serde_json::to_string_pretty(&prev)?);
    }

    Ok(())
}
