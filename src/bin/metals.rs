//! `metals` — terminal front end for the metals price API.
//!
//! Each subcommand drives the synchronizer the way the web view would and
//! renders the resulting state. The exit code is non-zero when the rendered
//! state carries an error.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use metals_client::config::{Config, ENV_BASE_URL};
use metals_client::prelude::*;
use metals_client::shared::time::parse_date;
use metals_client::shared::SUPPORTED_CURRENCIES;

#[derive(Parser, Debug)]
#[command(name = "metals", version, about = "Precious metal prices from the metals API")]
struct Cli {
    /// Backend base URL (overrides METALS_API_BASE_URL)
    #[arg(long, global = true, env = ENV_BASE_URL)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the backend
    Health,
    /// Current prices for all metals
    Prices {
        #[arg(short, long, value_parser = parse_currency_arg)]
        currency: Option<CurrencyCode>,
    },
    /// Price history for one metal
    History {
        #[arg(short, long, default_value = "GOLD")]
        metal: String,
        #[arg(long, value_parser = parse_date_arg)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date_arg)]
        to: Option<NaiveDate>,
    },
    /// Ask the backend to refresh its prices, then show them
    Update,
    /// Trend, volatility and sentiment for one metal
    Analysis {
        #[arg(short, long, default_value = "GOLD")]
        metal: String,
    },
    /// Health and current prices, as on first page load
    Dashboard {
        #[arg(short, long, value_parser = parse_currency_arg)]
        currency: Option<CurrencyCode>,
    },
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).ok_or_else(|| format!("expected YYYY-MM-DD, got {:?}", raw))
}

fn parse_currency_arg(raw: &str) -> Result<CurrencyCode, String> {
    let currency = CurrencyCode::new(raw);
    if !currency.is_well_formed() {
        return Err(format!("expected a three-letter currency code, got {:?}", raw));
    }
    if !currency.is_supported() {
        return Err(format!(
            "unsupported currency {}, expected one of {}",
            currency,
            SUPPORTED_CURRENCIES.join(", ")
        ));
    }
    Ok(currency)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metals_client=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Could not load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let client = match MetalsClientBuilder::from_config(&config).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Could not create client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let currency_or_default =
        |c: Option<CurrencyCode>| c.unwrap_or_else(|| config.default_currency.clone());

    let view = Synchronizer::with_filter(
        client,
        Filter::default().with_currency(config.default_currency.clone()),
    );

    let failed = match cli.command {
        Command::Health => {
            view.check_backend_health().await;
            let state = view.snapshot().await;
            render_health(&state);
            !state.health.as_ref().is_some_and(HealthStatus::is_healthy)
        }
        Command::Prices { currency } => {
            view.refresh_current_prices(currency_or_default(currency)).await;
            let state = view.snapshot().await;
            render_prices(&state.prices);
            state.prices.error().is_some()
        }
        Command::History { metal, from, to } => {
            let filter = Filter {
                metal: Some(MetalSymbol::from(metal)),
                date_from: from,
                date_to: to,
                currency: config.default_currency.clone(),
            };
            view.load_history(filter).await;
            let state = view.snapshot().await;
            render_history(&state);
            state.history.error().is_some()
        }
        Command::Update => {
            view.trigger_backend_update().await;
            let state = view.snapshot().await;
            render_update(&state.update);
            render_prices(&state.prices);
            state.update.error().is_some() || state.prices.error().is_some()
        }
        Command::Analysis { metal } => {
            view.load_analysis(MetalSymbol::from(metal)).await;
            let state = view.snapshot().await;
            render_analysis(&state.analysis);
            state.analysis.error().is_some()
        }
        Command::Dashboard { currency } => {
            view.update_filter(|f| f.currency = currency_or_default(currency))
                .await;
            view.mount().await;
            let state = view.snapshot().await;
            render_health(&state);
            render_prices(&state.prices);
            state.prices.error().is_some()
                || !state.health.as_ref().is_some_and(HealthStatus::is_healthy)
        }
    };

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn render_health(state: &ViewState) {
    match &state.health {
        Some(status) => println!("Backend status: {} - {}", status.label(), status.message()),
        None => println!("Backend status: unknown"),
    }
}

fn render_prices(board: &PriceBoard) {
    let currency = board
        .currency()
        .map(|c| c.to_string())
        .unwrap_or_default();
    println!();
    println!("Current metal prices {}", currency);

    if let Some(error) = board.error() {
        println!("  ! {}", error);
    }
    if board.quotes().is_empty() {
        if board.error().is_none() {
            println!("  No data to display.");
        }
        return;
    }

    println!(
        "  {:<10} {:<12} {:>14} {:<8} {}",
        "SYMBOL", "NAME", "PRICE", "UNIT", "DATE"
    );
    for quote in board.quotes() {
        println!(
            "  {:<10} {:<12} {:>14} {:<8} {}",
            quote.symbol,
            quote.display_name,
            display_price(quote.price),
            quote.unit,
            display_timestamp(quote.observed_at)
        );
    }
}

fn render_history(state: &ViewState) {
    let chart = &state.history;
    // The filter names the last requested metal, even when that load failed.
    let metal = state
        .filter
        .metal
        .as_ref()
        .or_else(|| chart.query().map(|q| &q.metal))
        .map(|m| m.to_string())
        .unwrap_or_default();
    // Label values with the quote currency when prices are loaded.
    let unit = state
        .filter
        .metal
        .as_ref()
        .and_then(|m| state.prices.get(m))
        .map(|q| q.unit_currency().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| CurrencyCode::USD.to_string());

    println!("Price history {}", metal);
    if let Some(error) = chart.error() {
        println!("  ! {}", error);
        return;
    }
    if let Some(notice) = chart.notice() {
        println!("  {}", notice);
        return;
    }

    for point in chart.points() {
        println!(
            "  {}  {:>14} {}",
            display_date(point.observed_at),
            display_price(Some(point.price)),
            unit
        );
    }
    if let Some((low, high)) = chart.price_range() {
        println!(
            "  range: {} .. {} {}",
            display_price(Some(low)),
            display_price(Some(high)),
            unit
        );
    }
}

fn render_update(panel: &UpdatePanel) {
    if let Some(error) = panel.error() {
        println!("Update failed: {}", error);
    } else if let Some(message) = panel.message() {
        println!("{}", message);
    }
}

fn render_analysis(panel: &AnalysisPanel) {
    if let Some(error) = panel.error() {
        println!("! {}", error);
        return;
    }
    if let Some(a) = panel.analysis() {
        println!("Analysis {}", a.metal);
        println!(
            "  period:     {} .. {}",
            display_date(a.period_start),
            display_date(a.period_end)
        );
        println!("  trend:      {}", a.trend);
        println!("  volatility: {}", a.volatility);
        println!("  sentiment:  {}", a.sentiment);
    }
}
