use clap::Parser;
use ipay_tokly::application::orchestrator::{GATEWAY_ID, PaymentOrchestrator};
use ipay_tokly::config::Settings;
use ipay_tokly::domain::order::{Currency, OrderId, OrderSnapshot};
use ipay_tokly::domain::response::Outcome;
use ipay_tokly::infrastructure::http::ToklyClient;
use ipay_tokly::infrastructure::in_memory::{InMemoryConfigStore, InMemoryOrderSystem};
use ipay_tokly::infrastructure::tracing_notices::TracingNoticeSink;
use ipay_tokly::telemetry::{self, LogFormat};
use miette::{IntoDiagnostic, Result, miette};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant settings file (TOML)
    #[arg(long)]
    config: PathBuf,

    /// Shop order number, echoed back by the provider
    #[arg(long)]
    order_id: u64,

    /// Order total in major units, e.g. 49.99
    #[arg(long)]
    total: Decimal,

    /// Three-letter currency code
    #[arg(long, default_value = "UAH")]
    currency: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format)
        .map_err(|err| miette!("failed to install the log subscriber: {err}"))?;

    let settings = Settings::new(&cli.config).into_diagnostic()?;
    let currency: Currency = cli.currency.parse().into_diagnostic()?;
    let order_id = OrderId(cli.order_id);

    let configs = InMemoryConfigStore::new();
    configs.insert(GATEWAY_ID, settings.merchant).await;

    let orders = InMemoryOrderSystem::new();
    orders
        .insert(OrderSnapshot::new(order_id, cli.total, currency))
        .await;

    let gateway = ToklyClient::with_endpoint(settings.gateway.endpoint).into_diagnostic()?;

    let orchestrator = PaymentOrchestrator::new(
        Box::new(gateway),
        Box::new(orders),
        Box::new(configs),
        Box::new(TracingNoticeSink),
    );

    match orchestrator.process_payment(order_id).await {
        Outcome::Redirect(url) => {
            println!("{url}");
            Ok(())
        }
        Outcome::Failed(err) => Err(miette!("payment for order {order_id} failed: {err}")),
    }
}
