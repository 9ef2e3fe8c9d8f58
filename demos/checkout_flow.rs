//! End-to-end sandbox checkout
//!
//! Reads credentials from `.env` or the environment, creates an order and
//! prints the approval link. Run it again with the order id once the buyer has
//! approved to capture it:
//!
//! ```text
//! cargo run --example checkout_flow
//! cargo run --example checkout_flow -- capture <ORDER_ID>
//! ```

use rust_decimal::Decimal;
use rust_paypal::{ExperienceOverrides, Intent, PaypalClient, Settings};
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; defaults cover every setting
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rust_paypal=debug")),
        )
        .init();

    let settings = Settings::load();
    tracing::info!("Using {:?} mode, currency {}", settings.mode(), settings.currency);
    let client = PaypalClient::new(settings)?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [command, order_id] if command == "capture" => {
            let capture = client.capture_order(order_id).await?;
            println!("Capture status: {}", capture.status().unwrap_or("unknown"));
        }
        _ => {
            let order = client
                .create_order(
                    Decimal::from_str("10.00")?,
                    None,
                    Intent::Capture,
                    &ExperienceOverrides::default(),
                )
                .await?;

            println!("Order id: {}", order.id().unwrap_or("unknown"));
            if let Some(link) = order.link("payer-action").or_else(|| order.link("approve")) {
                println!("Approve at: {}", link);
            }
        }
    }

    Ok(())
}
