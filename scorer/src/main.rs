use std::{env, error::Error};

use chain_data::{initialize_sources, Network};
use chrono::Utc;
use scorer::{parse_chain_id, score_wallet, AppError, ScoreReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod defaults {
    pub const OUTPUT_FORMAT: &str = "text";
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorer=info,chain_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Credentials are checked before anything is fetched
    let sources = initialize_sources().map_err(AppError::from)?;

    let address = env::args()
        .nth(1)
        .or_else(|| env::var("WALLET_ADDRESS").ok())
        .ok_or_else(|| AppError::MissingEnvVar("WALLET_ADDRESS".into()))?;

    let chain_id = parse_chain_id(env::var("CHAIN_ID").ok().as_deref())?;
    let network = Network::resolve(chain_id);

    let output_format =
        env::var("OUTPUT_FORMAT").unwrap_or_else(|_| defaults::OUTPUT_FORMAT.to_string());

    let score = score_wallet(
        &sources.transactions,
        &sources.transfers,
        network,
        &address,
        Utc::now(),
    )
    .await?;

    let report = ScoreReport::new(&address, network, &score);

    match output_format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report.render_text()),
    }

    Ok(())
}
