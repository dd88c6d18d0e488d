//! Tetrad Node binary
//!
//! Builds a node from the environment, passes one message around the seed
//! ring, decides a proposal and prints the results as JSON.

use tetrad_node::{NodeConfig, Report, TetradNode};
use tetrad_protocols::Proposal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> tetrad_node::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_from_env("TETRAD_LOG"))
                .unwrap_or_else(|_| "tetrad_node=info,tetrad_protocols=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Tetrad Node");

    let config = NodeConfig::from_env()?;
    let node = TetradNode::new(&config);

    let ids: Vec<String> = node.snapshot().await.vertices.into_iter().map(|v| v.id).collect();
    let mut messages = Vec::with_capacity(ids.len());
    for (i, from) in ids.iter().enumerate() {
        let to = &ids[(i + 1) % ids.len()];
        if from == to {
            continue;
        }
        messages.push(node.send(from, to, serde_json::json!({ "hop": i })).await?);
    }

    let proposal = Proposal::new("Rebalance", "Adopt the current weights as the baseline");
    let decision = node.decide(&proposal).await?;

    let report = Report {
        messages,
        decision,
        status: node.status().await,
    };
    println!("{}", report.to_json()?);

    Ok(())
}
