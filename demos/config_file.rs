//! Configuration file example
//!
//! Builds a facade from `demos/config/valipipe.yaml`, or from the path given
//! as the first argument.

use tracing::info;
use valipipe_sdk::{ValipipeBuilder, ValipipeConfig};

fn main() -> anyhow::Result<()> {
    valipipe_demos::init_tracing()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/config/valipipe.yaml".to_string());

    let config = ValipipeConfig::from_file(&path)?;
    info!("Loaded configuration from {}: {:?}", path, config);

    let vp = ValipipeBuilder::new().with_config(config).build()?;

    println!("Registered operations: {}", vp.names().join(", "));
    println!("email available: {}", vp.contains("email"));

    Ok(())
}
