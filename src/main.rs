//! Prints an example mobile and fixed-line number for every supported region.
//!
//! Output is tab-separated on stdout: region, mobile, fixed line, parser link.
//! Logging goes to stderr (`RUST_LOG`, default `warn`).

use anyhow::Result;
use example_numbers::{
    build_example_table, ExampleCell, GeneratorConfig, MetadataOracle, RandomValidNumberGenerator,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn link(cell: &ExampleCell) -> String {
    cell.number()
        .map(|candidate| candidate.parser_link())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match GeneratorConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    info!(max_attempts = config.max_attempts, seed = ?config.seed, "configuration loaded");

    let generator = RandomValidNumberGenerator::new(MetadataOracle::new(), config);
    let mut rng = generator.digit_source();
    let rows = build_example_table(&generator, &mut rng);

    for row in &rows {
        let primary = if row.mobile.number().is_some() {
            &row.mobile
        } else {
            &row.fixed_line
        };
        println!(
            "{}\t{}\t{}\t{}",
            row.region,
            row.mobile,
            row.fixed_line,
            link(primary)
        );
    }

    info!(regions = rows.len(), "table complete");
    Ok(())
}
