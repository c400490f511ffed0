use anyhow::Result;
use prism_query::QueryConfig;

/// Print the effective configuration as TOML
pub fn run_config(config: &QueryConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
