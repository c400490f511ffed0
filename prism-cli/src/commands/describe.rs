use super::translate::print_request;
use anyhow::{Context, Result};
use prism_query::{QueryConfig, QueryDescriptor, RequestTranslator};
use std::path::Path;

/// Run describe command on a stored descriptor (JSON)
pub fn run_describe(path: &Path, config: &QueryConfig, pretty: bool) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Descriptor file not found at {:?}", path);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor at {:?}", path))?;
    let query: QueryDescriptor = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse descriptor at {:?}", path))?;

    tracing::info!(
        "Loaded descriptor: {} indices, {} types, {} fields, page {}",
        query.indices().len(),
        query.types().len(),
        query.fields().len(),
        query.page()
    );

    let request = RequestTranslator::new(config).translate(&query)?;
    print_request(&request, pretty)
}
