use std::path::Path;

use anyhow::Context;

use crate::model::Comic;

const EMBEDDED_CATALOG: &str = include_str!("../../fixtures/catalog.json");

#[tracing::instrument(name = "load catalog fixture", skip_all, fields(path))]
pub fn load(path: Option<&Path>) -> Result<Vec<Comic>, anyhow::Error> {
    let comics: Vec<Comic> = match path {
        Some(path) => {
            tracing::Span::current().record("path", tracing::field::debug(path));

            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog fixture {}", path.display()))?;
            serde_json::from_str(&raw).context("Catalog fixture is not a list of comics")?
        }
        None => serde_json::from_str(EMBEDDED_CATALOG).context("Embedded catalog is invalid")?,
    };

    tracing::info!(comics = comics.len(), "Catalog fixture loaded");

    Ok(comics)
}
