//! Name-based snapshots
//!
//! Serializes an aggregator as its class name plus the stable names of its
//! providers, never their behavior. Loading resolves every name through a
//! catalog, so a snapshot is only as good as the catalog it is replayed
//! against.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogError, CatalogResult};
use crate::greeter::Greeter;

/// Wire record for a saved aggregator.
#[derive(Debug, Serialize, Deserialize)]
struct GreeterRecord {
    class: String,
    greetings: Vec<String>,
}

/// Serialize `greeter` into a JSON snapshot of stable names.
///
/// Fails with [`CatalogError::Unnamed`] if any stored provider is anonymous,
/// since such a provider could never be resolved at load time.
pub fn save(greeter: &Greeter) -> CatalogResult<String> {
    let greetings = greeter
        .greetings()
        .iter()
        .map(|g| g.name().map(str::to_string).ok_or(CatalogError::Unnamed))
        .collect::<CatalogResult<Vec<_>>>()?;

    let record = GreeterRecord {
        class: Greeter::CLASS_NAME.to_string(),
        greetings,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Rebuild an aggregator from a JSON snapshot, resolving every name in
/// `catalog`.
pub fn load(
    catalog: &Catalog,
    json: &str,
) -> CatalogResult<Greeter> {
    let record: GreeterRecord = serde_json::from_str(json)?;

    let construct = catalog.aggregator(&record.class)?;
    let greetings = record
        .greetings
        .iter()
        .map(|name| catalog.greeting(name))
        .collect::<CatalogResult<Vec<_>>>()?;

    debug!(
        "loaded `{}` with {} provider(s)",
        record.class,
        greetings.len()
    );
    Ok(construct(greetings))
}
