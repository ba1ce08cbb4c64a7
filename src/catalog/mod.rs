//! Definition catalog
//!
//! An explicit registry mapping stable names to definitions. Re-homing a
//! definition binds it here so a snapshot can later refer to it by name
//! alone. The catalog is append-only: entries are added, never removed, and
//! insertion order is preserved.
//!
//! Catalogs are plain values and can be injected for isolated testing; a
//! process-wide default is available through [`global`].

pub mod error;

pub use error::{CatalogError, CatalogResult};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::greeter::Greeter;
use crate::greeting::Greeting;

/// Reconstructor for an aggregator class entry.
pub type AggregatorCtor = fn(Vec<Greeting>) -> Greeter;

/// A catalog entry: either a greeting callable or an aggregator class.
#[derive(Clone)]
pub enum Definition {
    /// A greeting callable bound under its stable name
    Greeting(Greeting),
    /// An aggregator class with its reconstructor
    Aggregator {
        /// Stable class name
        name: &'static str,
        /// Builds an instance from looked-up providers
        construct: AggregatorCtor,
    },
}

impl Definition {
    /// Stable name this definition binds, if it has one.
    pub fn stable_name(&self) -> Option<&str> {
        match self {
            Definition::Greeting(g) => g.name(),
            Definition::Aggregator { name, .. } => Some(name),
        }
    }

    /// Whether both entries denote the same underlying definition.
    fn same_definition(
        &self,
        other: &Definition,
    ) -> bool {
        match (self, other) {
            (Definition::Greeting(a), Definition::Greeting(b)) => a.same_callable(b),
            (
                Definition::Aggregator {
                    name: a,
                    construct: ca,
                },
                Definition::Aggregator {
                    name: b,
                    construct: cb,
                },
            ) => a == b && *ca as usize == *cb as usize,
            _ => false,
        }
    }
}

/// What to do when a name is already bound to a different definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Reject the re-home with [`CatalogError::Collision`]
    #[default]
    Fail,
    /// Replace the existing binding
    Overwrite,
}

/// Catalog behavior configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Collision handling for conflicting re-homes
    #[serde(default)]
    pub collision: CollisionPolicy,
}

static GLOBAL: Lazy<Catalog> = Lazy::new(Catalog::new);

/// The process-wide default catalog. Starts empty.
pub fn global() -> &'static Catalog {
    &GLOBAL
}

/// Insertion-ordered registry of stable name to definition.
#[derive(Default)]
pub struct Catalog {
    config: CatalogConfig,
    entries: RwLock<IndexMap<String, Definition>>,
}

impl Catalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with an explicit configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Re-home a definition: ensure its stable name is bound in this catalog.
    ///
    /// The transition is one-way and idempotent. Re-homing a definition that
    /// is already bound is a no-op. A target without a stable name fails with
    /// [`CatalogError::Unnamed`]; a name bound to a different definition is
    /// handled per the configured [`CollisionPolicy`].
    pub fn rehome(
        &self,
        def: &Definition,
    ) -> CatalogResult<()> {
        let name = def.stable_name().ok_or(CatalogError::Unnamed)?;
        let mut entries = self.entries.write();
        match entries.get(name) {
            Some(existing) if existing.same_definition(def) => Ok(()),
            Some(_) => match self.config.collision {
                CollisionPolicy::Fail => Err(CatalogError::Collision(name.to_string())),
                CollisionPolicy::Overwrite => {
                    debug!("re-home overwrote `{}`", name);
                    entries.insert(name.to_string(), def.clone());
                    Ok(())
                }
            },
            None => {
                debug!("re-homed `{}`", name);
                entries.insert(name.to_string(), def.clone());
                Ok(())
            }
        }
    }

    /// Look up a greeting by stable name.
    pub fn greeting(
        &self,
        name: &str,
    ) -> CatalogResult<Greeting> {
        match self.entries.read().get(name) {
            Some(Definition::Greeting(g)) => Ok(g.clone()),
            Some(_) => Err(CatalogError::NotAGreeting(name.to_string())),
            None => Err(CatalogError::Missing(name.to_string())),
        }
    }

    /// Look up an aggregator reconstructor by stable class name.
    pub fn aggregator(
        &self,
        name: &str,
    ) -> CatalogResult<AggregatorCtor> {
        match self.entries.read().get(name) {
            Some(Definition::Aggregator { construct, .. }) => Ok(*construct),
            Some(_) => Err(CatalogError::NotAnAggregator(name.to_string())),
            None => Err(CatalogError::Missing(name.to_string())),
        }
    }

    /// Whether `name` is bound.
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Bound names, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }
}
