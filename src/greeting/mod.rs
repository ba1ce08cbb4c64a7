//! Greeting providers
//!
//! Zero-argument callables returning a fixed text value. A provider may
//! carry a stable name, which is what the catalog binds; an anonymous
//! provider has no recoverable definition and cannot be re-homed.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::catalog::Definition;

/// Shared zero-argument callable behind every provider.
pub(crate) type GreetingFn = Arc<dyn Fn() -> String + Send + Sync>;

/// A zero-argument greeting provider, optionally carrying a stable name.
///
/// Clones share the underlying callable, so a re-homed provider and its
/// clones compare as the same definition.
#[derive(Clone)]
pub struct Greeting {
    name: Option<Arc<str>>,
    call: GreetingFn,
}

impl Greeting {
    /// Create a provider with a stable name.
    pub fn named<F>(
        name: impl Into<Arc<str>>,
        f: F,
    ) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            call: Arc::new(f),
        }
    }

    /// Create a provider without a stable name.
    ///
    /// Anonymous providers can be invoked and aggregated, but re-homing
    /// them fails because there is no name to bind.
    pub fn anonymous<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            name: None,
            call: Arc::new(f),
        }
    }

    /// Stable name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the provider.
    pub fn call(&self) -> String {
        (self.call)()
    }

    /// Catalog entry that re-homes this provider.
    pub fn definition(&self) -> Definition {
        Definition::Greeting(self.clone())
    }

    /// Whether `other` wraps the same underlying callable.
    pub(crate) fn same_callable(
        &self,
        other: &Greeting,
    ) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

impl fmt::Debug for Greeting {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Greeting")
            .field("name", &self.name().unwrap_or("<anonymous>"))
            .finish()
    }
}

static GREETING1: Lazy<Greeting> =
    Lazy::new(|| Greeting::named("greeting1", || "Booyaa!".to_string()));

static GREETING2: Lazy<Greeting> =
    Lazy::new(|| Greeting::named("greeting2", || "Howdy!".to_string()));

/// The "Booyaa!" provider.
///
/// Every call returns a handle to the same underlying callable, so repeated
/// re-homes of it are idempotent.
pub fn greeting1() -> Greeting {
    GREETING1.clone()
}

/// The "Howdy!" provider.
pub fn greeting2() -> Greeting {
    GREETING2.clone()
}
