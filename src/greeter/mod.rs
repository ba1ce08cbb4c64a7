//! Greeting aggregator
//!
//! Holds an ordered sequence of providers and greets by invoking each one
//! in stored order, writing one output line per provider.
//!
//! Construction comes in three shapes: the direct constructor for callers
//! that do not care about snapshots, and two re-homing factories that bind
//! every provider and the class itself into a catalog first, so the
//! resulting instance is composed entirely of catalog-backed definitions.

use std::io::{self, Write};

use crate::catalog::{Catalog, CatalogError, CatalogResult, Definition};
use crate::greeting::Greeting;

/// Ordered aggregator of greeting providers.
#[derive(Debug, Clone)]
pub struct Greeter {
    greetings: Vec<Greeting>,
}

impl Greeter {
    /// Stable class name bound in the catalog.
    pub const CLASS_NAME: &'static str = "Greeter";

    /// Direct constructor. No re-homing takes place.
    pub fn new(greetings: Vec<Greeting>) -> Self {
        Self { greetings }
    }

    /// Explicit empty factory. Skips all re-homing; this is the entry point
    /// snapshot reconstruction starts from.
    pub fn new_empty() -> Self {
        Self::new(Vec::new())
    }

    /// Catalog entry that re-homes this class.
    pub fn class_definition() -> Definition {
        Definition::Aggregator {
            name: Self::CLASS_NAME,
            construct: Greeter::new,
        }
    }

    /// Stored providers, in invocation order.
    pub fn greetings(&self) -> &[Greeting] {
        &self.greetings
    }

    /// Invoke every provider in stored order and print one line each.
    pub fn greet(&self) {
        for greeting in &self.greetings {
            println!("{}", greeting.call());
        }
    }

    /// Write every provider's text to `out`, one line per provider.
    pub fn write_greetings<W: Write>(
        &self,
        out: &mut W,
    ) -> io::Result<()> {
        for greeting in &self.greetings {
            writeln!(out, "{}", greeting.call())?;
        }
        Ok(())
    }

    /// Re-homing factory: bind each provider, then this class, into
    /// `catalog`, and construct from the looked-up definitions.
    ///
    /// Fails before any instance exists if a provider cannot be re-homed.
    pub fn rehomed(
        catalog: &Catalog,
        greetings: Vec<Greeting>,
    ) -> CatalogResult<Self> {
        for greeting in &greetings {
            catalog.rehome(&greeting.definition())?;
        }
        catalog.rehome(&Self::class_definition())?;

        let construct = catalog.aggregator(Self::CLASS_NAME)?;
        let homed = Self::lookup_all(catalog, &greetings)?;
        Ok(construct(homed))
    }

    /// Re-homing factory that binds the class first, then each provider.
    ///
    /// Observably equivalent to [`Greeter::rehomed`]; both exist because the
    /// class-first ordering is what reconstruction-style callers expect.
    pub fn new_from_providers(
        catalog: &Catalog,
        greetings: Vec<Greeting>,
    ) -> CatalogResult<Self> {
        catalog.rehome(&Self::class_definition())?;
        let construct = catalog.aggregator(Self::CLASS_NAME)?;

        for greeting in &greetings {
            catalog.rehome(&greeting.definition())?;
        }
        let homed = Self::lookup_all(catalog, &greetings)?;
        Ok(construct(homed))
    }

    /// Resolve every provider through the catalog, preserving order.
    fn lookup_all(
        catalog: &Catalog,
        greetings: &[Greeting],
    ) -> CatalogResult<Vec<Greeting>> {
        greetings
            .iter()
            .map(|greeting| {
                let name = greeting.name().ok_or(CatalogError::Unnamed)?;
                catalog.greeting(name)
            })
            .collect()
    }
}
