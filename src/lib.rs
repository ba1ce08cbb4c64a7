//! rehome
//!
//! Make behavior-carrying objects serializable by stable name. Callables
//! bind a stable name and definition into a [`Catalog`]; a snapshot stores
//! names only, and loading resolves them back through the catalog. No source
//! text is ever inspected or re-executed.
//!
//! # Example
//!
//! ```rust
//! use rehome::{greeting1, greeting2, snapshot, Catalog, Greeter};
//!
//! fn main() -> rehome::CatalogResult<()> {
//!     let catalog = Catalog::new();
//!     let greeter = Greeter::rehomed(&catalog, vec![greeting1(), greeting2()])?;
//!     greeter.greet(); // Booyaa! then Howdy!
//!
//!     let saved = snapshot::save(&greeter)?;
//!     let restored = snapshot::load(&catalog, &saved)?;
//!     restored.greet();
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod catalog;
pub mod greeter;
pub mod greeting;
pub mod snapshot;

// Utility modules
pub mod util;

// Re-exports
pub use catalog::{
    global, Catalog, CatalogConfig, CatalogError, CatalogResult, CollisionPolicy, Definition,
};
pub use greeter::Greeter;
pub use greeting::{greeting1, greeting2, Greeting};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
