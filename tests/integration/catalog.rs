//! Catalog integration tests
//!
//! Re-homing and lookup through the public API, including the process-wide
//! default catalog.

use rehome::util::logger;
use rehome::{global, greeting1, greeting2, Catalog, CatalogError, Greeter, Greeting};

#[test]
fn test_rehome_and_resolve_builtins() {
    logger::init();
    let catalog = Catalog::new();

    catalog.rehome(&greeting1().definition()).unwrap();
    catalog.rehome(&greeting2().definition()).unwrap();

    assert_eq!(catalog.greeting("greeting1").unwrap().call(), "Booyaa!");
    assert_eq!(catalog.greeting("greeting2").unwrap().call(), "Howdy!");
    assert_eq!(catalog.names(), vec!["greeting1", "greeting2"]);
}

#[test]
fn test_rehoming_twice_is_a_no_op() {
    let catalog = Catalog::new();

    catalog.rehome(&greeting1().definition()).unwrap();
    catalog.rehome(&greeting1().definition()).unwrap();
    catalog.rehome(&Greeter::class_definition()).unwrap();
    catalog.rehome(&Greeter::class_definition()).unwrap();

    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_unnamed_target_is_rejected_with_the_designated_error() {
    let catalog = Catalog::new();
    let improvised = Greeting::anonymous(|| "made up on the spot".to_string());

    let err = catalog.rehome(&improvised.definition()).unwrap_err();
    assert!(matches!(err, CatalogError::Unnamed));
    // Nothing was bound
    assert!(catalog.is_empty());
}

#[test]
fn test_global_catalog_is_shared_and_idempotent() {
    // Other tests may also touch the global catalog; only assert what this
    // test itself bound.
    global().rehome(&greeting1().definition()).unwrap();
    global().rehome(&greeting1().definition()).unwrap();

    assert!(global().contains("greeting1"));
    assert_eq!(global().greeting("greeting1").unwrap().call(), "Booyaa!");
}

#[test]
fn test_isolated_catalogs_do_not_leak_into_each_other() {
    let a = Catalog::new();
    let b = Catalog::new();

    a.rehome(&greeting1().definition()).unwrap();

    assert!(a.contains("greeting1"));
    assert!(!b.contains("greeting1"));
}
