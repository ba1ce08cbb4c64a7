//! Greeter integration tests
//!
//! The concrete demo scenario and the equivalence of the two re-homing
//! factories.

use rehome::{greeting1, greeting2, Catalog, CatalogError, Greeter, Greeting};

fn output_of(greeter: &Greeter) -> String {
    let mut buf = Vec::new();
    greeter.write_greetings(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_demo_scenario_prints_booyaa_then_howdy() {
    let greeter = Greeter::new(vec![greeting1(), greeting2()]);
    assert_eq!(output_of(&greeter), "Booyaa!\nHowdy!\n");
}

#[test]
fn test_direct_constructor_needs_no_catalog() {
    let greeter = Greeter::new(vec![greeting2()]);
    assert_eq!(output_of(&greeter), "Howdy!\n");
}

#[test]
fn test_both_factories_match_the_direct_constructor() {
    let direct = Greeter::new(vec![greeting1(), greeting2()]);
    let a = Greeter::rehomed(&Catalog::new(), vec![greeting1(), greeting2()]).unwrap();
    let b = Greeter::new_from_providers(&Catalog::new(), vec![greeting1(), greeting2()]).unwrap();

    assert_eq!(output_of(&a), output_of(&direct));
    assert_eq!(output_of(&b), output_of(&direct));
}

#[test]
fn test_factories_home_class_and_providers() {
    let catalog = Catalog::new();
    Greeter::new_from_providers(&catalog, vec![greeting1(), greeting2()]).unwrap();

    assert!(catalog.contains(Greeter::CLASS_NAME));
    assert!(catalog.contains("greeting1"));
    assert!(catalog.contains("greeting2"));
}

#[test]
fn test_factory_failure_leaves_no_partial_aggregator() {
    let catalog = Catalog::new();
    let improvised = Greeting::anonymous(|| "oops".to_string());

    let result = Greeter::new_from_providers(&catalog, vec![improvised, greeting1()]);
    assert!(matches!(result, Err(CatalogError::Unnamed)));

    // The class was homed before the failure; the named provider after the
    // failing one was never reached.
    assert!(catalog.contains(Greeter::CLASS_NAME));
    assert!(!catalog.contains("greeting1"));
}

#[test]
fn test_custom_named_providers() {
    let hello = Greeting::named("hello", || "Hello!".to_string());
    let bye = Greeting::named("bye", || "Bye!".to_string());

    let catalog = Catalog::new();
    let greeter = Greeter::rehomed(&catalog, vec![hello, bye]).unwrap();

    assert_eq!(output_of(&greeter), "Hello!\nBye!\n");
    assert_eq!(catalog.names(), vec!["hello", "bye", "Greeter"]);
}
