//! Storage round-trips and soft-fail loading through the controller.

#![allow(clippy::unwrap_used)]

use velomir_cart::page::Hook;
use velomir_cart::storage::{MemoryStore, keys};
use velomir_integration_tests::TestContext;

#[test]
fn a_new_session_resumes_the_persisted_cart() {
    let mut first = TestContext::new();
    first.buy(1, "Bike A", 3000);
    first.buy(2, "Bike B", 2500);
    first.buy(1, "Bike A", 3000);
    let raw = first.stored_raw().unwrap();

    // Next page load: same store contents, fresh controller.
    let second = TestContext::with_store(MemoryStore::with_entry(keys::CART, &raw));

    assert_eq!(second.controller.cart(), first.controller.cart());
    let ids: Vec<i32> = second
        .controller
        .cart()
        .items()
        .iter()
        .map(|i| i.id.as_i32())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    // The resumed session rendered from the loaded state before any event.
    assert_eq!(second.page().text(Hook::CartCount), Some("3"));
    assert_eq!(second.page().text(Hook::Subtotal), Some("8\u{a0}500 \u{20bd}"));
}

#[test]
fn corrupted_storage_starts_an_empty_session() {
    let ctx = TestContext::with_store(MemoryStore::with_entry(keys::CART, "][ not json"));
    assert!(ctx.controller.cart().is_empty());
    assert_eq!(ctx.page().text(Hook::CartCount), Some("0"));
}

#[test]
fn incompatible_shape_starts_an_empty_session() {
    let ctx = TestContext::with_store(MemoryStore::with_entry(
        keys::CART,
        r#"{"version": 2, "items": []}"#,
    ));
    assert!(ctx.controller.cart().is_empty());
}

#[test]
fn every_mutation_overwrites_the_stored_payload() {
    let mut ctx = TestContext::new();
    ctx.buy(5, "Kids Balance Bike", 4990);
    let after_add = ctx.stored_raw().unwrap();
    assert!(after_add.contains(r#""quantity":1"#));

    ctx.buy(5, "Kids Balance Bike", 4990);
    let after_second = ctx.stored_raw().unwrap();
    assert!(after_second.contains(r#""quantity":2"#));
    assert_ne!(after_add, after_second);
}

#[test]
fn stored_payload_is_the_page_facing_array_shape() {
    let mut ctx = TestContext::new();
    ctx.buy(8, "LED Light Set", 890);

    let value: serde_json::Value = serde_json::from_str(&ctx.stored_raw().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"id": 8, "name": "LED Light Set", "price": 890, "quantity": 1}])
    );
}
