//! Mutation pipeline scenarios: every event re-renders both page regions
//! and overwrites the persisted payload.

#![allow(clippy::unwrap_used)]

use velomir_cart::events::{self, CartEvent};
use velomir_cart::page::Hook;
use velomir_core::ProductId;
use velomir_integration_tests::TestContext;

#[test]
fn buying_the_same_bike_twice_merges_lines() {
    let mut ctx = TestContext::new();
    ctx.buy(1, "Bike A", 3000);
    ctx.buy(1, "Bike A", 3000);

    assert_eq!(ctx.controller.cart().len(), 1);
    assert_eq!(ctx.controller.cart().items()[0].quantity, 2);
    assert_eq!(ctx.page().text(Hook::CartCount), Some("2"));
}

#[test]
fn two_bikes_scenario_renders_free_shipping() {
    let mut ctx = TestContext::new();
    ctx.buy(1, "Bike A", 3000);
    ctx.buy(2, "Bike B", 2500);
    ctx.buy(1, "Bike A", 3000);

    assert_eq!(ctx.page().text(Hook::CartCount), Some("3"));
    assert_eq!(ctx.page().text(Hook::Subtotal), Some("8\u{a0}500 \u{20bd}"));
    assert_eq!(ctx.page().text(Hook::Shipping), Some("Free"));
    assert_eq!(ctx.page().text(Hook::Total), Some("8\u{a0}500 \u{20bd}"));

    let items = ctx.page().html(Hook::CartItems).unwrap();
    assert!(items.find("Bike A").unwrap() < items.find("Bike B").unwrap());
}

#[test]
fn helmet_decrement_empties_the_cart() {
    let mut ctx = TestContext::new();
    ctx.buy(5, "Helmet", 1000);
    ctx.dispatch(events::item_action(Some("decrement"), Some("5")).unwrap());

    assert!(ctx.controller.cart().is_empty());
    assert_eq!(ctx.page().text(Hook::CartCount), Some("0"));
    assert_eq!(ctx.page().text(Hook::Subtotal), Some("0 \u{20bd}"));
    assert_eq!(ctx.page().text(Hook::Total), Some("0 \u{20bd}"));
    assert!(ctx.page().html(Hook::CartItems).unwrap().contains("empty-cart"));
    assert_eq!(ctx.stored_raw().as_deref(), Some("[]"));
}

#[test]
fn small_order_pays_flat_shipping() {
    let mut ctx = TestContext::new();
    ctx.buy(7, "Floor Pump AL", 1450);

    assert_eq!(ctx.page().text(Hook::Shipping), Some("500 \u{20bd}"));
    assert_eq!(ctx.page().text(Hook::Total), Some("1\u{a0}950 \u{20bd}"));
}

#[test]
fn delegated_controls_round_trip_through_the_rendered_markup() {
    let mut ctx = TestContext::new();
    ctx.buy(3, "Gravel King 700c", 64_990);

    // The rendered row carries the delegation attributes the page listener
    // would read back off the clicked control.
    let items = ctx.page().html(Hook::CartItems).unwrap();
    assert!(items.contains(r#"data-action="increment" data-id="3""#));

    ctx.dispatch(events::item_action(Some("increment"), Some("3")).unwrap());
    assert_eq!(ctx.controller.cart().items()[0].quantity, 2);

    ctx.dispatch(events::item_action(Some("remove"), Some("3")).unwrap());
    assert!(ctx.controller.cart().is_empty());
}

#[test]
fn unknown_id_operations_change_nothing() {
    let mut ctx = TestContext::new();
    ctx.buy(1, "Bike A", 3000);
    let before = ctx.stored_raw();

    ctx.dispatch(CartEvent::RemoveItem {
        id: ProductId::new(99),
    });
    ctx.dispatch(CartEvent::ChangeQuantity {
        id: ProductId::new(99),
        delta: -1,
    });

    assert_eq!(ctx.controller.cart().len(), 1);
    assert_eq!(ctx.stored_raw(), before);
    assert_eq!(ctx.page().text(Hook::CartCount), Some("1"));
}
