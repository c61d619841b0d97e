//! Markup rendering.
//!
//! The second half of the renderer: [`crate::view::CartView`] goes in, page
//! fragments come out. The item list is an Askama template; the badge and
//! summary regions are plain text and pass through as-is.

use askama::Template;

use crate::view::{CartItemView, CartView};

/// Modal item list fragment (rows, or the empty-cart block).
#[derive(Template)]
#[template(path = "cart_items.html")]
struct CartItemsTemplate<'a> {
    items: &'a [CartItemView],
}

/// Everything one render pass writes to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCart {
    /// Badge: item count.
    pub badge_count: String,
    /// Badge: running subtotal (optional element on the page).
    pub badge_subtotal: String,
    /// Modal item list markup.
    pub items_html: String,
    /// Modal summary: subtotal.
    pub subtotal: String,
    /// Modal summary: shipping label.
    pub shipping: String,
    /// Modal summary: total.
    pub total: String,
}

/// Render a view into page fragments.
///
/// # Errors
///
/// Returns `askama::Error` if the item list template fails to render.
pub fn render(view: &CartView) -> Result<RenderedCart, askama::Error> {
    let items_html = CartItemsTemplate { items: &view.items }.render()?;
    Ok(RenderedCart {
        badge_count: view.item_count.to_string(),
        badge_subtotal: view.subtotal.clone(),
        items_html,
        subtotal: view.subtotal.clone(),
        shipping: view.shipping.clone(),
        total: view.total.clone(),
    })
}
