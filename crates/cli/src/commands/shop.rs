//! Interactive shop session.
//!
//! Stands in for the shop page: a built-in catalog of product cards, a
//! terminal page adapter, and a file-backed store so the cart survives
//! between runs the way browser storage does. Every command maps to the
//! same `CartEvent` a page click would produce.

use std::error::Error;
use std::io::{self, BufRead, Write as _};
use std::path::Path;

use velomir_cart::catalog::ProductCard;
use velomir_cart::config::WidgetConfig;
use velomir_cart::controller::CartController;
use velomir_cart::events::{self, CartEvent, actions};
use velomir_cart::page::{Hook, MemoryPage, PageDom};
use velomir_cart::storage::FileStore;
use velomir_core::{Currency, Money, ProductId};

/// Terminal stand-in for the shop page.
///
/// Records region writes like a headless document and surfaces blocking
/// notices immediately, the way the page's alert would.
#[derive(Debug, Default)]
struct TerminalPage {
    regions: MemoryPage,
}

impl PageDom for TerminalPage {
    fn set_text(&mut self, hook: Hook, text: &str) {
        self.regions.set_text(hook, text);
    }

    fn set_html(&mut self, hook: Hook, html: &str) {
        self.regions.set_html(hook, html);
    }

    fn set_class(&mut self, hook: Hook, class: &str, enabled: bool) {
        self.regions.set_class(hook, class, enabled);
    }

    fn show_notice(&mut self, message: &str) {
        self.regions.show_notice(message);
        println!();
        println!("------------------------------------------");
        println!("{message}");
        println!("------------------------------------------");
    }
}

/// The product cards the shop page declares.
fn catalog() -> Vec<ProductCard> {
    vec![
        ProductCard::new(ProductId::new(1), "Forward Apache 27.5", Money::new(28_900)),
        ProductCard::new(ProductId::new(2), "Stels Navigator 500", Money::new(21_400)),
        ProductCard::new(ProductId::new(3), "Gravel King 700c", Money::new(64_990)),
        ProductCard::new(ProductId::new(4), "City Cruiser Step-Thru", Money::new(18_750)),
        ProductCard::new(ProductId::new(5), "Kids Balance Bike", Money::new(4_990)),
        ProductCard::new(ProductId::new(6), "Helmet Aero S", Money::new(3_200)),
        ProductCard::new(ProductId::new(7), "Floor Pump AL", Money::new(1_450)),
        ProductCard::new(ProductId::new(8), "LED Light Set", Money::new(890)),
    ]
}

const HELP: &str = "\
commands:
  catalog            list the shop's products
  add <n>            buy button on catalog entry n
  cart               show the cart modal regions
  + <id>             increment quantity of cart item <id>
  - <id>             decrement quantity of cart item <id>
  rm <id>            remove cart item <id>
  open | close       open / close the cart modal
  continue           'continue shopping' control
  scrim              click the modal background
  checkout           place the order
  quit               leave the shop";

/// Run the interactive session.
pub fn run(store_path: &Path) -> Result<(), Box<dyn Error>> {
    let store = FileStore::new(store_path);
    let mut controller =
        CartController::new(WidgetConfig::default(), store, TerminalPage::default())?;
    let cards = catalog();
    let currency = Currency::default();

    println!("Velomir shop - type 'help' for commands");
    print_badge(&controller);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("velomir> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let arg = parts.next();

        match command {
            "help" => println!("{HELP}"),
            "catalog" => {
                for (i, card) in cards.iter().enumerate() {
                    println!(
                        "  {}. [id {}] {} - {}",
                        i + 1,
                        card.id,
                        card.name,
                        currency.format(card.unit_price)
                    );
                }
            }
            "add" => match arg.and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if (1..=cards.len()).contains(&n) => {
                    if let Some(card) = cards.get(n - 1) {
                        controller.dispatch(CartEvent::add(card))?;
                        print_badge(&controller);
                    }
                }
                _ => println!("no such catalog entry (1-{})", cards.len()),
            },
            "+" | "-" | "rm" => {
                let action = match command {
                    "+" => actions::INCREMENT,
                    "-" => actions::DECREMENT,
                    _ => actions::REMOVE,
                };
                match events::item_action(Some(action), arg) {
                    Ok(event) => {
                        controller.dispatch(event)?;
                        print_badge(&controller);
                    }
                    Err(e) => println!("{e}"),
                }
            }
            "cart" => print_cart(&controller),
            "open" => {
                controller.dispatch(CartEvent::OpenCart)?;
                print_cart(&controller);
            }
            "close" => controller.dispatch(CartEvent::CloseCart)?,
            "continue" => controller.dispatch(CartEvent::ContinueShopping)?,
            "scrim" => controller.dispatch(CartEvent::ScrimClick)?,
            "checkout" => {
                controller.dispatch(CartEvent::Checkout)?;
                print_badge(&controller);
            }
            "quit" | "exit" => break,
            other => println!("unknown command {other:?} - try 'help'"),
        }
    }
    Ok(())
}

fn print_badge(controller: &CartController<FileStore, TerminalPage>) {
    let regions = &controller.page().regions;
    println!(
        "cart badge: {} item(s), {}",
        regions.text(Hook::CartCount).unwrap_or("0"),
        regions.text(Hook::BadgeSubtotal).unwrap_or("-"),
    );
}

fn print_cart(controller: &CartController<FileStore, TerminalPage>) {
    let regions = &controller.page().regions;
    println!("modal: {:?}", controller.modal());
    if controller.cart().is_empty() {
        println!("  (your cart is empty)");
    } else {
        for item in controller.cart().items() {
            println!(
                "  [id {}] {} x{} - {}",
                item.id,
                item.name,
                item.quantity,
                Currency::default().format(item.unit_price)
            );
        }
    }
    println!("  subtotal: {}", regions.text(Hook::Subtotal).unwrap_or("-"));
    println!("  shipping: {}", regions.text(Hook::Shipping).unwrap_or("-"));
    println!("  total:    {}", regions.text(Hook::Total).unwrap_or("-"));
}
