use std::io::{self, Write};

use crate::cart::CartStore;
use crate::catalog::{self, CatalogState};
use crate::utils::{clip, format_price};


// Move cursor to top-left and clear screen
fn clear_screen() {
    print!("\x1B[H\x1B[0J");
}

pub fn render_loading() {
    clear_screen();
    println!("Chai-Fi\n");
    println!("Loading menu...");
    let _ = io::stdout().flush();
}

pub fn render_unavailable() {
    clear_screen();
    println!("Chai-Fi\n");
    println!("Menu is unavailable right now. Please try again.");
    let _ = io::stdout().flush();
}

// Full-size surface: category tabs, item grid with quantity controls,
// cart badge and the checkout hint. Reads the store, never mutates it.
pub fn render_menu(state: &CatalogState, selected: &str, cart: &CartStore) {
    match state {
        CatalogState::Loading => return render_loading(),
        CatalogState::Unavailable => return render_unavailable(),
        CatalogState::Ready(_) => {}
    }
    let items = state.items();

    clear_screen();
    let count = cart.total_count();
    if count > 0 {
        println!("Menu{:>40}", format!("Cart [{count}]"));
    } else {
        println!("Menu");
    }
    println!("Select items to add to your order\n");

    let tabs: Vec<String> = catalog::categories(items)
        .into_iter()
        .map(|c| {
            if c == selected {
                format!("[{c}]")
            } else {
                c
            }
        })
        .collect();
    println!("{}\n", tabs.join("  "));

    let filtered = catalog::filtered_items(items, selected);
    if filtered.is_empty() {
        println!("No items found in this category.");
    } else {
        println!("{:<14} | {:>5} | {:>3} | description", "item", "price", "qty");
        println!("{:-<14}-|-{:->5}-|-{:->3}-|------------", "", "", "");
        for item in filtered {
            println!(
                "{:<14} | {:>5} | {:>3} | {}",
                clip(&item.name, 14),
                format_price(item.price),
                cart.quantity_of(&item.id),
                clip(&item.description, 40),
            );
        }
    }

    if count == 0 {
        println!("\n[checkout disabled: cart is empty]");
    } else {
        println!("\n[checkout: {count} items, {}]", format_price(cart.total_price()));
    }
    let _ = io::stdout().flush();
}

// Compact slide-out surface. Same store reads as the full grid; the
// mutation logic lives only in CartStore.
pub fn render_cart_panel(cart: &CartStore) {
    println!("\n--- Cart ---");
    if cart.is_empty() {
        println!("(empty)");
    } else {
        for line in cart.lines() {
            println!(
                "{:<14} x{:<2} {:>6}",
                clip(&line.name, 14),
                line.quantity,
                format_price(line.amount()),
            );
        }
        println!("{:<18} {:>6}", "total", format_price(cart.total_price()));
    }
    let _ = io::stdout().flush();
}
