mod cart;
mod catalog;
mod checkout;
mod display;
mod menu;
mod model;
mod session;
mod utils;

use std::time::Duration;

use catalog::CatalogState;
use session::Session;


#[tokio::main]
async fn main() {
    // The menu fetch is the only async boundary; the screen shows the
    // loading state until it resolves. A panicked fetch task becomes
    // the unavailable screen instead of taking the session down.
    let fetch = tokio::spawn(menu::fetch_menu());
    display::render_loading();
    let state = match fetch.await {
        Ok(items) => CatalogState::Ready(items),
        Err(_) => CatalogState::Unavailable,
    };

    let mut session = Session::new(state);
    display::render_menu(&session.catalog, &session.selected, &session.cart);

    // Replay a scripted customer, redrawing both surfaces per gesture
    for action in session::generate_actions(&session.catalog, 25, 42) {
        session.apply(&action);
        display::render_menu(&session.catalog, &session.selected, &session.cart);
        display::render_cart_panel(&session.cart);
        tokio::time::sleep(Duration::from_millis(150)).await;
    }

    match checkout::checkout(&session.cart) {
        Some(snapshot) => match snapshot.to_json() {
            Ok(json) => {
                println!("\nProceeding to payment with {} items:", snapshot.total_count());
                println!("{json}");
            }
            Err(err) => eprintln!("\nCould not hand the cart off: {err}"),
        },
        None => println!("\nCart is empty; checkout stays disabled."),
    }
}
