//! Demonstrates the "Submit Order" flow:
//! 1) Retrieve the test restaurant's menu
//! 2) Create an order with one simple item and one item with variations
//! 3) Submit the order
//! 4) Query the submitted order's status as its owner
//!
//! Run with `RUST_LOG=vesta_client=debug` to watch the dispatch layer.

use tracing_subscriber::EnvFilter;

use vesta_client::client::VestaClient;
use vesta_client::config::ClientConfig;
use vesta_core::builder::{OrderBuilder, OrderItemBuilder};
use vesta_core::menu::MenuIndex;
use vesta_core::money::Money;
use vesta_core::order::{platforms, Dispatch, Payment};
use vesta_core::pricing::items_total;
use vesta_core::types::Contact;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let restaurant_id = "the-testaurant";
    let client = VestaClient::new(ClientConfig::default())?;

    // 1. Retrieve menu
    print!("Retrieving menu...");
    let full = client.retrieve_restaurant_info(restaurant_id).await?;
    println!(" done (items: {}).", full.menu.items.len());

    // 2. Build order (in a real scenario, the customer makes these choices
    //    in the UI)
    let index = MenuIndex::new(&full.menu);

    let carpaccio = index.find_first("carpaccio").expect("no carpaccio today");
    let carpaccio_line = OrderItemBuilder::new(carpaccio)
        .comment("Extra cheese please")
        .build();

    let coke = index.find_first("coke").expect("no coke today");
    let size = coke.variations.first().expect("coke has no size variation");
    let small = index.require(size.item_ids.first().expect("empty size variation"))?;
    let coke_line = OrderItemBuilder::new(coke)
        .choice(0, OrderItemBuilder::as_choice(small, size).build())?
        .build();

    let items_price: Money = items_total(&[carpaccio_line.clone(), coke_line.clone()]);

    let order = OrderBuilder::new()
        .developer("org.example")
        .platform(platforms::WEB)
        .restaurant(&full.restaurant.id)
        .locale("en_US")
        .currency(&full.restaurant.currency)
        .contact(Contact {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            phone: Some("+12024561111".to_string()),
            email: Some("johndoe@example.org".to_string()),
        })
        .dispatch(Dispatch::Takeout {
            charge: Money::zero(),
        })
        .item(carpaccio_line)
        .item(coke_line)
        .comment("I'm allergic to nuts.")
        .payment(Payment::Cash {
            amount: items_price,
        })
        .build();

    // 3. Submit order
    print!("Submitting order ({} {})...", order.price, order.currency);
    let submitted = client.submit_order(None, order).await?;
    println!(
        " done (order ID: {:?}, status: {:?}, ownerToken: {:?}).",
        submitted.id, submitted.status, submitted.owner_token
    );

    // 4. Query order status
    print!("Retrieving order...");
    let retrieved = client
        .retrieve_order_as_owner(
            submitted.id.as_deref().unwrap_or_default(),
            submitted.owner_token.as_deref().unwrap_or_default(),
        )
        .await?;
    println!(" done (status: {:?}).", retrieved.status);

    Ok(())
}
