//! Demonstrates the "Show Menu" flow:
//! 1) Retrieve the test restaurant's menu
//! 2) Pretty-print the menu hierarchy with localized titles and prices

use tracing_subscriber::EnvFilter;

use vesta_client::client::VestaClient;
use vesta_client::config::ClientConfig;
use vesta_core::menu::{MenuIndex, MenuSection};
use vesta_core::types::localize;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let restaurant_id = "the-testaurant";
    let client = VestaClient::new(ClientConfig::default())?;

    print!("Retrieving menu...");
    let full = client.retrieve_restaurant_info(restaurant_id).await?;
    println!(
        " done (sections: {}, items: {}, currency: {}).",
        full.menu.sections.len(),
        full.menu.items.len(),
        full.restaurant.currency
    );

    let locale = "en_US";
    let fallback = &full.restaurant.locale;
    let index = MenuIndex::new(&full.menu);

    for section in &full.menu.sections {
        println!();
        println!("{}", localize(&section.title, locale, fallback));
        print_section(section, &index, locale, fallback, 1);
    }

    Ok(())
}

fn print_section(
    section: &MenuSection,
    index: &MenuIndex<'_>,
    locale: &str,
    fallback: &str,
    depth: usize,
) {
    let indent = "\t".repeat(depth);

    for child in &section.children {
        println!("{indent}{}", localize(&child.title, locale, fallback));
        print_section(child, index, locale, fallback, depth + 1);
    }

    for item_id in &section.item_ids {
        let Some(item) = index.get(item_id) else {
            continue;
        };

        print!("{indent}{}", localize(&item.title, locale, fallback));
        if !item.price.is_zero() {
            print!(" [{}]", item.price);
        }
        println!();

        for variation in &item.variations {
            println!(
                "{indent}\t{} [min: {}, max: {}]",
                localize(&variation.title, locale, fallback),
                variation.min_num_allowed,
                variation.max_num_allowed
            );

            for choice_id in &variation.item_ids {
                let Some(choice) = index.get(choice_id) else {
                    continue;
                };
                let extra = variation.choice_price(choice_id);
                print!("{indent}\t\t{}", localize(&choice.title, locale, fallback));
                if !extra.is_zero() {
                    print!(" [+{extra}]");
                }
                println!();
            }
        }
    }
}
