// Console demo that walks the sponsorship store through a season workflow.
use chrono::{Duration, Local};
use sideline::config::DashboardConfig;
use sideline::import::import_sponsors_csv;
use sideline::model::{Booking, Offering, OfferingKind, OfferingVariant, Sponsor};
use sideline::observability::init_logging;
use sideline::store::SponsorshipStore;
use sideline::store::memory::InMemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    init_logging();
    let config = DashboardConfig::from_env_or_yaml().expect("dashboard config");

    // Keep the demo output readable and step-by-step.
    println!("== Sideline Demo ==");
    println!("Goal: walk the sponsorship store through a match-season workflow.");
    println!("Step 1/6: starting the in-memory store.");
    let store: Arc<dyn SponsorshipStore> = if config.seed_demo_data {
        Arc::new(InMemoryStore::with_seed_data())
    } else {
        Arc::new(InMemoryStore::new())
    };
    let sponsors = store.list_sponsors().await.expect("sponsors");
    let offerings = store.list_offerings().await.expect("offerings");
    let games = store.list_games().await.expect("games");
    println!(
        "Loaded {} sponsors, {} offerings, {} scheduled games.",
        sponsors.len(),
        offerings.len(),
        games.len()
    );

    println!("Step 2/6: quick-adding a sponsor, then importing two more from CSV.");
    let sponsor = store
        .add_sponsor(Sponsor::quick_add("Gurten Brauerei"))
        .await
        .expect("sponsor");
    println!(
        "New sponsor '{}' filed under '{}'.",
        sponsor.name, sponsor.category
    );
    let csv = "name,industry,category,accountManager\n\
               Bärn Energie,Energy,Silver,Nora Wyss\n\
               Aare Sports,Retail,,Jan Frei\n";
    let imported = import_sponsors_csv(store.as_ref(), csv, config.max_import_rows)
        .await
        .expect("csv import");
    println!("CSV import applied {imported} rows.");

    println!("Step 3/6: publishing an LED board offering with two variants.");
    let offering = store
        .add_offering(Offering {
            id: String::new(),
            name: "LED Board Nordkurve".to_string(),
            description: "Rotating LED board slot on the north stand".to_string(),
            kind: OfferingKind::Digital,
            category: "Gold".to_string(),
            variants: vec![
                OfferingVariant {
                    id: "led-a".to_string(),
                    name: Some("Full Season".to_string()),
                    description: None,
                    is_available: true,
                },
                OfferingVariant {
                    id: "led-b".to_string(),
                    name: Some("Half Season".to_string()),
                    description: None,
                    is_available: true,
                },
            ],
            total_quantity: 0,
        })
        .await
        .expect("offering");
    println!(
        "'{}' derived total quantity {} from its variants.",
        offering.name, offering.total_quantity
    );

    println!("Step 4/6: booking the offering over a range spanning today.");
    let today = Local::now().date_naive();
    let mut request = Booking::request(
        &sponsor.id,
        &offering.id,
        today - Duration::days(3),
        today + Duration::days(30),
    );
    request.variant_id = Some("led-a".to_string());
    let booking = store.add_booking(request).await.expect("booking");
    println!(
        "Booked '{}' for '{}' (active today: {}).",
        booking.offering_name, booking.sponsor_name, booking.is_active
    );

    println!("Step 5/6: renaming the Gold category to Platinum.");
    store
        .update_category("Gold", "Platinum")
        .await
        .expect("rename category");
    let platinum = store
        .list_sponsors()
        .await
        .expect("sponsors")
        .iter()
        .filter(|s| s.category == "Platinum")
        .count();
    let offering_label = store
        .get_offering(&offering.id)
        .await
        .expect("offering")
        .category;
    println!(
        "{platinum} sponsors follow the rename; the offering keeps its '{offering_label}' label."
    );

    println!("Step 6/6: deleting the sponsor to show the booking cascade.");
    store.delete_sponsor(&sponsor.id).await.expect("delete");
    let remaining = store.list_bookings().await.expect("bookings").len();
    println!(
        "Deleted '{}'; {} bookings remain after the cascade.",
        sponsor.name, remaining
    );
    println!("Demo complete.");
}
