mod common;

use common::date;
use sideline::model::{Booking, OfferingKind};
use sideline::store::SponsorshipStore;
use sideline::store::memory::InMemoryStore;

#[tokio::test]
async fn seeded_store_carries_the_demo_dataset() {
    let store = InMemoryStore::with_seed_data();
    assert_eq!(store.list_sponsors().await.expect("sponsors").len(), 30);
    assert_eq!(store.list_offerings().await.expect("offerings").len(), 3);
    assert_eq!(store.list_games().await.expect("games").len(), 7);
    assert_eq!(
        store.list_categories().await.expect("categories"),
        vec!["Gold", "Silver", "Bronze"]
    );
    assert!(store.list_bookings().await.expect("bookings").is_empty());
}

#[tokio::test]
async fn seed_sponsors_are_fully_populated() {
    let store = InMemoryStore::with_seed_data();
    let sponsors = store.list_sponsors().await.expect("sponsors");
    let categories = store.list_categories().await.expect("categories");

    assert_eq!(sponsors[0].name, "HRS");
    assert_eq!(sponsors[0].category, "Gold");
    assert_eq!(sponsors[0].contact.role, "Head of Sales");

    for sponsor in &sponsors {
        assert!(!sponsor.id.is_empty());
        assert!(categories.contains(&sponsor.category));
        // The roster lists each account manager as the contact person.
        assert_eq!(sponsor.contact.name, sponsor.account_manager);
        assert_eq!(sponsor.billing_address, sponsor.address);
        assert_eq!(sponsor.address.country, "Switzerland");
        assert!(sponsor.files.is_empty());
    }

    // Seed ids are minted per process and must not collide.
    let mut ids: Vec<&str> = sponsors.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), sponsors.len());
}

#[tokio::test]
async fn seed_catalog_uses_stable_ids_and_derived_quantities() {
    let store = InMemoryStore::with_seed_data();
    let offerings = store.list_offerings().await.expect("offerings");
    let ids: Vec<&str> = offerings.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    let led = &offerings[0];
    assert_eq!(led.name, "LED Perimeter Advertising");
    assert_eq!(led.kind, OfferingKind::Digital);
    assert_eq!(led.category, "Match Day");
    assert_eq!(led.variants.len(), 2);
    assert!(led.variant("1a").is_some());

    let jersey = &offerings[1];
    assert_eq!(jersey.kind, OfferingKind::Physical);
    assert_eq!(jersey.variants.len(), 3);

    for offering in &offerings {
        assert_eq!(offering.total_quantity as usize, offering.variants.len());
        assert!(offering.variants.iter().all(|v| v.is_available));
    }
}

#[tokio::test]
async fn seed_schedule_covers_the_published_fixtures() {
    let store = InMemoryStore::with_seed_data();
    let games = store.list_games().await.expect("games");

    let opener = &games[0];
    assert_eq!(opener.date, date(2025, 1, 12));
    assert_eq!(opener.league, "Nationalliga A");
    assert_eq!(opener.home_team, "BSV Bern");
    assert_eq!(opener.away_team, "Pfadi Winterthur");
    assert_eq!(opener.venue, "Mobiliar Arena");

    let closer = games.last().expect("entry");
    assert_eq!(closer.date, date(2025, 2, 23));
    assert_eq!(closer.home_team, "Sporting CP");
    assert_eq!(closer.venue, "Pavilhão João Rocha");

    // Seeded fixtures predate the throw-off time field.
    assert!(games.iter().all(|g| g.time.is_empty()));
    assert_eq!(
        games.iter().filter(|g| g.league == "European League").count(),
        2
    );
}

#[tokio::test]
async fn wire_format_uses_the_dashboard_field_names() {
    let store = InMemoryStore::with_seed_data();

    let sponsors = store.list_sponsors().await.expect("sponsors");
    let value = serde_json::to_value(&sponsors[0]).expect("sponsor json");
    assert!(value.get("accountManager").is_some());
    assert!(value.get("billingAddress").is_some());
    assert!(value.get("account_manager").is_none());

    let offerings = store.list_offerings().await.expect("offerings");
    let value = serde_json::to_value(&offerings[0]).expect("offering json");
    assert_eq!(value["type"], "digital");
    assert_eq!(value["totalQuantity"], 2);
    assert_eq!(value["variants"][0]["isAvailable"], true);

    let games = store.list_games().await.expect("games");
    let value = serde_json::to_value(&games[0]).expect("game json");
    assert_eq!(value["homeTeam"], "BSV Bern");
    assert_eq!(value["date"], "2025-01-12");

    // Bookings omit the variant key entirely until one is chosen.
    let booking = Booking::request("s1", "o1", date(2025, 3, 1), date(2025, 3, 31));
    let value = serde_json::to_value(&booking).expect("booking json");
    assert!(value.get("sponsorId").is_some());
    assert_eq!(value["startDate"], "2025-03-01");
    assert!(value.get("variantId").is_none());
}
