//! Initial dashboard snapshot.
//!
//! # Purpose
//! The fixed data the store starts from: the sponsor roster, the offering
//! catalog, the category preset, and the game schedule. Bookings always start
//! empty. Sponsor ids are minted per process start; offering and schedule ids
//! are stable short strings so seeded entries can be referenced directly.
use crate::model::{
    Address, Contact, Game, Offering, OfferingKind, OfferingVariant, PLACEHOLDER_LOGO, Sponsor,
};
use chrono::NaiveDate;
use uuid::Uuid;

pub fn initial_categories() -> Vec<String> {
    vec!["Gold".to_string(), "Silver".to_string(), "Bronze".to_string()]
}

#[allow(clippy::too_many_arguments)]
fn sponsor(
    name: &str,
    industry: &str,
    category: &str,
    manager: &str,
    role: &str,
    email: &str,
    street: &str,
    number: &str,
    zip: &str,
    city: &str,
) -> Sponsor {
    let address = Address {
        street: street.to_string(),
        number: number.to_string(),
        zip: zip.to_string(),
        city: city.to_string(),
        country: "Switzerland".to_string(),
    };
    Sponsor {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        logo: PLACEHOLDER_LOGO.to_string(),
        industry: industry.to_string(),
        category: category.to_string(),
        account_manager: manager.to_string(),
        // Seeded sponsors list their account manager as the contact person.
        contact: Contact {
            name: manager.to_string(),
            role: role.to_string(),
            email: email.to_string(),
        },
        billing_address: address.clone(),
        address,
        files: Vec::new(),
    }
}

pub fn initial_sponsors() -> Vec<Sponsor> {
    vec![
        sponsor(
            "HRS",
            "Construction",
            "Gold",
            "Robert Huber",
            "Head of Sales",
            "r.huber@hrs.ch",
            "Walchestrasse",
            "15",
            "8006",
            "Zürich",
        ),
        sponsor(
            "Mobiliar",
            "Insurance",
            "Gold",
            "Markus Hofstetter",
            "Head of Sponsoring",
            "markus.hofstetter@mobiliar.ch",
            "Bundesgasse",
            "35",
            "3001",
            "Bern",
        ),
        sponsor(
            "Bystronic",
            "Manufacturing",
            "Silver",
            "Stefanie Meier",
            "Marketing Manager",
            "stefanie.meier@bystronic.com",
            "Industriestrasse",
            "21",
            "3362",
            "Niederönz",
        ),
        sponsor(
            "Zaugg",
            "Construction",
            "Silver",
            "Thomas Zaugg",
            "CEO",
            "thomas.zaugg@zaugg-ag.ch",
            "Holzmattstrasse",
            "3",
            "3436",
            "Zollbrück",
        ),
        sponsor(
            "Valiant",
            "Banking",
            "Gold",
            "Sarah Müller",
            "Sponsoring Manager",
            "sarah.mueller@valiant.ch",
            "Bundesplatz",
            "4",
            "3001",
            "Bern",
        ),
        sponsor(
            "Spörri Optik",
            "Retail",
            "Bronze",
            "Lisa Spörri",
            "Owner",
            "lisa.spoerri@spoerri-optik.ch",
            "Marktgasse",
            "17",
            "3011",
            "Bern",
        ),
        sponsor(
            "Migros",
            "Retail",
            "Gold",
            "Peter Zürcher",
            "Head of Partnerships",
            "peter.zuercher@migros.ch",
            "Limmatstrasse",
            "152",
            "8005",
            "Zürich",
        ),
        sponsor(
            "Swisscom",
            "Telecommunications",
            "Gold",
            "Anna Schmid",
            "Sponsoring Director",
            "anna.schmid@swisscom.com",
            "Alte Tiefenaustrasse",
            "6",
            "3050",
            "Bern",
        ),
        sponsor(
            "Emmi",
            "Food & Beverage",
            "Silver",
            "Michael Weber",
            "Marketing Director",
            "michael.weber@emmi.com",
            "Landenbergstrasse",
            "1",
            "6002",
            "Luzern",
        ),
        sponsor(
            "Rivella",
            "Food & Beverage",
            "Silver",
            "Sandra Keller",
            "Sponsoring Manager",
            "sandra.keller@rivella.ch",
            "Neue Industriestrasse",
            "10",
            "4852",
            "Rothrist",
        ),
        sponsor(
            "Swiss Precision Tools",
            "Manufacturing",
            "Silver",
            "Lukas Brunner",
            "Sales Director",
            "l.brunner@swisstools.ch",
            "Werkstrasse",
            "8",
            "8400",
            "Winterthur",
        ),
        sponsor(
            "Alpine Adventures",
            "Tourism",
            "Bronze",
            "Emma Roth",
            "Marketing Coordinator",
            "emma.roth@alpineadventures.ch",
            "Bergweg",
            "15",
            "3800",
            "Interlaken",
        ),
        sponsor(
            "SwissTech Innovations",
            "Technology",
            "Gold",
            "Daniel Meier",
            "Head of Partnerships",
            "d.meier@swisstech.ch",
            "Innovationsplatz",
            "1",
            "8005",
            "Zürich",
        ),
        sponsor(
            "Helvetia Timepieces",
            "Luxury Goods",
            "Gold",
            "Sophie Dubois",
            "Brand Manager",
            "s.dubois@helvetiatimepieces.ch",
            "Uhrenstrasse",
            "22",
            "2502",
            "Biel/Bienne",
        ),
        sponsor(
            "EcoAlps Energy",
            "Renewable Energy",
            "Silver",
            "Marco Rossi",
            "Business Development Manager",
            "m.rossi@ecoalps.ch",
            "Solarweg",
            "5",
            "6460",
            "Altdorf",
        ),
        sponsor(
            "Swiss Medtech Solutions",
            "Healthcare",
            "Gold",
            "Laura Schneider",
            "Head of Sales",
            "l.schneider@swissmedtech.ch",
            "Gesundheitsstrasse",
            "10",
            "4056",
            "Basel",
        ),
        sponsor(
            "Alpenblick Hotels",
            "Hospitality",
            "Silver",
            "Thomas Egger",
            "Marketing Director",
            "t.egger@alpenblickhotels.ch",
            "Panoramaweg",
            "3",
            "3920",
            "Zermatt",
        ),
        sponsor(
            "SwissFin Solutions",
            "Financial Services",
            "Gold",
            "Andrea Berger",
            "Client Relations Manager",
            "a.berger@swissfin.ch",
            "Bankstrasse",
            "18",
            "8001",
            "Zürich",
        ),
        sponsor(
            "Precision Pharma",
            "Pharmaceuticals",
            "Gold",
            "Markus Wenger",
            "Head of Corporate Partnerships",
            "m.wenger@precisionpharma.ch",
            "Forschungsplatz",
            "7",
            "4057",
            "Basel",
        ),
        sponsor(
            "Swiss Eco Packaging",
            "Packaging",
            "Bronze",
            "Nina Sutter",
            "Sustainability Manager",
            "n.sutter@swissecopack.ch",
            "Recyclingweg",
            "12",
            "5000",
            "Aarau",
        ),
        sponsor(
            "AlpineWear",
            "Sportswear",
            "Silver",
            "Stefan Keller",
            "Sports Marketing Manager",
            "s.keller@alpinewear.ch",
            "Sportweg",
            "9",
            "7260",
            "Davos",
        ),
        sponsor(
            "Swiss Data Secure",
            "Cybersecurity",
            "Gold",
            "Lena Zimmermann",
            "Partnership Director",
            "l.zimmermann@swissdatasecure.ch",
            "Sicherheitsstrasse",
            "20",
            "3014",
            "Bern",
        ),
        sponsor(
            "Helvetic Airways",
            "Aviation",
            "Gold",
            "Philippe Müller",
            "Head of Sponsorships",
            "p.mueller@helveticairways.ch",
            "Flughafenstrasse",
            "100",
            "8302",
            "Kloten",
        ),
        sponsor(
            "Swiss Gourmet Foods",
            "Food Production",
            "Silver",
            "Claudia Brunner",
            "Marketing Specialist",
            "c.brunner@swissgourmet.ch",
            "Feinschmeckerweg",
            "5",
            "6300",
            "Zug",
        ),
        sponsor(
            "EcoMobility Solutions",
            "Transportation",
            "Bronze",
            "David Gerber",
            "Business Development Manager",
            "d.gerber@ecomobility.ch",
            "Mobilitätsplatz",
            "3",
            "8400",
            "Winterthur",
        ),
        sponsor(
            "Swiss Precision Optics",
            "Optics",
            "Silver",
            "Sarah Wyss",
            "Sales Manager",
            "s.wyss@swissoptics.ch",
            "Optikstrasse",
            "11",
            "9000",
            "St. Gallen",
        ),
        sponsor(
            "AlpineBot Robotics",
            "Robotics",
            "Gold",
            "Michael Steiner",
            "Chief Partnership Officer",
            "m.steiner@alpinebot.ch",
            "Robotikweg",
            "7",
            "8952",
            "Schlieren",
        ),
        sponsor(
            "Swiss Green Construction",
            "Construction",
            "Bronze",
            "Martina Bianchi",
            "Sustainability Coordinator",
            "m.bianchi@swissgreen.ch",
            "Ökoweg",
            "14",
            "6003",
            "Luzern",
        ),
        sponsor(
            "Swiss Crypto Solutions",
            "Fintech",
            "Silver",
            "Adrian Keller",
            "Partnerships Lead",
            "a.keller@swisscrypto.ch",
            "Blockchainstrasse",
            "42",
            "6300",
            "Zug",
        ),
        sponsor(
            "Helvetic Hydro Systems",
            "Water Management",
            "Bronze",
            "Lukas Tanner",
            "Regional Sales Manager",
            "l.tanner@helvetichydro.ch",
            "Wasserweg",
            "8",
            "8200",
            "Schaffhausen",
        ),
    ]
}

fn variant(id: &str, name: &str, description: &str) -> OfferingVariant {
    OfferingVariant {
        id: id.to_string(),
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        is_available: true,
    }
}

pub fn initial_offerings() -> Vec<Offering> {
    let catalog = [
        (
            "1",
            "LED Perimeter Advertising",
            "Dynamic digital advertising on LED perimeter boards around the playing field. \
             High visibility during all home games and events.",
            OfferingKind::Digital,
            "Match Day",
            vec![
                variant(
                    "1a",
                    "Premium Package",
                    "10 minutes total display time per game, prime visibility during key game moments",
                ),
                variant("1b", "Standard Package", "5 minutes total display time per game"),
            ],
        ),
        (
            "2",
            "Jersey Sponsorship",
            "Premium placement of your brand on official team jerseys. Includes both home and \
             away kits with maximum visibility during games and media coverage.",
            OfferingKind::Physical,
            "Premium",
            vec![
                variant(
                    "2a",
                    "Front Center",
                    "Primary position on jersey front - maximum brand visibility",
                ),
                variant("2b", "Sleeve Position", "Logo placement on both sleeves"),
                variant("2c", "Back Position", "Logo placement below player number"),
            ],
        ),
        (
            "3",
            "VIP Match Day Experience",
            "Exclusive VIP hospitality package including premium seating, catering, and \
             networking opportunities with players and officials.",
            OfferingKind::Event,
            "Hospitality",
            vec![
                variant(
                    "3a",
                    "Season Package",
                    "VIP access for all home games with dedicated suite",
                ),
                variant("3b", "Single Match Package", "VIP experience for individual matches"),
            ],
        ),
    ];
    catalog
        .into_iter()
        .map(|(id, name, description, kind, category, variants)| Offering {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            kind,
            category: category.to_string(),
            total_quantity: variants.len() as u32,
            variants,
        })
        .collect()
}

fn game(
    id: &str,
    year: i32,
    month: u32,
    day: u32,
    league: &str,
    home_team: &str,
    away_team: &str,
    venue: &str,
) -> Game {
    Game {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date"),
        time: String::new(),
        league: league.to_string(),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        venue: venue.to_string(),
    }
}

pub fn initial_schedule() -> Vec<Game> {
    vec![
        game(
            "1",
            2025,
            1,
            12,
            "Nationalliga A",
            "BSV Bern",
            "Pfadi Winterthur",
            "Mobiliar Arena",
        ),
        game(
            "2",
            2025,
            1,
            19,
            "Nationalliga A",
            "HSC Suhr Aarau",
            "BSV Bern",
            "Schachenhalle",
        ),
        game(
            "3",
            2025,
            1,
            26,
            "Swiss Cup",
            "BSV Bern",
            "RTV 1879 Basel",
            "Mobiliar Arena",
        ),
        game(
            "4",
            2025,
            2,
            2,
            "European League",
            "BSV Bern",
            "Füchse Berlin",
            "Mobiliar Arena",
        ),
        game(
            "5",
            2025,
            2,
            9,
            "Nationalliga A",
            "Kadetten Schaffhausen",
            "BSV Bern",
            "BBC Arena",
        ),
        game(
            "6",
            2025,
            2,
            16,
            "Nationalliga A",
            "BSV Bern",
            "HC Kriens-Luzern",
            "Mobiliar Arena",
        ),
        game(
            "7",
            2025,
            2,
            23,
            "European League",
            "Sporting CP",
            "BSV Bern",
            "Pavilhão João Rocha",
        ),
    ]
}
