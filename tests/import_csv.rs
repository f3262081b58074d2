use sideline::import::{ImportError, REQUIRED_COLUMNS, import_sponsors_csv};
use sideline::model::UNCATEGORIZED;
use sideline::store::SponsorshipStore;
use sideline::store::memory::InMemoryStore;

#[tokio::test]
async fn well_formed_rows_become_sponsors_in_order() {
    let store = InMemoryStore::new();
    let csv = "name,industry,category,accountManager\n\
               Bärn Energie,Energy,Silver,Nora Wyss\n\
               Aare Sports,Retail,Bronze,Jan Frei\n\
               Gurten Brauerei,Food & Beverage,Gold,Res Moser\n";

    let imported = import_sponsors_csv(&store, csv, 1000).await.expect("import");
    assert_eq!(imported, 3);

    let sponsors = store.list_sponsors().await.expect("list");
    assert_eq!(sponsors.len(), 3);
    assert_eq!(sponsors[0].name, "Bärn Energie");
    assert_eq!(sponsors[0].industry, "Energy");
    assert_eq!(sponsors[0].category, "Silver");
    assert_eq!(sponsors[0].account_manager, "Nora Wyss");
    assert_eq!(sponsors[2].name, "Gurten Brauerei");

    // Imported rows get store-minted ids and placeholder branding.
    assert!(sponsors.iter().all(|s| !s.id.is_empty()));
    assert_ne!(sponsors[0].id, sponsors[1].id);
    assert!(sponsors.iter().all(|s| s.logo == "/placeholder.svg"));
    assert!(sponsors.iter().all(|s| s.contact.email.is_empty()));
}

#[tokio::test]
async fn missing_columns_are_named_in_the_error() {
    let store = InMemoryStore::new();
    let err = import_sponsors_csv(&store, "name,industry\nValiant,Banking\n", 1000)
        .await
        .expect_err("missing columns");
    match err {
        ImportError::MissingColumns(missing) => {
            assert_eq!(missing, vec!["category", "accountManager"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.list_sponsors().await.expect("list").is_empty());
}

#[tokio::test]
async fn column_order_is_free_and_extras_are_ignored() {
    let store = InMemoryStore::new();
    let csv = "accountManager,phone,category,name,industry\n\
               Nora Wyss,031 555 00 11,Silver,Bärn Energie,Energy\n";

    let imported = import_sponsors_csv(&store, csv, 1000).await.expect("import");
    assert_eq!(imported, 1);

    let sponsors = store.list_sponsors().await.expect("list");
    assert_eq!(sponsors[0].name, "Bärn Energie");
    assert_eq!(sponsors[0].account_manager, "Nora Wyss");
    assert_eq!(sponsors[0].category, "Silver");
}

#[tokio::test]
async fn blank_lines_and_cell_padding_are_tolerated() {
    let store = InMemoryStore::new();
    let csv = "name , industry , category , accountManager\n\
               \n\
                 Valiant , Banking , Gold , Sarah Müller  \n\
               \r\n\
               Migros,Retail,Gold,Peter Zürcher\n";

    let imported = import_sponsors_csv(&store, csv, 1000).await.expect("import");
    assert_eq!(imported, 2);

    let sponsors = store.list_sponsors().await.expect("list");
    assert_eq!(sponsors[0].name, "Valiant");
    assert_eq!(sponsors[0].account_manager, "Sarah Müller");
    assert_eq!(sponsors[1].name, "Migros");
}

#[tokio::test]
async fn empty_category_cell_falls_back_to_uncategorized() {
    let store = InMemoryStore::new();
    let csv = "name,industry,category,accountManager\n\
               Aare Sports,Retail,,Jan Frei\n\
               Gurten Brauerei\n";

    let imported = import_sponsors_csv(&store, csv, 1000).await.expect("import");
    assert_eq!(imported, 2);

    let sponsors = store.list_sponsors().await.expect("list");
    assert_eq!(sponsors[0].category, UNCATEGORIZED);
    // A short row leaves its trailing cells empty; only the category falls
    // back to a label.
    assert_eq!(sponsors[1].name, "Gurten Brauerei");
    assert_eq!(sponsors[1].industry, "");
    assert_eq!(sponsors[1].category, UNCATEGORIZED);
    assert_eq!(sponsors[1].account_manager, "");
}

#[tokio::test]
async fn empty_and_whitespace_input_is_rejected() {
    let store = InMemoryStore::new();

    let err = import_sponsors_csv(&store, "", 1000).await.expect_err("empty");
    assert!(matches!(err, ImportError::EmptyInput));

    let err = import_sponsors_csv(&store, "  \n\t\n", 1000)
        .await
        .expect_err("whitespace");
    assert!(matches!(err, ImportError::EmptyInput));
}

#[tokio::test]
async fn header_only_input_imports_nothing() {
    let store = InMemoryStore::new();
    let header = REQUIRED_COLUMNS.join(",");

    let imported = import_sponsors_csv(&store, &header, 1000)
        .await
        .expect("header only");
    assert_eq!(imported, 0);
    assert!(store.list_sponsors().await.expect("list").is_empty());
}

#[tokio::test]
async fn row_limit_rejects_oversized_imports_before_any_write() {
    let store = InMemoryStore::new();
    let csv = "name,industry,category,accountManager\n\
               One,,Gold,\n\
               Two,,Gold,\n\
               Three,,Gold,\n";

    let err = import_sponsors_csv(&store, csv, 2).await.expect_err("limit");
    assert!(matches!(err, ImportError::TooManyRows { rows: 3, limit: 2 }));
    assert!(store.list_sponsors().await.expect("list").is_empty());
}
