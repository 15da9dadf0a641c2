use anyhow::Result;
use fb_kiosk::app::commands::{parse_command, Command};
use fb_kiosk::core::catalog::CsvCatalog;
use fb_kiosk::domain::ports::CatalogSource;
use fb_kiosk::{CartLine, CatalogQuery, Intent, ItemRecord, KioskController, SortOrder, View};
use tempfile::TempDir;

const ITEMS_CSV: &str = "\
name,category,tag
Apples,Fruit,Vegan
Wholemeal Bread,Bakery,Vegetarian
Chicken Curry,Prepared Meals,Halal
Rice,Pantry,
Milk,Dairy,Vegetarian
";

fn run(controller: &mut KioskController<CsvCatalog>, line: &str) -> fb_kiosk::Feedback {
    match parse_command(line) {
        Ok(Some(Command::Run(intent))) => controller.handle(intent),
        other => panic!("'{}' did not parse to an intent: {:?}", line, other),
    }
}

#[test]
fn test_browse_and_order_from_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("items.csv");
    std::fs::write(&path, ITEMS_CSV)?;

    let mut controller = KioskController::new(CsvCatalog::new(&path), 10);

    let feedback = run(&mut controller, "items diet=vegetarian sort=za");
    match feedback.view {
        View::Items(items) => {
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["Wholemeal Bread", "Milk"]);
        }
        other => panic!("expected items, got {:?}", other),
    }

    assert_eq!(run(&mut controller, "add 2 chicken curry").message, "Added.");
    assert_eq!(run(&mut controller, "add 12 Rice").message, "Added (capped at 10).");
    assert_eq!(run(&mut controller, "add 1 Rice").message, "Updated (capped at 10).");
    assert_eq!(run(&mut controller, "adjust 3 Rice").message, "Quantity updated.");
    assert_eq!(
        run(&mut controller, "adjust 30 Rice").message,
        "Quantity must be between 1 and 10."
    );

    let feedback = run(&mut controller, "cart");
    assert_eq!(
        feedback.view,
        View::Cart(vec![
            CartLine::new("Chicken Curry", 2),
            CartLine::new("Rice", 3),
        ])
    );

    let feedback = run(&mut controller, "submit");
    assert!(feedback.ok);
    assert!(matches!(feedback.view, View::Receipt(ref r) if r.total_units == 5));
    assert!(controller.cart().is_empty());
    assert_eq!(run(&mut controller, "submit").message, "Cart is empty!");

    Ok(())
}

#[test]
fn test_catalog_is_reloaded_on_every_browse() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("items.csv");
    std::fs::write(&path, "name,category,tag\nApples,Fruit,\n")?;

    let mut controller = KioskController::new(CsvCatalog::new(&path), 10);
    let query = CatalogQuery::new().sort(SortOrder::AToZ);

    let first = controller.handle(Intent::Browse(query.clone()));
    assert_eq!(first.view, View::Items(vec![ItemRecord::new("Apples", "Fruit", "")]));

    std::fs::write(&path, "name,category,tag\nApples,Fruit,\nBananas,Fruit,Vegan\n")?;
    let second = controller.handle(Intent::Browse(query));
    match second.view {
        View::Items(items) => assert_eq!(items.len(), 2),
        other => panic!("expected items, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_catalog_degrades_to_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog = CsvCatalog::new(temp_dir.path().join("missing.csv"));
    assert!(catalog.load().is_empty());

    let mut controller = KioskController::new(catalog, 10);
    let feedback = controller.handle(Intent::Browse(CatalogQuery::new()));
    assert!(feedback.ok);
    assert_eq!(feedback.message, "No items found.");

    let feedback = controller.handle(Intent::AddItem {
        name: "Apples".to_string(),
        quantity: "1".to_string(),
    });
    assert!(!feedback.ok);
    assert!(controller.cart().is_empty());
    Ok(())
}

#[test]
fn test_cart_survives_catalog_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("items.csv");
    std::fs::write(&path, ITEMS_CSV)?;

    let mut controller = KioskController::new(CsvCatalog::new(&path), 10);
    assert!(run(&mut controller, "add 4 Milk").ok);

    std::fs::remove_file(&path)?;
    let feedback = run(&mut controller, "items");
    assert_eq!(feedback.message, "No items found.");
    assert_eq!(controller.cart().to_list(), vec![CartLine::new("Milk", 4)]);
    Ok(())
}
