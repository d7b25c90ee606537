use calorias_rs::catalog::{describe_total, total_calories, CalorieCatalog};

#[test]
fn test_filter_high_predicate() {
    let catalog = CalorieCatalog::reference();
    for entry in catalog.filter_high() {
        assert!(entry.calories > 500, "{} is not high calorie", entry.name);
    }
}

#[test]
fn test_filter_low_predicate() {
    let catalog = CalorieCatalog::reference();
    for entry in catalog.filter_low() {
        assert!(entry.calories <= 500, "{} is not low calorie", entry.name);
    }
}

#[test]
fn test_reference_totals() {
    let catalog = CalorieCatalog::reference();

    assert_eq!(total_calories(&catalog.all()), 2850);
    assert_eq!(total_calories(&catalog.filter_high()), 2100);
    assert_eq!(total_calories(&catalog.filter_low()), 750);
}

#[test]
fn test_high_and_low_totals_sum_to_all() {
    let catalog = CalorieCatalog::reference();

    let high = total_calories(&catalog.filter_high());
    let low = total_calories(&catalog.filter_low());
    assert_eq!(high + low, total_calories(&catalog.all()));
}

#[test]
fn test_describe_total_reference_sentence() {
    let catalog = CalorieCatalog::reference();

    assert_eq!(
        describe_total(&catalog.all(), "todos los productos"),
        "Total de calorías en todos los productos: 2850 calorías."
    );
    assert_eq!(
        describe_total(&catalog.filter_high(), "productos altos en calorías"),
        "Total de calorías en productos altos en calorías: 2100 calorías."
    );
    assert_eq!(
        describe_total(&catalog.filter_low(), "productos bajos en calorías"),
        "Total de calorías en productos bajos en calorías: 750 calorías."
    );
}

#[test]
fn test_empty_subset_total_and_sentence() {
    assert_eq!(total_calories(&[]), 0);
    assert_eq!(
        describe_total(&[], "x"),
        "Total de calorías en x: 0 calorías."
    );
}

#[test]
fn test_filters_preserve_catalog_order() {
    let catalog = CalorieCatalog::reference();

    let high: Vec<&str> = catalog
        .filter_high()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(high, vec!["Pizza", "Hamburguesa", "Pasta"]);

    let low: Vec<&str> = catalog
        .filter_low()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(low, vec!["Ensalada", "Manzana", "Helado", "Yogurt"]);
}
