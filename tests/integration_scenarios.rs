use std::io::Cursor;

use pasticceria::shop;

/// Runs the simulator against `input` and returns its captured stdout as a
/// vector of lines.
fn run_scenario(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    shop::run(Cursor::new(input.as_bytes()), &mut out).expect("scenario should run cleanly");
    String::from_utf8(out)
        .expect("output is valid utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn s2_dispatch_orders_heavier_order_first() {
    let input = "\
10 1000
aggiungi_ricetta a farina 30
aggiungi_ricetta b farina 50
rifornimento farina 100000 1000
ordine a 1
ordine b 1
";
    let lines = run_scenario(input);
    let shipment_position = |needle: &str| lines.iter().position(|l| l == needle);
    let pos_a = shipment_position("3 a 1").expect("order a in shipment");
    let pos_b = shipment_position("4 b 1").expect("order b in shipment");
    assert!(pos_b < pos_a, "heavier order b must print before lighter order a");
}

#[test]
fn s3_capacity_boundary_third_order_not_substituted() {
    let input = "\
10 80
aggiungi_ricetta torta farina 40
rifornimento farina 100000 1000
ordine torta 1
ordine torta 1
ordine torta 1
";
    let lines = run_scenario(input);
    let shipped: Vec<&String> = lines.iter().filter(|l| l.contains(" torta ")).collect();
    assert_eq!(shipped.len(), 2, "only the first two orders fit capacity 80");
}

#[test]
fn s4_fefo_consumes_earliest_expiring_lot_first() {
    let input = "\
10 1000
aggiungi_ricetta torta farina 12
rifornimento farina 10 5 farina 10 9
ordine torta 1
";
    let lines = run_scenario(input);
    assert_eq!(lines[0], "aggiunta");
    assert_eq!(lines[1], "rifornito");
    assert_eq!(lines[2], "accettato");
}

#[test]
fn s5_lazy_expiration_hides_dead_lot_from_a_later_order() {
    // The lot (qty 10, expiration 5) is delivered at tick 1 and never
    // consumed before it dies. By the time `ordine torta 1` arrives at
    // tick 5 the lot is dead, so the order must wait forever and never
    // appears in a shipment, even though it physically still sits in the
    // warehouse's vector until the next traversal purges it.
    let input = "\
1 1000
aggiungi_ricetta torta farina 10
rifornimento farina 10 5
aggiungi_ricetta dummy1 farina 1
aggiungi_ricetta dummy2 farina 1
aggiungi_ricetta dummy3 farina 1
ordine torta 1
";
    let lines = run_scenario(input);
    assert_eq!(lines.last().unwrap(), "accettato");
    assert!(!lines.iter().any(|l| l.contains(" torta ")));
}

#[test]
fn s6_promotion_places_order_at_its_original_arrival_position() {
    let input = "\
10 1000
aggiungi_ricetta torta zucchero 1
ordine torta 1
ordine altra 1
rifornimento zucchero 1000 100
";
    let lines = run_scenario(input);
    assert_eq!(lines[1], "accettato");
    assert_eq!(lines[3], "rifornito");
}

#[test]
fn removing_a_recipe_with_no_outstanding_orders_succeeds() {
    let input = "\
10 1000
aggiungi_ricetta torta farina 1
rimuovi_ricetta torta
";
    let lines = run_scenario(input);
    assert_eq!(lines, vec!["aggiunta".to_string(), "rimossa".to_string()]);
}
