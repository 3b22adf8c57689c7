//! Tests for the sort state machine.

use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, TestLogger};
use tableview::rows::RowStore;
use tableview::sort::{
    SortController, SortDirection, SortOrder, SortState, SortedColumn, SortingStatus, comparator,
};

const PRODUCER: usize = 0;
const NAME: usize = 1;
const POWER: usize = 2;
const PRICE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
struct Car {
    producer: &'static str,
    name: &'static str,
    power: u32,
}

fn car(producer: &'static str, power: u32) -> Car {
    Car {
        producer,
        name: "",
        power,
    }
}

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn producers(rows: &RowStore<Car>) -> Vec<&'static str> {
    rows.iter().map(|c| c.producer).collect()
}

fn controller() -> SortController<Car> {
    let mut controller = SortController::new();
    controller.set_comparator(
        PRODUCER,
        Some(comparator(|a: &Car, b: &Car| a.producer.cmp(b.producer))),
    );
    controller.set_comparator(
        POWER,
        Some(comparator(|a: &Car, b: &Car| a.power.cmp(&b.power))),
    );
    controller
}

fn cars() -> RowStore<Car> {
    RowStore::new(vec![car("Audi", 150), car("BMW", 230), car("Porsche", 230)])
}

// ============================================================================
// Activation Tests
// ============================================================================

#[test]
fn test_activate_sorts_ascending_keeping_ties() {
    init_logger();
    let mut controller = controller();
    let mut rows = cars();

    let sorted = controller.activate(POWER, &mut rows);

    assert_eq!(
        sorted,
        Some(SortedColumn {
            column: POWER,
            order: SortOrder::Ascending
        })
    );
    assert_eq!(producers(&rows), vec!["Audi", "BMW", "Porsche"]);
    assert_eq!(controller.header_state(POWER), SortState::SortedAscending);
}

#[test]
fn test_activate_twice_sorts_descending_keeping_ties() {
    let mut controller = controller();
    let mut rows = cars();

    controller.activate(POWER, &mut rows);
    controller.activate(POWER, &mut rows);

    assert_eq!(producers(&rows), vec!["BMW", "Porsche", "Audi"]);
    assert_eq!(controller.status().direction(), SortDirection::Descending);
    assert_eq!(controller.header_state(POWER), SortState::SortedDescending);
}

#[test]
fn test_activate_three_times_back_to_ascending() {
    let mut controller = controller();
    let mut rows = cars();

    for _ in 0..3 {
        controller.activate(POWER, &mut rows);
    }

    assert_eq!(controller.status().direction(), SortDirection::Ascending);
    assert_eq!(producers(&rows), vec!["Audi", "BMW", "Porsche"]);
}

#[test]
fn test_descending_reverses_equal_runs_as_blocks() {
    let mut controller = controller();
    let mut rows = RowStore::new(vec![
        car("A", 1),
        car("B", 2),
        car("C", 1),
        car("D", 2),
        car("E", 3),
    ]);

    controller.activate(POWER, &mut rows);
    assert_eq!(producers(&rows), vec!["A", "C", "B", "D", "E"]);

    controller.activate(POWER, &mut rows);
    assert_eq!(producers(&rows), vec!["E", "B", "D", "A", "C"]);
}

#[test]
fn test_activate_other_column_starts_ascending() {
    let mut controller = controller();
    let mut rows = cars();

    controller.activate(POWER, &mut rows);
    controller.activate(POWER, &mut rows);
    let sorted = controller.activate(PRODUCER, &mut rows);

    assert_eq!(sorted.map(|s| s.order), Some(SortOrder::Ascending));
    assert_eq!(controller.status().sorted_column_index(), PRODUCER as i32);
    assert_eq!(controller.header_state(PRODUCER), SortState::SortedAscending);
    assert_eq!(controller.header_state(POWER), SortState::Sortable);
    assert_eq!(producers(&rows), vec!["Audi", "BMW", "Porsche"]);
}

#[test]
fn test_activate_not_sortable_is_ignored() {
    init_logger();
    let mut controller = controller();
    let mut rows = RowStore::new(vec![car("Porsche", 230), car("Audi", 150)]);

    controller.activate(POWER, &mut rows);
    let before = producers(&rows);
    let status = controller.status();

    assert_eq!(controller.activate(PRICE, &mut rows), None);
    assert_eq!(producers(&rows), before);
    assert_eq!(controller.status(), status);
    assert_eq!(controller.header_state(PRICE), SortState::NotSortable);
}

// ============================================================================
// Explicit Sort Tests
// ============================================================================

#[test]
fn test_explicit_sort_is_idempotent() {
    let mut controller = controller();
    let mut once = RowStore::new(vec![car("C", 3), car("A", 1), car("B", 1)]);
    let mut twice = RowStore::new(vec![car("C", 3), car("A", 1), car("B", 1)]);

    controller.sort(POWER, SortOrder::Ascending, &mut once);
    let mut other = self::controller();
    other.sort(POWER, SortOrder::Ascending, &mut twice);
    other.sort(POWER, SortOrder::Ascending, &mut twice);

    assert_eq!(producers(&once), producers(&twice));
    assert_eq!(other.status().direction(), SortDirection::Ascending);
}

#[test]
fn test_explicit_sort_does_not_toggle() {
    let mut controller = controller();
    let mut rows = cars();

    controller.sort(POWER, SortOrder::Descending, &mut rows);
    controller.sort(POWER, SortOrder::Descending, &mut rows);

    assert_eq!(controller.status().direction(), SortDirection::Descending);
    assert_eq!(producers(&rows), vec!["BMW", "Porsche", "Audi"]);
}

#[test]
fn test_explicit_sort_then_activate_toggles_from_it() {
    let mut controller = controller();
    let mut rows = cars();

    controller.sort(POWER, SortOrder::Descending, &mut rows);
    controller.activate(POWER, &mut rows);

    assert_eq!(controller.status().direction(), SortDirection::Ascending);
}

#[test]
fn test_ad_hoc_sort_keeps_status() {
    let mut controller = controller();
    let mut rows = cars();

    let by_name_desc = comparator(|a: &Car, b: &Car| b.producer.cmp(a.producer));
    controller.sort_with(&by_name_desc, &mut rows);

    assert_eq!(producers(&rows), vec!["Porsche", "BMW", "Audi"]);
    assert_eq!(controller.status(), SortingStatus::unsorted());
    assert_eq!(controller.header_state(POWER), SortState::Sortable);
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_registry_tracks_sortable_columns() {
    let mut controller = controller();
    assert!(controller.is_sortable(POWER));
    assert!(!controller.is_sortable(NAME));
    assert_eq!(controller.registry().sortable_columns(), vec![PRODUCER, POWER]);
    assert_eq!(controller.header_state(PRODUCER), SortState::Sortable);

    controller.set_comparator(PRODUCER, None);
    assert!(!controller.is_sortable(PRODUCER));
    assert!(controller.comparator(PRODUCER).is_none());
    assert_eq!(controller.header_state(PRODUCER), SortState::NotSortable);
}

#[test]
fn test_raw_comparator_is_not_reversed() {
    let mut controller = controller();
    let mut rows = cars();
    controller.sort(POWER, SortOrder::Descending, &mut rows);

    let raw = controller.comparator(POWER).unwrap();
    assert_eq!(raw(&car("A", 1), &car("B", 2)), std::cmp::Ordering::Less);
}

#[test]
fn test_deregister_active_column_clears_sort_without_reorder() {
    let mut controller = controller();
    let mut rows = cars();
    controller.activate(POWER, &mut rows);
    controller.activate(POWER, &mut rows);
    let before = producers(&rows);

    controller.set_comparator(POWER, None);

    assert_eq!(controller.status().sorted_column_index(), -1);
    assert_eq!(controller.status().direction(), SortDirection::None);
    assert_eq!(controller.header_state(POWER), SortState::NotSortable);
    assert_eq!(producers(&rows), before);
    assert!(!controller.recap(&mut rows));
}

#[test]
fn test_deregister_other_column_keeps_sort() {
    let mut controller = controller();
    let mut rows = cars();
    controller.activate(POWER, &mut rows);

    controller.set_comparator(PRODUCER, None);

    assert_eq!(controller.status().sorted_column_index(), POWER as i32);
    assert_eq!(controller.header_state(POWER), SortState::SortedAscending);
}

#[test]
fn test_replacing_active_comparator_keeps_applied_sort() {
    let mut controller = controller();
    let mut rows = cars();
    controller.activate(POWER, &mut rows);

    controller.set_comparator(
        POWER,
        Some(comparator(|a: &Car, b: &Car| b.producer.cmp(a.producer))),
    );

    assert_eq!(controller.header_state(POWER), SortState::SortedAscending);
    assert!(controller.status().is_sorted());

    // recap still orders by power ascending
    let mut changed = RowStore::new(vec![car("A", 1), car("Z", 9), car("M", 5)]);
    assert!(controller.recap(&mut changed));
    assert_eq!(producers(&changed), vec!["A", "M", "Z"]);

    // the next explicit sort picks up the new comparator
    controller.sort(POWER, SortOrder::Ascending, &mut changed);
    assert_eq!(producers(&changed), vec!["Z", "M", "A"]);
}

// ============================================================================
// Recap Tests
// ============================================================================

#[test]
fn test_recap_matches_explicit_sort() {
    let mut controller = controller();
    let mut rows = cars();
    controller.activate(POWER, &mut rows);
    controller.activate(POWER, &mut rows);

    let new_data = vec![car("Kia", 90), car("Audi", 300), car("Fiat", 90), car("VW", 120)];
    let mut recapped = RowStore::new(new_data.clone());
    let mut expected = RowStore::new(new_data);

    assert!(controller.recap(&mut recapped));
    let mut reference = self::controller();
    reference.sort(POWER, SortOrder::Descending, &mut expected);

    assert_eq!(producers(&recapped), producers(&expected));
    assert_eq!(controller.status().direction(), SortDirection::Descending);
}

#[test]
fn test_recap_without_sort_does_nothing() {
    let controller = controller();
    let mut rows = RowStore::new(vec![car("Porsche", 230), car("Audi", 150)]);
    assert!(!controller.recap(&mut rows));
    assert_eq!(producers(&rows), vec!["Porsche", "Audi"]);
}

// ============================================================================
// Status Listener Tests
// ============================================================================

#[test]
fn test_status_listeners_see_every_change() {
    let mut controller = controller();
    let mut rows = cars();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.add_status_listener(Box::new(move |status: &SortingStatus| {
        sink.borrow_mut()
            .push((status.sorted_column_index(), status.direction()));
    }));

    controller.activate(POWER, &mut rows);
    controller.activate(POWER, &mut rows);
    controller.activate(PRICE, &mut rows);
    controller.set_comparator(POWER, None);

    assert_eq!(
        *seen.borrow(),
        vec![
            (2, SortDirection::Ascending),
            (2, SortDirection::Descending),
            (-1, SortDirection::None),
        ]
    );
}

#[test]
fn test_status_listener_panic_is_isolated() {
    init_logger();
    let mut controller = controller();
    let mut rows = cars();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);

    controller.add_status_listener(Box::new(|_: &SortingStatus| panic!("listener failed")));
    let handle = controller.add_status_listener(Box::new(move |_: &SortingStatus| {
        *counter.borrow_mut() += 1;
    }));

    controller.activate(POWER, &mut rows);
    assert_eq!(*calls.borrow(), 1);
    assert_eq!(producers(&rows), vec!["Audi", "BMW", "Porsche"]);

    assert!(controller.remove_status_listener(handle));
    controller.activate(POWER, &mut rows);
    assert_eq!(*calls.borrow(), 1);
}
