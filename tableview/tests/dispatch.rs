//! Tests for click dispatch and listener isolation.

use std::cell::RefCell;
use std::rc::Rc;

use simplelog::{Config, LevelFilter, TestLogger};
use tableview::dispatch::ClickDispatcher;

fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

// ============================================================================
// Isolation Tests
// ============================================================================

#[test]
fn test_failing_listener_does_not_block_others() {
    init_logger();
    let mut dispatcher: ClickDispatcher<String> = ClickDispatcher::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);

    dispatcher.add_row_listener(Box::new(|_, _| panic!("first listener failed")));
    dispatcher.add_row_listener(Box::new(move |index, row: &String| {
        sink.borrow_mut().push((index, row.clone()));
    }));

    dispatcher.row_clicked(3, &"BMW".to_string());

    assert_eq!(*calls.borrow(), vec![(3, "BMW".to_string())]);
}

#[test]
fn test_header_listener_panic_with_string_payload() {
    init_logger();
    let mut dispatcher: ClickDispatcher<()> = ClickDispatcher::new();
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicked);

    dispatcher.add_header_listener(Box::new(|column| panic!("bad column {}", column)));
    dispatcher.add_header_listener(Box::new(move |column| sink.borrow_mut().push(column)));

    dispatcher.header_clicked(1);
    dispatcher.header_clicked(2);

    assert_eq!(*clicked.borrow(), vec![1, 2]);
}

#[test]
fn test_listeners_called_in_registration_order() {
    let mut dispatcher: ClickDispatcher<()> = ClickDispatcher::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let sink = Rc::clone(&order);
        dispatcher.add_header_listener(Box::new(move |_| sink.borrow_mut().push(id)));
    }

    dispatcher.header_clicked(0);

    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

// ============================================================================
// Registration Tests
// ============================================================================

#[test]
fn test_duplicate_registrations_are_distinct() {
    let mut dispatcher: ClickDispatcher<()> = ClickDispatcher::new();
    let count = Rc::new(RefCell::new(0));

    let make = |count: &Rc<RefCell<usize>>| {
        let count = Rc::clone(count);
        Box::new(move |_: usize| *count.borrow_mut() += 1)
    };
    let first = dispatcher.add_header_listener(make(&count));
    let second = dispatcher.add_header_listener(make(&count));
    assert_ne!(first, second);

    dispatcher.header_clicked(0);
    assert_eq!(*count.borrow(), 2);

    assert!(dispatcher.remove_header_listener(first));
    dispatcher.header_clicked(0);
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn test_remove_listener_twice() {
    let mut dispatcher: ClickDispatcher<u32> = ClickDispatcher::new();
    let handle = dispatcher.add_row_listener(Box::new(|_, _| {}));
    assert!(dispatcher.remove_row_listener(handle));
    assert!(!dispatcher.remove_row_listener(handle));
}

// ============================================================================
// Long Click Tests
// ============================================================================

#[test]
fn test_long_click_consumed_if_any_listener_consumes() {
    init_logger();
    let mut dispatcher: ClickDispatcher<u32> = ClickDispatcher::new();
    let calls = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&calls);
    dispatcher.add_row_long_listener(Box::new(move |_, _| {
        *counter.borrow_mut() += 1;
        false
    }));
    dispatcher.add_row_long_listener(Box::new(|_, _| panic!("long click failed")));
    let counter = Rc::clone(&calls);
    dispatcher.add_row_long_listener(Box::new(move |_, _| {
        *counter.borrow_mut() += 1;
        true
    }));
    let counter = Rc::clone(&calls);
    dispatcher.add_row_long_listener(Box::new(move |_, _| {
        *counter.borrow_mut() += 1;
        false
    }));

    assert!(dispatcher.row_long_clicked(0, &7));
    assert_eq!(*calls.borrow(), 3);
}

#[test]
fn test_long_click_not_consumed() {
    let mut dispatcher: ClickDispatcher<u32> = ClickDispatcher::new();
    assert!(!dispatcher.row_long_clicked(0, &7));

    dispatcher.add_row_long_listener(Box::new(|_, _| false));
    dispatcher.add_row_long_listener(Box::new(|_, _| panic!("ignored")));
    assert!(!dispatcher.row_long_clicked(0, &7));
}

#[test]
fn test_long_click_listener_receives_row() {
    let mut dispatcher: ClickDispatcher<u32> = ClickDispatcher::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    dispatcher.add_row_long_listener(Box::new(move |index, row: &u32| {
        *sink.borrow_mut() = Some((index, *row));
        true
    }));

    assert!(dispatcher.row_long_clicked(4, &42));
    assert_eq!(*seen.borrow(), Some((4, 42)));
}
