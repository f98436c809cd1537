use super::*;

#[test]
fn get_returns_initial_value() {
    let cell = StateCell::new(7);
    assert_eq!(cell.get(), 7);
}

#[test]
fn set_replaces_wholesale() {
    let cell = StateCell::new(vec![1, 2]);
    cell.set(vec![9]);
    assert_eq!(cell.get(), vec![9]);
}

#[test]
fn with_projects_without_cloning() {
    let cell = StateCell::new("hello".to_owned());
    assert_eq!(cell.with(String::len), 5);
}

#[test]
fn subscribers_see_each_published_value() {
    let cell = StateCell::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    cell.subscribe(move |v| sink.borrow_mut().push(*v));

    cell.set(1);
    cell.set(2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn multiple_subscribers_all_fire() {
    let cell = StateCell::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    for tag in ["a", "b"] {
        let sink = Rc::clone(&seen);
        cell.subscribe(move |v: &i32| sink.borrow_mut().push(format!("{tag}:{v}")));
    }

    cell.set(5);
    assert_eq!(*seen.borrow(), vec!["a:5".to_owned(), "b:5".to_owned()]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let cell = StateCell::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = cell.subscribe(move |v| sink.borrow_mut().push(*v));

    cell.set(1);
    cell.unsubscribe(id);
    cell.set(2);
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn unsubscribe_unknown_id_is_ignored() {
    let cell = StateCell::new(0);
    let id = cell.subscribe(|_| {});
    cell.unsubscribe(id);
    cell.unsubscribe(id);
    cell.set(1);
}

#[test]
fn subscriber_may_subscribe_during_notification() {
    let cell = Rc::new(StateCell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let outer_cell = Rc::clone(&cell);
    let outer_seen = Rc::clone(&seen);
    cell.subscribe(move |v| {
        outer_seen.borrow_mut().push(*v);
        let inner_seen = Rc::clone(&outer_seen);
        outer_cell.subscribe(move |v| inner_seen.borrow_mut().push(*v * 10));
    });

    // First publish runs only the outer subscriber; the inner one it adds
    // fires from the second publish onward.
    cell.set(1);
    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn subscriber_may_read_cell_during_notification() {
    let cell = Rc::new(StateCell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let handle = Rc::clone(&cell);
    let sink = Rc::clone(&seen);
    cell.subscribe(move |_| sink.borrow_mut().push(handle.get()));

    cell.set(3);
    assert_eq!(*seen.borrow(), vec![3]);
}
