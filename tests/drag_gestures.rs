//! End-to-end drag gestures against the registry, driving the same native
//! event sequence a host adapter would deliver.

use std::cell::RefCell;
use std::rc::Rc;

use dragswap::{DragEvent, DragEventKind, DragRegistry, Element, ElementHandle};
use tracing_subscriber::EnvFilter;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

fn dispatch(registry: &mut DragRegistry, element: &ElementHandle, kind: DragEventKind) -> DragEvent {
    let mut event = DragEvent::new(kind);
    registry
        .dispatch(element, &mut event)
        .expect("dispatch failed");
    event
}

/// Start on `source`, hover `target`, then drop.
fn full_gesture(registry: &mut DragRegistry, source: &ElementHandle, target: &ElementHandle) {
    dispatch(registry, source, DragEventKind::Start);
    dispatch(registry, target, DragEventKind::Enter);
    dispatch(registry, target, DragEventKind::Over);
    dispatch(registry, target, DragEventKind::Drop);
}

fn list_item(id: &str, content: &str) -> ElementHandle {
    Element::new("div")
        .with_attribute("data-drag", "list")
        .with_attribute("id", id)
        .with_content(content)
        .into_handle()
}

#[test]
fn same_group_gesture_swaps_contents_and_fires_callback() {
    init_logs();
    let div1 = list_item("first", "Apples");
    let div2 = list_item("second", "Oranges");
    let mut registry = DragRegistry::with_elements([div1.clone(), div2.clone()]).unwrap();

    let seen: Rc<RefCell<Vec<(ElementHandle, ElementHandle)>>> = Rc::default();
    let sink = Rc::clone(&seen);
    registry.set_callback(move |source, target| {
        sink.borrow_mut().push((source.clone(), target.clone()));
    });

    let div2_before = div2.content();
    full_gesture(&mut registry, &div1, &div2);

    assert_eq!(div1.content(), div2_before);
    assert_eq!(div2.content(), "Apples");
    assert_eq!(div1.attribute("id").as_deref(), Some("second"));
    assert_eq!(div2.attribute("id").as_deref(), Some("first"));

    let calls = seen.borrow();
    assert_eq!(calls.len(), 1);
    // The callback receives the original element references, source first.
    assert!(calls[0].0.same(&div1));
    assert!(calls[0].1.same(&div2));
}

#[test]
fn attribute_swap_is_exact() {
    init_logs();
    let div1 = list_item("first", "Apples");
    div1.set_attribute("aria-label", "fruit");
    let div2 = list_item("second", "Oranges");
    div2.set_attribute("tabindex", "3");
    let mut registry = DragRegistry::with_elements([div1.clone(), div2.clone()]).unwrap();

    full_gesture(&mut registry, &div1, &div2);

    assert!(!div1.has_attribute("aria-label"));
    assert_eq!(div2.attribute("aria-label").as_deref(), Some("fruit"));
    assert!(!div2.has_attribute("tabindex"));
    assert_eq!(div1.attribute("tabindex").as_deref(), Some("3"));
}

#[test]
fn differing_groups_swap_nothing_but_clear_markers() {
    init_logs();
    let list = Element::new("div")
        .with_attribute("data-drag", "list")
        .with_content("Apples")
        .into_handle();
    let grid = Element::new("div")
        .with_attribute("data-drag", "grid")
        .with_content("Oranges")
        .into_handle();
    let mut registry = DragRegistry::with_elements([list.clone(), grid.clone()]).unwrap();

    let fired = Rc::new(std::cell::Cell::new(false));
    let sink = Rc::clone(&fired);
    registry.set_callback(move |_, _| sink.set(true));

    full_gesture(&mut registry, &list, &grid);

    assert!(!fired.get());
    assert_eq!(list.content(), "Apples");
    assert_eq!(grid.content(), "Oranges");
    assert!(!list.has_attribute("data-dragStarted"));
    assert!(!grid.has_attribute("data-dragOver"));
}

#[test]
fn ungrouped_elements_share_the_default_group() {
    init_logs();
    let plain1 = Element::new("div").with_content("one").into_handle();
    let plain2 = Element::new("div").with_content("two").into_handle();
    let mut registry = DragRegistry::with_elements([plain1.clone(), plain2.clone()]).unwrap();

    full_gesture(&mut registry, &plain1, &plain2);

    assert_eq!(plain1.content(), "two");
    assert_eq!(plain2.content(), "one");
}

#[test]
fn drop_outside_any_registered_element_is_a_noop() {
    init_logs();
    let div1 = list_item("first", "Apples");
    let div2 = list_item("second", "Oranges");
    let mut registry = DragRegistry::with_elements([div1.clone(), div2.clone()]).unwrap();

    let fired = Rc::new(std::cell::Cell::new(false));
    let sink = Rc::clone(&fired);
    registry.set_callback(move |_, _| sink.set(true));

    // The drag starts but the pointer never enters a registered element
    // before release; the host delivers the drop back to the source.
    dispatch(&mut registry, &div1, DragEventKind::Start);
    dispatch(&mut registry, &div1, DragEventKind::Drop);

    assert!(!fired.get());
    assert_eq!(div1.content(), "Apples");
    assert_eq!(div2.content(), "Oranges");
}

#[test]
fn clear_detaches_listeners_and_disables_gestures() {
    init_logs();
    let div1 = list_item("first", "Apples");
    let div2 = list_item("second", "Oranges");
    let mut registry = DragRegistry::with_elements([div1.clone(), div2.clone()]).unwrap();

    registry.clear();
    assert!(registry.is_empty());
    assert_eq!(div1.listener_count(), 0);
    assert_eq!(div2.listener_count(), 0);

    // Gesture events after clear hit detached listeners: no state mutation.
    full_gesture(&mut registry, &div1, &div2);
    assert_eq!(div1.content(), "Apples");
    assert_eq!(div2.content(), "Oranges");
    assert!(!div1.has_attribute("data-dragStarted"));
}

#[test]
fn swap_survives_repeated_gestures() {
    init_logs();
    let div1 = list_item("first", "Apples");
    let div2 = list_item("second", "Oranges");
    let mut registry = DragRegistry::with_elements([div1.clone(), div2.clone()]).unwrap();

    // Listeners stay on the original nodes through a swap, so a second
    // gesture in either direction works without rewiring.
    full_gesture(&mut registry, &div1, &div2);
    full_gesture(&mut registry, &div2, &div1);

    assert_eq!(div1.content(), "Apples");
    assert_eq!(div2.content(), "Oranges");
    assert_eq!(div1.attribute("id").as_deref(), Some("first"));
}

#[test]
fn register_chains_and_grows_the_peer_set() {
    init_logs();
    let div1 = list_item("first", "Apples");
    let div2 = list_item("second", "Oranges");
    let div3 = list_item("third", "Pears");
    let mut registry = DragRegistry::new();
    registry
        .register([div1.clone()])
        .unwrap()
        .register([div2.clone(), div3.clone()])
        .unwrap();
    assert_eq!(registry.len(), 3);

    full_gesture(&mut registry, &div1, &div3);
    assert_eq!(div1.content(), "Pears");
    assert_eq!(div3.content(), "Apples");
}
