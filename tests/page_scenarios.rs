use std::time::Duration;

use sitedeck::constants::*;
use sitedeck::deck::{AutoplayState, Key};
use sitedeck::dom::{Document, NodeId};
use sitedeck::grid::Grid;
use sitedeck::page::{build_document, HostEvent, Page};

fn captions(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Slide {i}")).collect()
}

fn active_indices(doc: &Document, class: &str) -> Vec<usize> {
    doc.elements_by_class(doc.root(), class)
        .into_iter()
        .enumerate()
        .filter(|(_, node)| doc.has_class(*node, ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

fn dots(page: &Page) -> Vec<NodeId> {
    let doc = page.document();
    doc.elements_by_class(doc.root(), DOT_CLASS)
}

fn current(page: &Page) -> usize {
    page.deck().expect("deck").current()
}

#[test]
fn keyboard_then_click_then_autoplay() {
    let mut page = Page::ready(build_document(&captions(3)));
    let deck = page.deck().expect("deck").container();
    assert_eq!(current(&page), 0);

    page.post(HostEvent::Focus(deck));
    page.post(HostEvent::KeyDown(Key::from_name("ArrowRight")));
    page.pump(Duration::ZERO);
    assert_eq!(current(&page), 1);

    let first_dot = dots(&page)[0];
    assert_eq!(page.document().attribute(first_dot, TARGET_ATTR), Some("0"));
    page.post(HostEvent::Click(first_dot));
    page.pump(Duration::ZERO);
    assert_eq!(current(&page), 0);
    assert_eq!(page.deck().unwrap().state(), AutoplayState::Autoplaying);

    page.pump(Duration::from_millis(4999));
    assert_eq!(current(&page), 0);
    page.pump(Duration::from_millis(1));
    assert_eq!(current(&page), 1);

    assert_eq!(active_indices(page.document(), SLIDE_CLASS), vec![1]);
    assert_eq!(active_indices(page.document(), DOT_CLASS), vec![1]);
}

#[test]
fn hovering_pauses_and_leaving_resumes() {
    let mut page = Page::ready(build_document(&captions(3)));
    let deck = page.deck().unwrap().container();

    page.pump(Duration::from_millis(2500));
    page.post(HostEvent::PointerEnter(deck));
    page.pump(Duration::from_secs(60));
    assert_eq!(current(&page), 0);
    assert_eq!(page.deck().unwrap().state(), AutoplayState::Idle);

    page.post(HostEvent::PointerLeave(deck));
    page.pump(Duration::from_millis(5000));
    assert_eq!(current(&page), 1);
    page.pump(Duration::from_millis(10_000));
    assert_eq!(current(&page), 0);
}

#[test]
fn events_run_in_posting_order() {
    let mut page = Page::ready(build_document(&captions(4)));
    let deck = page.deck().unwrap().container();
    page.post(HostEvent::Focus(deck));
    for name in ["ArrowRight", "ArrowRight", "ArrowLeft", "ArrowDown", "ArrowDown"] {
        page.post(HostEvent::KeyDown(Key::from_name(name)));
    }
    page.pump(Duration::ZERO);
    assert_eq!(current(&page), 3);

    page.post(HostEvent::KeyDown(Key::from_name("ArrowUp")));
    page.post(HostEvent::KeyDown(Key::from_name("ArrowUp")));
    page.post(HostEvent::KeyDown(Key::from_name("ArrowUp")));
    page.post(HostEvent::KeyDown(Key::from_name("ArrowUp")));
    page.pump(Duration::ZERO);
    assert_eq!(current(&page), 3);
}

#[test]
fn long_idle_run_visits_every_slide_in_order() {
    let mut page = Page::ready(build_document(&captions(5)));
    let mut seen = Vec::new();
    for _ in 0..10 {
        page.pump(Duration::from_millis(5000));
        seen.push(current(&page));
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 0, 1, 2, 3, 4, 0]);
    assert_eq!(page.now(), Duration::from_secs(50));
}

#[test]
fn a_large_pump_catches_up_tick_by_tick() {
    let mut page = Page::ready(build_document(&captions(3)));
    page.pump(Duration::from_millis(5000 * 7));
    assert_eq!(current(&page), 7 % 3);
}

#[test]
fn page_without_controls_keeps_the_rest_working() {
    let mut doc = Document::new();
    let root = doc.root();
    let deck = doc.create_element("section");
    doc.set_id(deck, DECK_ID);
    doc.append_child(root, deck);
    let grid = doc.create_element("div");
    doc.set_id(grid, GRID_ID);
    doc.append_child(root, grid);

    let mut page = Page::ready(doc);
    assert!(page.deck().is_none());
    assert_eq!(page.grid(), Some(&Grid::generate(GRID_SEED)));
    page.post(HostEvent::PointerEnter(deck));
    page.pump(Duration::from_secs(20));
    assert_eq!(page.document().attribute(deck, "tabindex"), None);
}

#[test]
fn ready_is_reproducible() {
    let a = Page::ready(build_document(&captions(3)));
    let b = Page::ready(build_document(&captions(3)));
    assert_eq!(a.document().to_html(), b.document().to_html());
}

#[test]
fn extra_dot_click_navigates_and_restarts_the_period() {
    let mut doc = build_document(&captions(2));
    let controls = doc.get_element_by_id(CONTROLS_ID).unwrap();
    let extra = doc.create_element("button");
    doc.add_class(extra, DOT_CLASS);
    doc.set_attribute(extra, TARGET_ATTR, "1");
    doc.append_child(controls, extra);

    let mut page = Page::ready(doc);
    assert_eq!(page.deck().unwrap().len(), 2);

    page.pump(Duration::from_millis(3000));
    page.post(HostEvent::Click(extra));
    page.pump(Duration::ZERO);
    assert_eq!(current(&page), 1);

    page.pump(Duration::from_millis(4999));
    assert_eq!(current(&page), 1);
    page.pump(Duration::from_millis(1));
    assert_eq!(current(&page), 0);
    assert_eq!(active_indices(page.document(), DOT_CLASS), vec![0]);
}
