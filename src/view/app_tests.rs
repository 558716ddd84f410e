//! Tests for the TUI app shell.

use super::*;
use crate::model::{RelayUrl, SearchMode, SearchRelay, SortPreference};
use crate::services::RelayRegistry;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn url(s: &str) -> RelayUrl {
    RelayUrl::new(s).expect("valid relay url")
}

fn settings() -> ScreenSettings {
    ScreenSettings {
        relays: vec![
            SearchRelay::read_only(url("wss://relay.nostr.band")),
            SearchRelay::read_only(url("wss://search.nos.today")),
        ],
        quiet_period: ms(500),
    }
}

#[test]
fn opening_provisions_relays() {
    let harness = AcceptanceTestHarness::open("/search", &settings(), LocalRelayRegistry::new());
    assert_eq!(harness.app().registry().len(), 2);
    assert_eq!(harness.app().registry().connect_calls(), 2);
}

#[test]
fn typing_then_pause_navigates_and_renders() {
    let mut harness =
        AcceptanceTestHarness::open("/search", &settings(), LocalRelayRegistry::new());

    harness.type_text("alice", ms(80));
    assert_eq!(harness.app().navigator().writes(), 0);
    assert!(harness.app().results().current().is_none());

    harness.advance(ms(500));
    assert_eq!(harness.app().navigator().current_path(), "/search/alice");
    assert_eq!(harness.app().navigator().writes(), 1);

    let output = harness.render();
    assert!(output.contains("/search/alice"));
    assert!(output.contains("post_keyword"));
}

#[test]
fn opened_with_keyword_renders_immediately() {
    let mut harness =
        AcceptanceTestHarness::open("/search/bob", &settings(), LocalRelayRegistry::new());

    let current = harness.app().results().current().expect("request rendered");
    assert_eq!(current.subject.discriminator, "bob");
    assert_eq!(harness.app().navigator().writes(), 0);

    let output = harness.render();
    assert!(output.contains("bob"));
}

#[test]
fn tab_switches_to_people_and_shows_sort() {
    let mut harness =
        AcceptanceTestHarness::open("/search/bob", &settings(), LocalRelayRegistry::new());

    harness.press(KeyCode::Tab, KeyModifiers::NONE);
    assert_eq!(harness.app().screen().mode(), SearchMode::ProfileSearch);

    let output = harness.render();
    assert!(output.contains("Sort:"));
    assert!(output.contains("bob sort:popular"));
    assert!(output.contains("bob_p"));
}

#[test]
fn ctrl_r_selects_recent_sort() {
    let mut harness =
        AcceptanceTestHarness::open("/search/bob", &settings(), LocalRelayRegistry::new());

    harness.press(KeyCode::Tab, KeyModifiers::NONE);
    harness.press(KeyCode::Char('r'), KeyModifiers::CONTROL);

    assert_eq!(harness.app().screen().sort(), SortPreference::Recent);
    let current = harness.app().results().current().expect("request rendered");
    assert_eq!(current.subject.items, vec!["bob".to_string()]);
    assert!(!current.subject.no_sort);
}

#[test]
fn clearing_input_removes_results() {
    let mut harness =
        AcceptanceTestHarness::open("/search/bob", &settings(), LocalRelayRegistry::new());

    harness.press(KeyCode::Char('u'), KeyModifiers::CONTROL);
    harness.advance(ms(500));

    assert!(harness.app().results().current().is_none());
    assert_eq!(harness.app().navigator().writes(), 0);
    let output = harness.render();
    assert!(output.contains("Type to search."));
}

#[test]
fn quit_releases_only_owned_relays() {
    let band = url("wss://relay.nostr.band");
    let registry = LocalRelayRegistry::with_connected([&band]);
    let mut harness = AcceptanceTestHarness::open("/search", &settings(), registry);
    assert_eq!(harness.app().registry().connect_calls(), 1);

    let quit = harness.press(KeyCode::Esc, KeyModifiers::NONE);

    assert!(quit);
    let registry = harness.app().registry();
    assert_eq!(registry.disconnect_calls(), 1);
    assert!(registry.has(&band), "Pre-existing relay must survive quit");
    assert_eq!(registry.len(), 1);
}

#[test]
fn quit_while_typing_never_commits() {
    let mut harness =
        AcceptanceTestHarness::open("/search", &settings(), LocalRelayRegistry::new());

    harness.type_text("ali", ms(50));
    harness.press(KeyCode::Char('c'), KeyModifiers::CONTROL);
    harness.advance(ms(2_000));

    assert_eq!(harness.app().navigator().writes(), 0);
    assert_eq!(harness.app().screen().keyword(), None);
}

#[test]
fn draw_renders_all_sections() {
    let mut harness =
        AcceptanceTestHarness::open("/search", &settings(), LocalRelayRegistry::new());
    let output = harness.render();

    assert!(output.contains("Search"));
    assert!(output.contains("Posts"));
    assert!(output.contains("People"));
    assert!(output.contains("relays: 2 open (2 for search)"));
}
