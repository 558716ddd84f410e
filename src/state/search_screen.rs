//! Query-lifecycle coordinator for one activation of the search screen.
//!
//! Routes discrete events to the components:
//! - keystrokes edit the input and (re)schedule the debouncer
//! - ticks hand settled input to the keyword committer
//! - tab and sort selections go to the mode selector
//! - activation and teardown drive the relay provisioner
//!
//! The descriptor is derived on demand from keyword, mode and sort.

use crate::model::{
    Keyword, KeyAction, QueryDescriptor, RenderRequest, SearchMode, SearchRelay, SortPreference,
};
use crate::services::{Navigator, RelayRegistry, ResultRenderer};
use crate::state::debouncer::{Debouncer, DEFAULT_QUIET_PERIOD};
use crate::state::keyword::KeywordCommitter;
use crate::state::mode_selector::ModeSelector;
use crate::state::query_descriptor::{build_descriptor, build_render_request};
use crate::state::relay_provisioner::RelayProvisioner;
use crate::state::search_input::SearchInput;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Per-activation settings for the search screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSettings {
    /// Search-capable relays to provision.
    pub relays: Vec<SearchRelay>,
    /// Quiet period before typed input is committed.
    pub quiet_period: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            relays: Vec::new(),
            quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

/// Whether the screen is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Events are processed.
    Active,
    /// Torn down; every event is ignored.
    TornDown,
}

/// One activation of the search screen.
///
/// Created by [`SearchScreen::activate`], ended by [`SearchScreen::deactivate`].
/// Every activation is independent: nothing carries over to the next one.
#[derive(Debug, Clone)]
pub struct SearchScreen {
    lifecycle: Lifecycle,
    input: SearchInput,
    debouncer: Debouncer<String>,
    keyword: KeywordCommitter,
    modes: ModeSelector,
    provisioner: RelayProvisioner,
}

impl SearchScreen {
    /// Screen becomes visible.
    ///
    /// Seeds the keyword from navigation (without navigating) and provisions
    /// search relays. The input box starts out showing the seeded keyword.
    pub fn activate<N, R>(settings: &ScreenSettings, navigator: &N, registry: &mut R) -> Self
    where
        N: Navigator + ?Sized,
        R: RelayRegistry + ?Sized,
    {
        let initial = navigator.initial_keyword();
        let keyword = KeywordCommitter::initialize(initial.as_deref());
        let input = keyword
            .keyword()
            .map(|k| SearchInput::with_text(k.as_str()))
            .unwrap_or_default();

        let mut provisioner = RelayProvisioner::new();
        provisioner.activate(&settings.relays, registry);

        info!(keyword = ?keyword.keyword().map(Keyword::as_str), "search screen activated");

        Self {
            lifecycle: Lifecycle::Active,
            input,
            debouncer: Debouncer::new(settings.quiet_period),
            keyword,
            modes: ModeSelector::new(),
            provisioner,
        }
    }

    /// Screen is torn down.
    ///
    /// Cancels any pending commit and releases the relays this activation
    /// opened. Only the first call has any effect; returns true for it.
    pub fn deactivate<R: RelayRegistry + ?Sized>(&mut self, registry: &mut R) -> bool {
        if self.lifecycle == Lifecycle::TornDown {
            return false;
        }
        self.lifecycle = Lifecycle::TornDown;

        if self.debouncer.cancel() {
            debug!("pending keyword commit cancelled by teardown");
        }
        self.provisioner.deactivate(registry);
        info!("search screen torn down");
        true
    }

    /// Current lifecycle phase.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True until teardown.
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    // ===== Events =====

    /// Apply a user action. Ignored after teardown.
    ///
    /// `Quit` belongs to whoever owns the screen and is ignored here.
    pub fn handle_action(&mut self, action: KeyAction, now: Instant) {
        if !self.is_active() {
            return;
        }

        let text_changed = match action {
            KeyAction::InsertChar(ch) => {
                self.input.insert_char(ch);
                true
            }
            KeyAction::DeleteBack => self.input.backspace(),
            KeyAction::ClearInput => self.input.clear(),
            KeyAction::CursorLeft => {
                self.input.cursor_left();
                false
            }
            KeyAction::CursorRight => {
                self.input.cursor_right();
                false
            }
            KeyAction::CursorHome => {
                self.input.cursor_home();
                false
            }
            KeyAction::CursorEnd => {
                self.input.cursor_end();
                false
            }
            KeyAction::NextTab => {
                self.select_mode(self.modes.mode().next());
                false
            }
            KeyAction::PrevTab => {
                self.select_mode(self.modes.mode().prev());
                false
            }
            KeyAction::SelectMode(mode) => {
                self.select_mode(mode);
                false
            }
            KeyAction::SelectSort(sort) => {
                self.set_sort_preference(sort);
                false
            }
            KeyAction::Quit => false,
        };

        if text_changed {
            self.debouncer.schedule(self.input.text().to_string(), now);
        }
    }

    /// Replace the whole input, as a paste would. Ignored after teardown.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        if !self.is_active() {
            return;
        }
        let text = text.into();
        if text == self.input.text() {
            return;
        }
        self.input = SearchInput::with_text(text);
        self.debouncer.schedule(self.input.text().to_string(), now);
    }

    /// Switch search mode. Ignored after teardown.
    pub fn select_mode(&mut self, mode: SearchMode) {
        if self.is_active() && self.modes.select_mode(mode) {
            debug!(?mode, "search mode selected");
        }
    }

    /// Choose the profile sort order. Ignored after teardown.
    pub fn set_sort_preference(&mut self, sort: SortPreference) {
        if self.is_active() && self.modes.set_sort_preference(sort) {
            debug!(?sort, "sort preference selected");
        }
    }

    /// Deliver a settled input value, if one is due.
    ///
    /// Returns true if the committed keyword changed. Never emits after
    /// teardown.
    pub fn tick<N: Navigator + ?Sized>(&mut self, now: Instant, navigator: &mut N) -> bool {
        if !self.is_active() {
            return false;
        }
        match self.debouncer.poll(now) {
            Some(settled) => self.keyword.commit(Some(&settled), navigator),
            None => false,
        }
    }

    /// Time until the pending input settles, if any.
    pub fn time_until_commit(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    // ===== Derived state =====

    /// Raw input as typed.
    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    /// Committed keyword, if any.
    pub fn keyword(&self) -> Option<&Keyword> {
        self.keyword.keyword()
    }

    /// Active search mode.
    pub fn mode(&self) -> SearchMode {
        self.modes.mode()
    }

    /// Profile sort preference.
    pub fn sort(&self) -> SortPreference {
        self.modes.sort()
    }

    /// True in profile search.
    pub fn sort_options_visible(&self) -> bool {
        self.modes.sort_options_visible()
    }

    /// Relays this activation owns.
    pub fn provisioner(&self) -> &RelayProvisioner {
        &self.provisioner
    }

    /// Query for the committed keyword under the current mode and sort.
    ///
    /// `None` while no keyword is committed.
    pub fn descriptor(&self) -> Option<QueryDescriptor> {
        build_descriptor(self.keyword.keyword(), self.modes.mode(), self.modes.sort())
    }

    /// Descriptor wrapped with the fixed renderer options.
    pub fn render_request(&self) -> Option<RenderRequest> {
        self.descriptor().map(build_render_request)
    }

    /// Hand the current request to `renderer`.
    ///
    /// The renderer is not invoked when no keyword is committed. Returns
    /// true if it was invoked.
    pub fn present<T: ResultRenderer + ?Sized>(&self, renderer: &mut T) -> bool {
        match self.render_request() {
            Some(request) => {
                renderer.render(&request);
                true
            }
            None => false,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_screen_tests.rs"]
mod tests;
