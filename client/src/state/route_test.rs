use std::cell::Cell;

use super::*;
use crate::state::transition::{Phase, Presence, TRANSITION_STEP_MS};

/// Viewport double tracking a fake scroll offset.
#[derive(Default)]
struct FakeViewport {
    scroll_y: Cell<u32>,
    scroll_resets: Cell<u32>,
    reduced_motion: Cell<bool>,
}

impl FakeViewport {
    fn scroll_down(&self) {
        self.scroll_y.set(640);
    }
}

impl Viewport for FakeViewport {
    fn scroll_to_top(&self) {
        self.scroll_y.set(0);
        self.scroll_resets.set(self.scroll_resets.get() + 1);
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }
}

fn settle(state: &mut TransitionState, seq: u64) {
    while state.advance(seq) {}
}

fn non_exiting(state: &TransitionState) -> Vec<Route> {
    state
        .mounted()
        .into_iter()
        .filter(|(_, presence)| *presence != Presence::Exiting)
        .map(|(route, _)| route)
        .collect()
}

// =============================================================
// Route table
// =============================================================

#[test]
fn table_maps_each_path_to_one_route() {
    assert_eq!(Route::lookup("/"), Some(Route::Home));
    assert_eq!(Route::lookup("/about"), Some(Route::About));
    assert_eq!(Route::lookup("/resume"), Some(Route::Resume));
}

#[test]
fn path_is_inverse_of_lookup() {
    for (path, route) in ROUTE_TABLE {
        assert_eq!(route.path(), path);
        assert_eq!(Route::lookup(route.path()), Some(route));
    }
}

#[test]
fn trailing_slash_matches_canonical_route() {
    assert_eq!(Route::lookup("/about/"), Some(Route::About));
    assert_eq!(Route::lookup("//"), Some(Route::Home));
}

#[test]
fn unmatched_paths_fall_back_to_home() {
    assert_eq!(Route::lookup("/blog"), None);
    assert_eq!(Route::lookup("/About"), None);
    assert_eq!(Route::resolve("/blog"), Route::Home);
    assert_eq!(Route::resolve(""), Route::Home);
}

#[test]
fn labels_are_distinct() {
    assert_ne!(Route::Home.label(), Route::About.label());
    assert_ne!(Route::About.label(), Route::Resume.label());
}

#[test]
fn document_title_prefixes_inner_pages() {
    assert_eq!(Route::Home.document_title("Paul Liu"), "Paul Liu");
    assert_eq!(Route::Resume.document_title("Paul Liu"), "Resume · Paul Liu");
}

// =============================================================
// begin_navigation
// =============================================================

#[test]
fn navigation_scenario_keeps_one_live_page_and_resets_scroll() {
    let viewport = FakeViewport::default();
    let mut state = TransitionState::new(Route::Home);
    assert_eq!(state.settled_page(), Some(Route::Home));

    for (path, route) in [("/resume", Route::Resume), ("/about", Route::About), ("/", Route::Home)] {
        viewport.scroll_down();
        let seq = begin_navigation(&mut state, &viewport, path).expect("route changed").seq;

        assert_eq!(viewport.scroll_y.get(), 0);
        assert_eq!(non_exiting(&state), vec![route]);

        while state.advance(seq) {
            assert_eq!(non_exiting(&state), vec![route]);
        }
        assert_eq!(state.settled_page(), Some(route));
        assert_eq!(state.mounted(), vec![(route, Presence::Settled)]);
    }
    assert_eq!(viewport.scroll_resets.get(), 3);
}

#[test]
fn navigating_to_current_page_keeps_scroll_position() {
    let viewport = FakeViewport::default();
    let mut state = TransitionState::new(Route::About);
    viewport.scroll_down();
    assert_eq!(begin_navigation(&mut state, &viewport, "/about/"), None);
    assert_eq!(viewport.scroll_y.get(), 640);
    assert_eq!(viewport.scroll_resets.get(), 0);
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn first_run_on_initial_page_keeps_scroll_position() {
    let viewport = FakeViewport::default();
    let mut state = TransitionState::new(Route::Home);
    viewport.scroll_down();
    assert_eq!(begin_navigation(&mut state, &viewport, "/"), None);
    assert_eq!(viewport.scroll_y.get(), 640);
}

#[test]
fn reduced_motion_is_sampled_per_navigation() {
    let viewport = FakeViewport::default();
    let mut state = TransitionState::new(Route::Home);

    let first = begin_navigation(&mut state, &viewport, "/about").unwrap();
    assert_eq!(first.timing.step_ms, TRANSITION_STEP_MS);
    settle(&mut state, first.seq);

    viewport.reduced_motion.set(true);
    let second = begin_navigation(&mut state, &viewport, "/resume").unwrap();
    assert_eq!(second.timing.step_ms, 0);
    settle(&mut state, second.seq);
    assert_eq!(state.settled_page(), Some(Route::Resume));
}

#[test]
fn unknown_path_navigates_home() {
    let viewport = FakeViewport::default();
    let mut state = TransitionState::new(Route::Resume);
    let seq = begin_navigation(&mut state, &viewport, "/nope").unwrap().seq;
    settle(&mut state, seq);
    assert_eq!(state.settled_page(), Some(Route::Home));
}
