//! Page transition sequencing.
//!
//! DESIGN
//! ======
//! One transition moves through `OutgoingExiting -> IncomingEntering ->
//! Settled`. The incoming page is mounted as soon as the transition starts,
//! so it exists before the outgoing page's unmount settles. Timers advance
//! the phases by sequence number; a navigation that arrives mid-flight bumps
//! the sequence, which turns every pending step of the old transition into a
//! no-op.
//!
//! Timing is not part of the state machine. Reduced motion only shortens the
//! step delay to zero; the phase order is identical.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use leptos::prelude::*;

use crate::state::route::Route;
use crate::util::document::Viewport;

/// Step delay between phases when animation is enabled.
pub const TRANSITION_STEP_MS: u32 = 180;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No transition has run since the first render.
    #[default]
    Idle,
    OutgoingExiting,
    IncomingEntering,
    Settled,
}

/// How a mounted page is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Animating out; unmounted at the next step.
    Exiting,
    /// Mounted but hidden until the outgoing page is gone.
    Waiting,
    Entering,
    Settled,
}

impl Presence {
    #[must_use]
    pub const fn css_modifier(self) -> &'static str {
        match self {
            Self::Exiting => "page-frame--exiting",
            Self::Waiting => "page-frame--waiting",
            Self::Entering => "page-frame--entering",
            Self::Settled => "page-frame--settled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    phase: Phase,
    incoming: Route,
    outgoing: Option<Route>,
    seq: u64,
}

impl TransitionState {
    #[must_use]
    pub fn new(initial: Route) -> Self {
        Self { phase: Phase::Idle, incoming: initial, outgoing: None, seq: 0 }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The page being shown or about to be shown.
    #[must_use]
    pub fn current(&self) -> Route {
        self.incoming
    }

    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::OutgoingExiting | Phase::IncomingEntering)
    }

    /// The settled page, if no transition is running.
    #[must_use]
    pub fn settled_page(&self) -> Option<Route> {
        (!self.is_in_flight()).then_some(self.incoming)
    }

    /// Start a transition toward `to`.
    ///
    /// Returns `None` when `to` is already the page on screen. A transition
    /// already in flight is discarded: if its outgoing page was still
    /// exiting, that exit is abandoned and the page it was heading to is
    /// never shown.
    pub fn navigate(&mut self, to: Route) -> Option<u64> {
        if to == self.incoming && self.phase != Phase::OutgoingExiting {
            return None;
        }
        let visible = match self.phase {
            Phase::OutgoingExiting => None,
            Phase::Idle | Phase::IncomingEntering | Phase::Settled => Some(self.incoming),
        };
        self.seq += 1;
        self.incoming = to;
        self.outgoing = visible.filter(|route| *route != to);
        self.phase = if self.outgoing.is_some() { Phase::OutgoingExiting } else { Phase::IncomingEntering };
        Some(self.seq)
    }

    /// Move one phase forward if `seq` still names the current transition.
    /// Returns whether anything changed.
    pub fn advance(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        match self.phase {
            Phase::OutgoingExiting => {
                self.outgoing = None;
                self.phase = Phase::IncomingEntering;
            }
            Phase::IncomingEntering => self.phase = Phase::Settled,
            Phase::Idle | Phase::Settled => return false,
        }
        true
    }

    /// Mounted pages in DOM order, outgoing first.
    #[must_use]
    pub fn mounted(&self) -> Vec<(Route, Presence)> {
        let incoming = match self.phase {
            Phase::OutgoingExiting => Presence::Waiting,
            Phase::IncomingEntering => Presence::Entering,
            Phase::Idle | Phase::Settled => Presence::Settled,
        };
        self.outgoing
            .map(|route| (route, Presence::Exiting))
            .into_iter()
            .chain(std::iter::once((self.incoming, incoming)))
            .collect()
    }

    #[must_use]
    pub fn presence_of(&self, route: Route) -> Option<Presence> {
        self.mounted()
            .into_iter()
            .find(|(mounted, _)| *mounted == route)
            .map(|(_, presence)| presence)
    }
}

/// Per-step delay for the current environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    pub step_ms: u32,
}

impl TransitionTiming {
    #[must_use]
    pub fn for_viewport<V: Viewport>(viewport: &V) -> Self {
        let step_ms = if viewport.prefers_reduced_motion() { 0 } else { TRANSITION_STEP_MS };
        Self { step_ms }
    }

    /// Value for the `--page-transition-ms` custom property.
    #[must_use]
    pub fn css_duration(self) -> String {
        format!("{}ms", self.step_ms)
    }
}

/// Step `state` through transition `seq` until it settles or is superseded.
///
/// In the browser each step waits `step_ms`; with a zero delay the steps
/// still run one after another, just without a pause.
pub fn drive(state: RwSignal<TransitionState>, seq: u64, step_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        loop {
            if step_ms > 0 {
                gloo_timers::future::TimeoutFuture::new(step_ms).await;
            }
            if !state.try_update(|t| t.advance(seq)).unwrap_or(false) {
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = step_ms;
        while state.try_update(|t| t.advance(seq)).unwrap_or(false) {}
    }
}
