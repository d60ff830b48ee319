// SPDX-License-Identifier: MPL-2.0
//! Two-phase display state between a filter selection and its subset.
//!
//! Every selection calls [`Sequencer::begin`], which switches to
//! [`Phase::Loading`] and hands out a fresh [`Ticket`]. The delay task
//! returns that ticket, and [`Sequencer::settle`] commits the subset only if
//! the ticket is still the latest one. Earlier transitions can therefore
//! never overwrite a newer selection, even if their delay was not aborted.

use crate::domain::gallery::MediaItem;
use crate::domain::ui::TransitionDelay;
use std::time::Instant;

/// Identifies one transition. Tickets increase strictly within a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What the grid is allowed to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A transition is in flight; no items are displayed.
    Loading,
    /// The committed subset. May be empty.
    Settled(Vec<&'static MediaItem>),
}

#[derive(Debug, Clone)]
pub struct Sequencer {
    phase: Phase,
    latest: Option<Ticket>,
    next: u64,
    settled_at: Instant,
}

impl Sequencer {
    /// Starts directly in the settled phase with `items`.
    #[must_use]
    pub fn settled(items: Vec<&'static MediaItem>) -> Self {
        Self {
            phase: Phase::Settled(items),
            latest: None,
            next: 0,
            settled_at: Instant::now(),
        }
    }

    /// Enters the loading phase and returns the ticket of the new transition.
    pub fn begin(&mut self) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        self.latest = Some(ticket);
        self.phase = Phase::Loading;
        ticket
    }

    /// Commits `items` if `ticket` belongs to the transition in flight.
    ///
    /// Returns `false` and changes nothing for stale or foreign tickets, and
    /// when no transition is in flight.
    pub fn settle(&mut self, ticket: Ticket, items: Vec<&'static MediaItem>) -> bool {
        if self.latest != Some(ticket) || !self.is_loading() {
            return false;
        }
        self.phase = Phase::Settled(items);
        self.settled_at = Instant::now();
        true
    }

    /// Ticket of the most recent transition, if any was started.
    #[must_use]
    pub fn latest(&self) -> Option<Ticket> {
        self.latest
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Items currently on display; empty while loading.
    #[must_use]
    pub fn visible(&self) -> &[&'static MediaItem] {
        match &self.phase {
            Phase::Loading => &[],
            Phase::Settled(items) => items,
        }
    }

    /// When the displayed subset was last committed.
    #[must_use]
    pub fn settled_at(&self) -> Instant {
        self.settled_at
    }
}

/// Sleeps for `delay` and yields `ticket` back.
pub async fn wait(delay: TransitionDelay, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay.as_duration()).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, MediaId};
    use std::time::Duration;

    static LATTE: MediaItem = MediaItem {
        id: MediaId(2),
        title: "latte",
        category: Category::Drinks,
        media_url: "https://example.com/latte.jpg",
        description: "",
    };

    static CROISSANT: MediaItem = MediaItem {
        id: MediaId(3),
        title: "croissant",
        category: Category::Food,
        media_url: "https://example.com/croissant.jpg",
        description: "",
    };

    #[test]
    fn begin_hides_previous_subset() {
        let mut sequencer = Sequencer::settled(vec![&LATTE]);
        sequencer.begin();
        assert!(sequencer.is_loading());
        assert!(sequencer.visible().is_empty());
    }

    #[test]
    fn tickets_increase() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let first = sequencer.begin();
        let second = sequencer.begin();
        assert!(second > first);
    }

    #[test]
    fn latest_ticket_settles() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let ticket = sequencer.begin();
        assert!(sequencer.settle(ticket, vec![&CROISSANT]));
        assert_eq!(sequencer.phase(), &Phase::Settled(vec![&CROISSANT]));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let stale = sequencer.begin();
        let current = sequencer.begin();

        assert!(!sequencer.settle(stale, vec![&LATTE]));
        assert!(sequencer.is_loading());

        assert!(sequencer.settle(current, vec![&CROISSANT]));
        assert_eq!(sequencer.visible(), &[&CROISSANT]);
    }

    #[test]
    fn rapid_reselection_settles_exactly_once() {
        let mut sequencer = Sequencer::settled(vec![&LATTE]);
        let first = sequencer.begin();
        let second = sequencer.begin();

        let commits = [
            sequencer.settle(first, vec![&LATTE]),
            sequencer.settle(second, vec![&CROISSANT]),
        ];

        assert_eq!(commits, [false, true]);
        assert_eq!(sequencer.visible(), &[&CROISSANT]);
    }

    #[test]
    fn settling_twice_with_same_ticket_is_noop() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let ticket = sequencer.begin();
        assert!(sequencer.settle(ticket, vec![&LATTE]));
        assert!(!sequencer.settle(ticket, vec![&CROISSANT]));
        assert_eq!(sequencer.visible(), &[&LATTE]);
    }

    #[test]
    fn foreign_ticket_is_ignored_by_fresh_sequencer() {
        let mut old = Sequencer::settled(Vec::new());
        let ticket = old.begin();

        let mut fresh = Sequencer::settled(vec![&LATTE]);
        assert!(!fresh.settle(ticket, Vec::new()));
        assert_eq!(fresh.visible(), &[&LATTE]);
    }

    #[test]
    fn empty_subset_is_distinct_from_loading() {
        let mut sequencer = Sequencer::settled(vec![&LATTE]);
        let ticket = sequencer.begin();
        sequencer.settle(ticket, Vec::new());

        assert!(!sequencer.is_loading());
        assert_eq!(sequencer.phase(), &Phase::Settled(Vec::new()));
    }

    #[test]
    fn settle_moves_settled_at_forward() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let before = sequencer.settled_at();
        let ticket = sequencer.begin();
        sequencer.settle(ticket, Vec::new());
        assert!(sequencer.settled_at() >= before);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_returns_ticket_after_delay() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let ticket = sequencer.begin();
        let started = tokio::time::Instant::now();

        let returned = wait(TransitionDelay::new(300), ticket).await;

        assert_eq!(returned, ticket);
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_is_not_ready_before_delay() {
        let mut sequencer = Sequencer::settled(Vec::new());
        let ticket = sequencer.begin();

        let pending = tokio::time::timeout(
            Duration::from_millis(299),
            wait(TransitionDelay::new(300), ticket),
        )
        .await;

        assert!(pending.is_err());
    }
}
