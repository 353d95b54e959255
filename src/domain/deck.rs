//! Deck and outcome bookkeeping.
//!
//! The store owns the remaining deck, the four outcome collections and the
//! energy budget. Items only ever leave the front of the deck and land in
//! exactly one collection.

use super::models::{Outcome, Restaurant};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Remaining deck, outcome collections and energy counter.
///
/// # Examples
///
/// ```
/// use snackswipe::domain::{DeckStore, Outcome, DATASET};
///
/// let mut store = DeckStore::new(DATASET.to_vec(), 15);
/// let first = store.peek_current().map(|r| r.id);
/// let liked = store.classify(Outcome::Like).map(|r| r.id);
/// assert_eq!(first, liked);
/// assert_eq!(store.energy(), 14);
/// ```
#[derive(Debug, Clone)]
pub struct DeckStore {
    deck: VecDeque<Restaurant>,
    liked: Vec<Restaurant>,
    wishlisted: Vec<Restaurant>,
    rejected: Vec<Restaurant>,
    skipped: Vec<Restaurant>,
    energy: u32,
}

impl DeckStore {
    pub fn new(items: Vec<Restaurant>, energy: u32) -> Self {
        Self {
            deck: items.into(),
            liked: Vec::new(),
            wishlisted: Vec::new(),
            rejected: Vec::new(),
            skipped: Vec::new(),
            energy,
        }
    }

    /// Front of the deck, or `None` once the deck is exhausted.
    pub fn peek_current(&self) -> Option<&Restaurant> {
        self.deck.front()
    }

    /// Whether a classification would currently be accepted.
    pub fn can_classify(&self) -> bool {
        !self.deck.is_empty() && self.energy > 0
    }

    /// Moves the current item into the collection for `outcome`.
    ///
    /// Spends one unit of energy. Refused (and a no-op) when the deck is empty
    /// or energy has run out; the classifier routes those cases to cancel
    /// before getting here.
    pub fn classify(&mut self, outcome: Outcome) -> Option<&Restaurant> {
        if self.energy == 0 {
            warn!(%outcome, "classification refused: out of energy");
            return None;
        }
        let Some(item) = self.deck.pop_front() else {
            warn!(%outcome, "classification refused: deck exhausted");
            return None;
        };
        self.energy = self.energy.saturating_sub(1);
        info!(
            id = item.id,
            name = item.name,
            %outcome,
            energy = self.energy,
            remaining = self.deck.len(),
            "classified"
        );

        let collection = self.collection_mut(outcome);
        collection.push(item);
        collection.last()
    }

    /// Cancel path. Nothing in the store changes; the card just returns to rest.
    pub fn reset(&self) {
        debug!(current = self.peek_current().map(|r| r.id), "gesture cancelled");
    }

    pub fn deck(&self) -> &VecDeque<Restaurant> {
        &self.deck
    }

    pub fn collection(&self, outcome: Outcome) -> &[Restaurant] {
        match outcome {
            Outcome::Like => &self.liked,
            Outcome::Reject => &self.rejected,
            Outcome::Wishlist => &self.wishlisted,
            Outcome::Skip => &self.skipped,
        }
    }

    fn collection_mut(&mut self, outcome: Outcome) -> &mut Vec<Restaurant> {
        match outcome {
            Outcome::Like => &mut self.liked,
            Outcome::Reject => &mut self.rejected,
            Outcome::Wishlist => &mut self.wishlisted,
            Outcome::Skip => &mut self.skipped,
        }
    }

    pub fn liked(&self) -> &[Restaurant] {
        &self.liked
    }

    pub fn wishlisted(&self) -> &[Restaurant] {
        &self.wishlisted
    }

    pub fn rejected(&self) -> &[Restaurant] {
        &self.rejected
    }

    pub fn skipped(&self) -> &[Restaurant] {
        &self.skipped
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty()
    }

    /// Items in the deck plus every outcome collection. Constant over a session.
    pub fn total(&self) -> usize {
        self.deck.len()
            + self.liked.len()
            + self.wishlisted.len()
            + self.rejected.len()
            + self.skipped.len()
    }

    /// Which collection holds the item with `id`, if it has been classified.
    pub fn outcome_of(&self, id: &str) -> Option<Outcome> {
        Outcome::ALL
            .into_iter()
            .find(|&outcome| self.collection(outcome).iter().any(|r| r.id == id))
    }
}
