//! Deletion lifecycle of one result item: normal → pending → removed, or
//! back to normal when the request fails.

use crate::inflight::InFlight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Normal,
    Pending,
    Removed,
}

/// Outcome of a settled request, carrying what the page needs to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    /// Drop the item and recount.
    Removed(T),
    /// Clear the pending marker and tell the user.
    Reverted(E),
}

/// One outstanding deletion. Holds the id in the in-flight set from
/// [`Deletion::begin`] until [`Deletion::finish`].
#[derive(Debug)]
pub struct Deletion {
    id: String,
    state: ItemState,
}

impl Deletion {
    /// `None` when a request for `id` is already outstanding.
    pub fn begin(in_flight: &mut InFlight, id: &str) -> Option<Self> {
        in_flight.begin(id).then(|| Self {
            id: id.to_owned(),
            state: ItemState::Pending,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn settle<T, E>(&mut self, result: Result<T, E>) -> Settled<T, E> {
        match result {
            Ok(v) => {
                self.state = ItemState::Removed;
                Settled::Removed(v)
            }
            Err(e) => {
                self.state = ItemState::Normal;
                Settled::Reverted(e)
            }
        }
    }

    /// Release the id. Returns the state the item ended in.
    pub fn finish(self, in_flight: &mut InFlight) -> ItemState {
        in_flight.finish(&self.id);
        self.state
    }
}
