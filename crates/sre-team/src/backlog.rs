//! `Backlog` — the team's FIFO queue of pending operational work.
//!
//! Items are served strictly in arrival order.  The only other way an item
//! leaves the queue is [`Backlog::relieve`], which cancels the *oldest*
//! items, so the relative order of items that are eventually served never
//! changes.

use std::collections::VecDeque;

use sre_core::{ItemId, Tick};
use sre_policy::BacklogState;

/// One unit of interrupt-driven work waiting for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationalItem {
    /// Sequence number; strictly increasing in arrival order.
    pub id:      ItemId,
    pub arrival: Tick,
    /// Ticks of work, always ≥ 1.
    pub size:    u32,
}

/// FIFO queue of [`OperationalItem`]s.
#[derive(Debug, Default)]
pub struct Backlog {
    items:         VecDeque<OperationalItem>,
    next_id:       u64,
    /// Cached sum of pending item sizes.
    pending_ticks: u64,
}

impl Backlog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item that arrived at `arrival`.  A zero size is raised to 1.
    pub fn push(&mut self, arrival: Tick, size: u32) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let size = size.max(1);
        self.items.push_back(OperationalItem { id, arrival, size });
        self.pending_ticks += size as u64;
        id
    }

    /// Remove and return the oldest item.
    pub fn pop(&mut self) -> Option<OperationalItem> {
        let item = self.items.pop_front()?;
        self.pending_ticks -= item.size as u64;
        Some(item)
    }

    /// The oldest item, if any.
    pub fn peek(&self) -> Option<&OperationalItem> {
        self.items.front()
    }

    /// Cancel up to `count` of the oldest items; returns how many went.
    pub fn relieve(&mut self, count: u32) -> u32 {
        let mut removed = 0;
        while removed < count && self.pop().is_some() {
            removed += 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total ticks of work waiting in the queue.
    pub fn pending_ticks(&self) -> u64 {
        self.pending_ticks
    }

    /// The view handed to work policies.
    pub fn state(&self) -> BacklogState {
        BacklogState {
            len:            self.items.len(),
            oldest_arrival: self.items.front().map(|i| i.arrival),
        }
    }
}
