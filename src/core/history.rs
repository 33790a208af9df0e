//! Append-only record of loan transitions.
//!
//! `record` returns a new ledger with the event appended and leaves the
//! original untouched. The lending engine appends in place through `push`,
//! since it already knows both states of the pairing.

use super::state::{LoanAction, LoanState};
use serde::{Deserialize, Serialize};

/// Record of one successful borrow or return.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanEvent {
    /// Position in the ledger, starting at 1
    pub seq: u64,
    /// Title involved
    pub isbn: String,
    /// Member involved
    pub member_id: String,
    /// What happened
    pub action: LoanAction,
    /// State of the pairing before the action
    pub from: LoanState,
    /// State of the pairing after the action
    pub to: LoanState,
}

/// Ordered ledger of loan events.
///
/// # Example
///
/// ```rust
/// use libris::core::{LoanAction, LoanLedger, LoanState};
///
/// let ledger = LoanLedger::new();
/// let ledger = ledger.record("ISBN001", "MM001", LoanAction::Borrow).unwrap();
///
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.state_of("ISBN001", "MM001"), LoanState::Borrowed);
/// assert_eq!(ledger.state_of("ISBN001", "MM002"), LoanState::NotBorrowed);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanLedger {
    events: Vec<LoanEvent>,
}

impl LoanLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Record an action, returning a new ledger.
    ///
    /// The `from` state is the pairing's last recorded state. Returns `None`
    /// when the action is not legal from that state, such as a return of a
    /// title that was never borrowed.
    pub fn record(&self, isbn: &str, member_id: &str, action: LoanAction) -> Option<Self> {
        let from = self.state_of(isbn, member_id);
        let to = from.apply(action)?;
        let mut next = self.clone();
        next.push(isbn, member_id, action, from, to);
        Some(next)
    }

    /// Append an already-applied transition in place.
    pub(crate) fn push(
        &mut self,
        isbn: &str,
        member_id: &str,
        action: LoanAction,
        from: LoanState,
        to: LoanState,
    ) {
        let seq = self.events.len() as u64 + 1;
        self.events.push(LoanEvent {
            seq,
            isbn: isbn.to_string(),
            member_id: member_id.to_string(),
            action,
            from,
            to,
        });
    }

    /// Current state of a pairing according to the ledger.
    pub fn state_of(&self, isbn: &str, member_id: &str) -> LoanState {
        self.events
            .iter()
            .rev()
            .find(|event| event.isbn == isbn && event.member_id == member_id)
            .map(|event| event.to)
            .unwrap_or_default()
    }

    /// All events of one pairing, oldest first.
    pub fn events_for<'a>(
        &'a self,
        isbn: &'a str,
        member_id: &'a str,
    ) -> impl Iterator<Item = &'a LoanEvent> + 'a {
        self.events
            .iter()
            .filter(move |event| event.isbn == isbn && event.member_id == member_id)
    }

    /// States traversed by one pairing: the starting state, then the `to`
    /// state of each event. Empty if the pairing never appears.
    pub fn path(&self, isbn: &str, member_id: &str) -> Vec<LoanState> {
        let mut events = self.events_for(isbn, member_id).peekable();
        let mut path = Vec::new();
        if let Some(first) = events.peek() {
            path.push(first.from);
        }
        path.extend(events.map(|event| event.to));
        path
    }

    /// Get all events.
    pub fn events(&self) -> &[LoanEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
