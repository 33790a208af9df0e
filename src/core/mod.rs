//! Core value types shared by the catalog, the roster and the loan
//! coordinator.
//!
//! - The closed `Genre` set
//! - The per-pairing loan state machine (`LoanState`, `LoanAction`)
//! - The append-only `LoanLedger`
//!
//! Everything here is pure: no I/O, no clock, no global state.

mod genre;
mod history;
mod state;

pub use genre::{Genre, ParseGenreError};
pub use history::{LoanEvent, LoanLedger};
pub use state::{LoanAction, LoanState};
