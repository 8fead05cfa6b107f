//! Orders: lifecycle engine, transition rules, filtering and creation

mod board;
mod draft;
mod filter;
mod transition;

pub use board::OrderBoard;
pub use draft::OrderDraft;
pub use filter::OrderFilter;
pub use transition::{AllowAll, TransitionPolicy, TransitionTable, prepare_status_change};
