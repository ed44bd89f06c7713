//! Operations for the runplan application.
//!
//! Each operation is a pure function over an in-memory grid; fetching the
//! grid and printing the result are left to the caller.

pub mod today;

pub use today::{lookup_today, render_today, Lookup, TodayEntry, TodayReport};
