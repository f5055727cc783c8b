//! Command implementations for the GloboTicket CLI

pub mod check;
pub mod completions;
pub mod locate;
pub mod show;
