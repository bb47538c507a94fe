//! Reserved-word recognition via a hand-configured finite automaton.
//!
//! The engine lives in [`automaton`]; [`keywords`] builds the stock
//! reserved-word recognizer that the `autolex` binary drives.

pub mod automaton;
pub mod keywords;

pub use automaton::{AutomatonError, Nfa, Recognition};
