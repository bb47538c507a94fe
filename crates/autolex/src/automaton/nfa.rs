//! The automaton engine: construction and longest-accepted-prefix
//! simulation.

use crate::automaton::names::NameTable;
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{self, EPSILON, SymbolId, sym};
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// Errors raised during automaton construction and simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A second state was marked initial. Carries the name of the state
    /// already holding that role.
    #[error("initial state is already defined as {0}")]
    DuplicateInitialState(String),

    /// A transition was added from a state that was never declared.
    #[error("state {0} does not exist")]
    UnknownSourceState(String),

    /// Simulation was requested with no valid initial state configured.
    #[error("no initial state is defined, or the initial state is invalid")]
    NoInitialState,
}

/// Outcome of simulating one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// Whether the input was accepted.
    pub accepted: bool,
    /// The accepted word, empty when rejected. Acceptance requires the walk
    /// to consume every character, so an accepted word always equals the
    /// full input.
    pub word: String,
}

impl Recognition {
    fn rejected() -> Self {
        Self {
            accepted: false,
            word: String::new(),
        }
    }
}

/// Outgoing transitions of one state: symbol -> ordered destination list.
type TransitionTable = IndexMap<SymbolId, Vec<StateId>>;

/// A non-deterministic finite automaton specialized for recognizing a fixed
/// word list by longest accepted prefix.
///
/// The transition relation may hold several destinations per
/// `(state, symbol)` pair, but simulation only ever follows the first one
/// in insertion order; the extra destinations are stored, and appear in
/// the rendering, but are never walked. Empty-symbol transitions are
/// likewise stored verbatim and can never be selected by the simulation
/// loop, which keys its lookups by input character.
#[derive(Debug, Clone, Default)]
pub struct Nfa {
    names: NameTable,
    /// Outgoing transitions per declared state, in declaration order.
    tables: IndexMap<StateId, TransitionTable>,
    initial: Option<StateId>,
    accepting: StateSet,
}

impl Nfa {
    /// Create a new automaton with no states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    ///
    /// Re-declaring a known state replaces its transition table without
    /// error and keeps its position in declaration order. Declaring a
    /// second initial state fails, but the table replacement has already
    /// happened by then and is not rolled back.
    pub fn add_state(
        &mut self,
        id: &str,
        is_initial: bool,
        is_accepting: bool,
    ) -> Result<(), AutomatonError> {
        let state = self.names.intern(id);
        self.tables.insert(state, TransitionTable::new());

        if is_initial {
            if let Some(existing) = self.initial {
                return Err(AutomatonError::DuplicateInitialState(
                    self.names.name(existing).to_owned(),
                ));
            }
            self.initial = Some(state);
        }

        if is_accepting {
            self.accepting.insert(state);
        }

        log::trace!("declared state {id} (initial: {is_initial}, accepting: {is_accepting})");
        Ok(())
    }

    /// Add a transition from `from` to `to` on `symbol`.
    ///
    /// The source must be a declared state. The destination is recorded as
    /// a raw identifier and deliberately not validated: a destination that
    /// is never declared has no outgoing transitions, and a walk reaching
    /// it stops there.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        symbol: SymbolId,
    ) -> Result<(), AutomatonError> {
        let src = self
            .names
            .get(from)
            .filter(|s| self.tables.contains_key(s))
            .ok_or_else(|| AutomatonError::UnknownSourceState(from.to_owned()))?;
        let dst = self.names.intern(to);

        if let Some(table) = self.tables.get_mut(&src) {
            table.entry(symbol).or_default().push(dst);
        }
        Ok(())
    }

    /// Add an empty-symbol transition from `from` to `to`.
    ///
    /// Stored like any other transition; the simulation loop never selects
    /// it.
    pub fn add_empty_transition(&mut self, from: &str, to: &str) -> Result<(), AutomatonError> {
        self.add_transition(from, to, EPSILON)
    }

    /// Run the automaton over `input`, looking for the longest accepted
    /// prefix.
    ///
    /// The walk is deterministic: at each position the first destination
    /// registered for the current state and input character is taken, and
    /// a missing transition stops the walk. The input is accepted only
    /// when the last accepting state was entered on the final character
    /// with nothing left unconsumed.
    pub fn simulate(&self, input: &str) -> Result<Recognition, AutomatonError> {
        let start = match self.initial {
            Some(state) if self.tables.contains_key(&state) => state,
            _ => return Err(AutomatonError::NoInitialState),
        };

        let chars: Vec<char> = input.chars().collect();
        let mut current = start;
        let mut last_accept: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let symbol = sym(chars[i]);
            let Some(&next) = self
                .tables
                .get(&current)
                .and_then(|table| table.get(&symbol))
                .and_then(|dests| dests.first())
            else {
                log::trace!(
                    "walk stuck in {} on {:?} at position {i}",
                    self.names.name(current),
                    chars[i]
                );
                break;
            };

            current = next;
            i += 1;
            if self.accepting.contains(current) {
                last_accept = Some(i - 1);
            }
        }

        let Some(accept_at) = last_accept else {
            return Ok(Recognition::rejected());
        };
        if accept_at + 1 < chars.len() {
            // Acceptance happened, but characters remained after it.
            return Ok(Recognition::rejected());
        }

        let word: String = chars[..=accept_at].iter().collect();
        log::debug!("accepted {word:?} in {}", self.names.name(current));
        Ok(Recognition {
            accepted: true,
            word,
        })
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NFA:")?;

        let initial = self.initial.map_or("none", |s| self.names.name(s));
        writeln!(f, "initial state: {initial}")?;

        write!(f, "accepting states: {{")?;
        for (n, state) in self.accepting.iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.names.name(state))?;
        }
        writeln!(f, "}}")?;

        writeln!(f, "transitions:")?;
        for (&state, table) in &self.tables {
            for (&symbol, dests) in table {
                write!(f, "  {} --{}--> [", self.names.name(state), symbol::label(symbol))?;
                for (n, &dst) in dests.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.names.name(dst))?;
                }
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}
