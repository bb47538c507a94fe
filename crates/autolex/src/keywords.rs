//! The stock reserved-word automaton.
//!
//! Recognizes the C reserved words `if`, `int`, `else` and `while`, the
//! bare identifier `i`, and the increment chain `i++`. `i+` deliberately
//! lands in a non-accepting state.

use crate::automaton::{AutomatonError, Nfa, sym};

/// Build the reserved-word automaton as an owned value.
///
/// States follow the historical `q0`..`q16` layout: `q0` is initial, the
/// last state of each recognized word is accepting, and `q4` carries an
/// empty-symbol transition to `q5` that the simulation can never take.
pub fn reserved_words() -> Result<Nfa, AutomatonError> {
    let mut nfa = Nfa::new();

    nfa.add_state("q0", true, false)?;

    // "if" ("i" alone is already accepted)
    nfa.add_state("q1", false, true)?;
    nfa.add_state("q2", false, true)?;

    // "int"
    nfa.add_state("q3", false, false)?;
    nfa.add_state("q4", false, true)?;
    nfa.add_state("q5", false, false)?;

    // "else"
    nfa.add_state("q6", false, false)?;
    nfa.add_state("q7", false, false)?;
    nfa.add_state("q8", false, false)?;
    nfa.add_state("q9", false, true)?;

    // "while"
    nfa.add_state("q10", false, false)?;
    nfa.add_state("q11", false, false)?;
    nfa.add_state("q12", false, false)?;
    nfa.add_state("q13", false, false)?;
    nfa.add_state("q14", false, true)?;

    // "i+" / "i++"
    nfa.add_state("q15", false, false)?;
    nfa.add_state("q16", false, true)?;

    nfa.add_transition("q0", "q1", sym('i'))?;
    nfa.add_transition("q1", "q2", sym('f'))?;
    nfa.add_transition("q1", "q3", sym('n'))?;
    nfa.add_transition("q3", "q4", sym('t'))?;
    nfa.add_empty_transition("q4", "q5")?;

    nfa.add_transition("q0", "q6", sym('e'))?;
    nfa.add_transition("q6", "q7", sym('l'))?;
    nfa.add_transition("q7", "q8", sym('s'))?;
    nfa.add_transition("q8", "q9", sym('e'))?;

    nfa.add_transition("q0", "q10", sym('w'))?;
    nfa.add_transition("q10", "q11", sym('h'))?;
    nfa.add_transition("q11", "q12", sym('i'))?;
    nfa.add_transition("q12", "q13", sym('l'))?;
    nfa.add_transition("q13", "q14", sym('e'))?;

    nfa.add_transition("q1", "q15", sym('+'))?;
    nfa.add_transition("q15", "q16", sym('+'))?;

    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulate(input: &str) -> (bool, String) {
        let nfa = reserved_words().unwrap();
        let run = nfa.simulate(input).unwrap();
        (run.accepted, run.word)
    }

    #[test]
    fn test_reserved_words_accepted() {
        for word in ["if", "int", "else", "while", "i", "i++"] {
            let (accepted, accepted_word) = simulate(word);
            assert!(accepted, "{word:?} should be accepted");
            assert_eq!(accepted_word, word);
        }
    }

    #[test]
    fn test_prefix_dead_end_rejected() {
        // "elif" follows the "else" branch up to "el", then gets stuck on
        // 'i' before the string ends.
        assert_eq!(simulate("elif"), (false, String::new()));
    }

    #[test]
    fn test_trailing_character_rejected() {
        // "intt" reaches acceptance at "int" but leaves a trailing 't'.
        assert_eq!(simulate("intt"), (false, String::new()));
    }

    #[test]
    fn test_unmapped_symbols_rejected() {
        // Neither ' ' nor 'd' leaves the initial state.
        assert_eq!(simulate(" "), (false, String::new()));
        assert_eq!(simulate("def"), (false, String::new()));
    }

    #[test]
    fn test_half_increment_rejected() {
        // q15 is not accepting, so "i+" stops one state short.
        assert_eq!(simulate("i+"), (false, String::new()));
    }

    #[test]
    fn test_empty_transition_has_no_effect() {
        // The q4 --ε--> q5 transition never fires: "int" is accepted in q4
        // and nothing reachable only through q5 exists.
        assert_eq!(simulate("int"), (true, "int".to_owned()));
        assert_eq!(simulate("ints"), (false, String::new()));
    }

    #[test]
    fn test_description_lists_configuration() {
        let nfa = reserved_words().unwrap();
        let text = nfa.to_string();
        assert!(text.contains("initial state: q0"));
        assert!(text.contains("  q0 --i--> [q1]"));
        assert!(text.contains("  q4 ----> [q5]"));
        assert_eq!(text, nfa.to_string());
    }
}
