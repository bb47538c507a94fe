use autolex::keywords;

fn main() {
    env_logger::init();

    let nfa = match keywords::reserved_words() {
        Ok(nfa) => nfa,
        Err(e) => {
            eprintln!("failed to configure automaton: {e}");
            std::process::exit(1);
        }
    };

    println!("=== Automaton configuration ===");
    println!("{nfa}");

    let samples = [
        "if", "int", "else", "while", "def", "elif", "intt", " ", "i", "i+", "i++",
    ];
    println!("=== Recognition results ===");
    for sample in samples {
        match nfa.simulate(sample) {
            Ok(run) if run.accepted => println!("{sample:?} -> accepted"),
            Ok(_) => println!("{sample:?} -> rejected"),
            Err(e) => eprintln!("{sample:?} -> error: {e}"),
        }
    }
}
