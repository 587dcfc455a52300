use std::env;
use std::process::ExitCode;

use wordcross::{find_crossword, AnswerSheet, Dictionary, RandomOrder, Slot, WordStore};

fn main() -> ExitCode {
    let seed = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        None => 0,
        Some(Ok(seed)) => seed,
        Some(Err(_)) => {
            eprintln!("Usage: wordcross-demo [SEED]");
            return ExitCode::FAILURE;
        }
    };

    let dictionary = Dictionary::from_iter([
        ("house", "tŷ"),
        ("wool", "gwlân"),
        ("cave", "ogof"),
        ("fire", "tân"),
        ("bread", "bara"),
        ("dragon", "draig"),
        ("cat", "cath"),
        ("water", "dŵr"),
        ("mountain", "mynydd"),
        ("love", "cariad"),
    ]);

    let Some(puzzle) = find_crossword(&dictionary.snapshot(), &mut RandomOrder::seeded(seed)).into_puzzle() else {
        println!("No crossword available with {} words", dictionary.len());
        return ExitCode::SUCCESS;
    };

    for slot in [Slot::Main, Slot::First, Slot::Second] {
        println!("{:>6}: {}", slot, puzzle.word(slot));
    }
    println!();

    let mut sheet = AnswerSheet::new(&puzzle);
    print!("{}", sheet);
    println!();

    // answer the main word only
    let layout = puzzle.layout();
    let main_letters = puzzle.word(Slot::Main).letters();
    for (cell, letter) in layout.cells(Slot::Main).iter().zip(main_letters) {
        if sheet.enter(*cell, letter).is_err() {
            eprintln!("cell {} cannot be answered", cell);
            return ExitCode::FAILURE;
        }
    }

    print!("{}", sheet);
    println!("\nScore: {}", sheet.score());
    println!("\nSolution:\n{}", puzzle);

    ExitCode::SUCCESS
}
