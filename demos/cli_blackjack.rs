//! CLI blackjack demo.
//!
//! Keys: `n` deals a new round, `d` draws, `s` stands, `l` forfeits, `q`
//! quits. Set `RUST_LOG=bjduel=trace` to watch the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjduel::{CardFace, CardView, Command, Game, GameOptions, Phase, Suit, TableSnapshot};

fn main() {
    env_logger::init();
    println!("Blackjack CLI demo (n = new round, d = draw, s = stand, l = forfeit, q = quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    print_table(&game.snapshot());

    loop {
        let command = match prompt_line("> ").as_str() {
            "n" | "new" | "" => Command::StartRound,
            "d" | "draw" => Command::Draw,
            "s" | "stand" => Command::Stand,
            "l" | "forfeit" => Command::Forfeit,
            "q" | "quit" => break,
            _ => {
                println!("Unknown key.");
                continue;
            }
        };

        match game.apply(command) {
            Ok(status) if !status.is_applied() => {
                println!("{}", hint(game.phase()));
            }
            Ok(_) => print_table(&game.snapshot()),
            Err(err) => {
                println!("Engine error: {err}");
                break;
            }
        }
    }

    println!("Final score {}. Goodbye.", game.score());
}

const fn hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle | Phase::Resolved => "Press n to deal a new round.",
        Phase::PlayerTurn => "Draw (d), stand (s) or forfeit (l).",
        Phase::Dealing | Phase::DealerTurn => "The dealer is playing.",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(table: &TableSnapshot) {
    println!("\nScore {}   (deck: {} cards)", table.score, table.cards_remaining);

    let dealer_total = table
        .dealer_total
        .map_or_else(|| "?".to_string(), |total| total.to_string());
    println!("Dealer: {} ({dealer_total})", format_cards(&table.dealer_cards));

    let player_total = table
        .player_total
        .map_or_else(|| "-".to_string(), |total| total.to_string());
    println!("You:    {} ({player_total})", format_cards(&table.player_cards));

    if let Some(banner) = table.banner() {
        println!("\n  {}\n", colorize(banner, "1"));
    }
    println!("{}", hint(table.phase));
}

fn format_cards(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|view| format_face(view.face))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_face(face: CardFace) -> String {
    let CardFace::Up { rank, suit } = face else {
        return colorize("??", "90");
    };

    let (symbol, color_code) = match suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{symbol}", rank.symbol()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
