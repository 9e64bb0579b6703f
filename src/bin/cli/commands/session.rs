use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::app::App;
use crate::render::terminal;

/// Interactive stdin loop over a single in-memory deck.
///
/// Mirrors the buttons of a card table: add, flip, flip-all, shuffle,
/// plus list and stats for inspection.
pub fn run(app: &mut App, initial_cards: usize, use_color: bool) -> Result<()> {
    for _ in 0..initial_cards {
        app.add_card(None)?;
    }

    println!("Arcana deck session. Type 'help' for commands.\n");
    render_deck(app, use_color);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd {
            "add" => {
                let title = if rest.is_empty() { None } else { Some(rest) };
                match app.add_card(title) {
                    Ok(card) => println!("Added \"{}\"", card.title),
                    Err(e) => println!("{}", e),
                }
            }
            "flip" => match rest.parse::<usize>() {
                Ok(position) => match app.flip_position(position) {
                    Ok(card) => println!(
                        "\"{}\" is now {}",
                        card.title,
                        if card.flipped { "face down" } else { "face up" }
                    ),
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Usage: flip <card number>"),
            },
            "flip-all" => {
                let flipped = app.flip_all();
                println!("Flipped {} cards", flipped);
            }
            "shuffle" => {
                app.shuffle();
                println!("Shuffled the deck");
                render_deck(app, use_color);
            }
            "list" => render_deck(app, use_color),
            "stats" => println!("{}", terminal::render_stats(&app.stats())),
            "help" => print_help(),
            "quit" | "exit" | "q" => break,
            _ => println!("Unknown command '{}'. Type 'help'.", cmd),
        }
    }

    Ok(())
}

fn render_deck(app: &App, use_color: bool) {
    let cards = app.store.all();
    if cards.is_empty() {
        println!("The deck is empty. 'add' deals a card.");
        return;
    }

    for (idx, card) in cards.iter().enumerate() {
        println!("{}", terminal::render_card(idx + 1, card, use_color));
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add [title]    deal a new card (random title if omitted)");
    println!("  flip <number>  flip one card over");
    println!("  flip-all       flip every card");
    println!("  shuffle        reorder the deck randomly");
    println!("  list           show the deck");
    println!("  stats          show deck counters");
    println!("  quit           leave the session");
}
