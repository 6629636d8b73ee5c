//! CLI hold'em example.
//!
//! Every seat is driven from the keyboard; the engine has no opponents of
//! its own. Set `RUST_LOG=debug` to follow the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use holdem_rs::{ActionKind, ActionOutcome, Card, Game, Player, RoundState, TableOptions};

fn main() {
    env_logger::init();
    println!("Hold'em CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(TableOptions::default(), seed);

    loop {
        if let Err(err) = game.start_new_game() {
            println!("Deal error: {err}");
            return;
        }

        while game.round_state() == RoundState::Playing {
            print_table(&game);
            println!("{}", format_actions(&game));

            let input = prompt_line("Action: ");
            let mut words = input.split_whitespace();
            let Some(word) = words.next() else {
                continue;
            };
            if word == "q" || word == "quit" {
                return;
            }

            let Ok(kind) = word.parse::<ActionKind>() else {
                println!("Unknown action.");
                continue;
            };
            let amount = if kind == ActionKind::Raise {
                let requested = words
                    .next()
                    .and_then(|value| value.parse::<usize>().ok())
                    .unwrap_or_else(|| game.min_raise());
                Some(game.clamp_raise(requested))
            } else {
                None
            };

            match game.perform_action(kind, amount) {
                Ok(report) => {
                    if let ActionOutcome::Ignored(reason) = report.outcome {
                        println!("Action had no effect: {reason}");
                    }
                    if let Some(phase) = report.advanced_to {
                        println!("--- {phase} ---");
                    }
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        print_table(&game);
        println!("Hand over in the {} with {} in the pot.", game.phase(), game.pot());

        if let Some(winner) = prompt_winner(&game) {
            match game.award_pot(winner) {
                Ok(award) => println!("Seat {} takes {}.", award.winner, award.amount),
                Err(err) => println!("Award error: {err}"),
            }
        }

        if prompt_line("Deal another hand? (y/n): ") != "y" {
            println!("Goodbye.");
            return;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_winner(game: &Game) -> Option<u8> {
    loop {
        let input = prompt_line("Winning seat (blank to skip): ");
        if input.is_empty() {
            return None;
        }
        match input.parse::<u8>() {
            Ok(seat) if game.player(seat).is_some() => return Some(seat),
            _ => println!("Please enter a seat number."),
        }
    }
}

fn print_table(game: &Game) {
    println!(
        "\nPot: {} | Bet: {} | Deck: {} cards",
        game.pot(),
        game.current_bet(),
        game.cards_remaining()
    );
    println!("Board: {}", format_cards(game.community_cards()));

    let current = game.current_player();
    let reveal = game.round_state() == RoundState::Finished;
    for player in game.players() {
        let marker = if Some(player.id) == current { "*" } else { " " };
        println!("{marker} {}", format_player(player, reveal));
    }
    println!();
}

fn format_player(player: &Player, reveal: bool) -> String {
    let cards = if reveal || player.is_human() {
        format_cards(&player.hand)
    } else {
        "?? ??".to_string()
    };
    let status = if player.has_folded { " (folded)" } else { "" };
    format!(
        "[{}] {:<8} {} | chips {} | bet {} | {}W-{}L{}",
        player.id,
        player.name,
        cards,
        player.chips,
        player.current_bet,
        player.hands_won,
        player.hands_lost,
        status
    )
}

fn format_actions(game: &Game) -> String {
    let view = game.betting_view();
    let call = format!("call {}", view.call_amount);
    let raise = format!("raise <{}-{}>", view.min_raise, view.max_raise);
    let parts = [
        format_action("fold", true),
        format_action("check", view.can_check),
        format_action(&call, view.can_call),
        format_action(&raise, view.can_raise),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, allowed: bool) -> String {
    if allowed {
        colorize(label, "32")
    } else {
        colorize(label, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}
