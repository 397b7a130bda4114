// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::{Result, anyhow, bail};
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::{
    io::{self, BufRead},
    str::FromStr,
};

use drawpoker_core::{CardFace, Game, GameError, Phase};

use crate::store::NamesStore;

const HELP: &str = "\
Commands, players and card positions start from 1:
  r <player> <pos>...  replace the cards at the given positions and lock
  k <player>           keep all the cards and lock
  e                    end the round now and show the winners
  d                    deal a new round
  n <player> <name>    rename a player
  h                    show this help
  q                    quit";

/// Terminal display options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Cover locked hands until the showdown.
    pub covered: bool,
}

/// A user command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Replace { player: usize, positions: Vec<usize> },
    Keep(usize),
    EndNow,
    Deal,
    Rename { player: usize, name: String },
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let Some(cmd) = words.next() else {
            bail!("Empty command, type h for help");
        };

        let cmd = match cmd.to_ascii_lowercase().as_str() {
            "r" | "replace" => {
                let player = parse_index(words.next(), "player")?;
                let positions = words
                    .map(|w| parse_index(Some(w), "card position"))
                    .collect::<Result<Vec<_>>>()?;
                if positions.is_empty() {
                    bail!("Replace needs at least one card position");
                }

                Command::Replace { player, positions }
            }
            "k" | "keep" => Command::Keep(parse_index(words.next(), "player")?),
            "e" | "end" => Command::EndNow,
            "d" | "deal" => Command::Deal,
            "n" | "name" => {
                let player = parse_index(words.next(), "player")?;
                let name = words.collect::<Vec<_>>().join(" ");
                Command::Rename { player, name }
            }
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            other => bail!("Unknown command '{other}', type h for help"),
        };

        Ok(cmd)
    }
}

// Parses a one based index typed by the user.
fn parse_index(word: Option<&str>, what: &str) -> Result<usize> {
    let word = word.ok_or_else(|| anyhow!("Missing {what}"))?;
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => bail!("Invalid {what} '{word}'"),
    }
}

/// Runs the terminal loop on stdin and stdout.
pub fn run(mut game: Game, store: &NamesStore, options: Options) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(&mut game, Some(store), options, stdin.lock(), &mut stdout)
}

fn run_loop(
    game: &mut Game,
    store: Option<&NamesStore>,
    options: Options,
    input: impl BufRead,
    w: &mut impl io::Write,
) -> Result<()> {
    print_help(w)?;
    print_table(w, game, options)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(w)?,
            Ok(cmd) => match apply(game, store, cmd) {
                Ok(()) => print_table(w, game, options)?,
                Err(e) => print_error(w, &e)?,
            },
            Err(e) => print_error(w, &e)?,
        }
    }

    Ok(())
}

fn apply(game: &mut Game, store: Option<&NamesStore>, cmd: Command) -> Result<()> {
    let rename = matches!(cmd, Command::Rename { .. });
    let res = match cmd {
        Command::Replace { player, positions } => {
            game.replace(player, &positions).map(|_| ())
        }
        Command::Keep(player) => game.lock(player).map(|_| ()),
        Command::EndNow => game.end_now().map(|_| ()),
        Command::Deal => game.deal(),
        Command::Rename { player, name } => game.rename(player, &name),
        Command::Help | Command::Quit => Ok(()),
    };

    if let Err(e) = res {
        return Err(user_error(game, e));
    }

    if let Some(store) = store.filter(|_| rename) {
        store.save(game.names())?;
    }

    Ok(())
}

// Game errors use zero based indices, show them the way the user typed them.
fn user_error(game: &Game, e: GameError) -> anyhow::Error {
    use drawpoker_core::{CardsError, GameError::*};

    let name = |p: usize| game.names().name(p).unwrap_or("?").to_string();
    match e {
        InvalidPlayer(p) => anyhow!("No player {}, there are {}", p + 1, game.names().len()),
        HandLocked(p) => anyhow!("{} hand is locked", name(p)),
        Cards(CardsError::InvalidPosition(pos)) => {
            anyhow!("Invalid card position {}, positions go from 1 to 5", pos + 1)
        }
        Cards(CardsError::DuplicatePosition(pos)) => {
            anyhow!("Card position {} repeated", pos + 1)
        }
        e => e.into(),
    }
}

fn print_help(w: &mut impl io::Write) -> Result<()> {
    queue!(w, style::PrintStyledContent(HELP.dark_cyan()), style::Print("\n"))?;
    w.flush()?;
    Ok(())
}

fn print_error(w: &mut impl io::Write, e: &anyhow::Error) -> Result<()> {
    let text = format!("{e}");
    queue!(w, style::PrintStyledContent(text.red()), style::Print("\n"))?;
    w.flush()?;
    Ok(())
}

fn print_table(w: &mut impl io::Write, game: &Game, options: Options) -> Result<()> {
    queue!(w, style::Print("\n"))?;

    for (player, (name, hand)) in game.names().iter().zip(game.hands()).enumerate() {
        let covered = options.covered && game.phase() == Phase::Draw && game.is_locked(player);
        let drawn = game.drawn(player);

        queue!(w, style::Print(format!("{:>2} {:<12.12} ", player + 1, name)))?;

        for (pos, &card) in hand.iter().enumerate() {
            let face = if covered {
                CardFace::Back
            } else {
                CardFace::Up(card)
            };
            print_card(w, face, drawn.contains(&pos))?;
        }

        print_status(w, game, player)?;
        queue!(w, style::Print("\n"))?;
    }

    let footer = match game.result() {
        Some(showdown) => {
            let names = showdown
                .winners()
                .iter()
                .filter_map(|&p| game.names().name(p))
                .collect::<Vec<_>>()
                .join(", ");
            let hand = showdown.winning_hand().name();
            if showdown.is_tie() {
                format!("Tie between {names} with {hand}, type d to deal")
            } else {
                format!("{names} wins with {hand}, type d to deal")
            }
        }
        None => format!("{} cards in the deck", game.deck_count()),
    };

    queue!(
        w,
        style::PrintStyledContent(footer.as_str().dark_green()),
        style::Print("\n")
    )?;

    w.flush()?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, face: CardFace, drawn: bool) -> Result<()> {
    let text = format!("{:>3}", face.to_string());
    let content = match face {
        CardFace::Up(card) if card.suit().is_red() => text.red(),
        CardFace::Up(_) => text.stylize(),
        CardFace::Back => text.dark_grey(),
    };

    // Drawn cards are underlined.
    let content = if drawn { content.underlined() } else { content };

    queue!(w, style::PrintStyledContent(content), style::Print(" "))?;

    Ok(())
}

fn print_status(w: &mut impl io::Write, game: &Game, player: usize) -> Result<()> {
    let Some(showdown) = game.result() else {
        let status = match game.drawn(player).len() {
            _ if !game.is_locked(player) => String::new(),
            0 => "kept".to_string(),
            n => format!("drew {n}"),
        };
        queue!(w, style::PrintStyledContent(status.dark_green()))?;
        return Ok(());
    };

    let hand = showdown.ranked_hands()[player].name();
    if showdown.is_winner(player) {
        let text = format!("{hand:<16} WINNER");
        queue!(w, style::PrintStyledContent(text.green().bold()))?;
    } else {
        queue!(w, style::PrintStyledContent(hand.dark_green()))?;
    }

    Ok(())
}
