// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw poker terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

use drawpoker_core::{Game, GameError, Hand, PlayerNames};
use drawpoker_eval::{determine_winner, rank_hand};

pub mod store;
pub mod terminal;

use store::NamesStore;

#[derive(Debug, Parser)]
#[command(name = "drawpoker", version, about = "Five cards draw poker")]
struct Cli {
    /// The players names file, defaults to the user config directory.
    #[arg(long, global = true)]
    names_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays draw rounds in the terminal, the default command.
    Play {
        /// Seed for a repeatable shuffle.
        #[arg(long, short)]
        seed: Option<u64>,
        /// Number of players, overrides the stored names.
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=10))]
        players: Option<u8>,
        /// Cover locked hands until the showdown.
        #[arg(long, short)]
        covered: bool,
    },
    /// Ranks a five cards hand, for example: rank 10h 10s 9d 9c 2h
    Rank {
        /// The hand cards.
        #[arg(required = true)]
        cards: Vec<String>,
        /// Print the ranking as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Finds the winning hands, for example: showdown "Ah Kh Qh Jh Th" "2c 2d 5s 7h 9c"
    Showdown {
        /// The hands, one argument for each hand.
        #[arg(required = true)]
        hands: Vec<String>,
        /// Print the showdown as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Shows or changes the stored players names.
    Names {
        #[command(subcommand)]
        action: Option<NamesAction>,
    },
}

#[derive(Debug, Subcommand)]
enum NamesAction {
    /// Lists the players names.
    List,
    /// Renames a player, players start from 1.
    Set {
        /// The player number.
        player: usize,
        /// The new name.
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Restores the default names.
    Reset {
        /// Number of players.
        #[arg(long, short, default_value_t = PlayerNames::DEFAULT_PLAYERS)]
        players: usize,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let store = NamesStore::new(cli.names_file)?;

    let command = cli.command.unwrap_or(Command::Play {
        seed: None,
        players: None,
        covered: false,
    });

    match command {
        Command::Play {
            seed,
            players,
            covered,
        } => play(&store, seed, players, covered),
        Command::Rank { cards, json } => rank(&cards, json),
        Command::Showdown { hands, json } => showdown(&hands, json),
        Command::Names { action } => names(&store, action.unwrap_or(NamesAction::List)),
    }
}

fn play(store: &NamesStore, seed: Option<u64>, players: Option<u8>, covered: bool) -> Result<()> {
    let mut names = store.load()?;
    if let Some(players) = players.map(usize::from).filter(|&p| p != names.len()) {
        names = PlayerNames::new(players)?;
    }

    let rng = match seed {
        Some(seed) => {
            info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let game = Game::with_rng(names, rng)?;
    terminal::run(game, store, terminal::Options { covered })
}

fn rank(cards: &[String], json: bool) -> Result<()> {
    let hand = cards.join(" ").parse::<Hand>()?;
    let ranked = rank_hand(&hand)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        println!("{hand}: {} {:?}", ranked.name(), ranked.tiebreaker());
    }

    Ok(())
}

fn showdown(hands: &[String], json: bool) -> Result<()> {
    let hands = hands
        .iter()
        .map(|h| h.parse::<Hand>())
        .collect::<Result<Vec<_>, _>>()?;
    let showdown = determine_winner(&hands)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&showdown)?);
        return Ok(());
    }

    for (idx, (hand, ranked)) in hands.iter().zip(showdown.ranked_hands()).enumerate() {
        let label = if showdown.is_winner(idx) { "WINNER" } else { "" };
        let hand = hand.to_string();
        println!("{:>2} {hand:<20} {:<16} {label}", idx + 1, ranked.name());
    }

    Ok(())
}

fn names(store: &NamesStore, action: NamesAction) -> Result<()> {
    match action {
        NamesAction::List => {}
        NamesAction::Set { player, name } => {
            set_name(store, player, &name.join(" "))?;
        }
        NamesAction::Reset { players } => {
            store.save(&PlayerNames::new(players)?)?;
        }
    }

    for (idx, name) in store.load()?.iter().enumerate() {
        println!("{:>2} {name}", idx + 1);
    }

    Ok(())
}

// Renames a stored player, `player` starts from 1.
fn set_name(store: &NamesStore, player: usize, name: &str) -> Result<()> {
    if player == 0 {
        bail!("Players start from 1");
    }

    let mut names = store.load()?;
    names.rename(player - 1, name).map_err(|e| match e {
        GameError::InvalidPlayer(p) => anyhow!("No player {}, there are {}", p + 1, names.len()),
        e => e.into(),
    })?;

    store.save(&names)
}
