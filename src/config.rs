use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use enum_iterator::{all, Sequence};
use log::LevelFilter;

use crate::prompt;

pub const MIN_STICKS: usize = 10;
pub const MAX_STICKS: usize = 100;
pub const TRAINING_ROUNDS: usize = 1000;
pub const HAT_CONTENTS_FILE: &str = "hat-contents.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Sequence)]
pub enum Mode {
    /// Play against a friend
    Friend,
    /// Play against the computer
    Computer,
    /// Play against the trained computer
    Trained,
    /// Train the computer and write its hats without playing
    Train,
}

impl Mode {
    pub fn default_rounds(&self) -> usize {
        match self {
            Mode::Friend | Mode::Computer => 0,
            Mode::Trained | Mode::Train => TRAINING_ROUNDS,
        }
    }

    // Label in the interactive menu, batch modes are not listed
    fn menu_label(&self) -> Option<&'static str> {
        match self {
            Mode::Friend => Some("Play against a friend"),
            Mode::Computer => Some("Play against the computer"),
            Mode::Trained => Some("Play against the trained computer"),
            Mode::Train => None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sticks", about = "The Game of Sticks against a computer that learns")]
pub struct Args {
    /// Sticks on the table initially (10-100), asked for when missing
    #[arg(long, value_parser = parse_sticks)]
    pub sticks: Option<usize>,
    /// Who to play against, asked for when missing
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Training games before play (defaults to 0 or 1000 depending on the mode)
    #[arg(long)]
    pub rounds: Option<usize>,
    /// Seed for the computer's random draws
    #[arg(long)]
    pub seed: Option<u64>,
    /// Where to write the trained hat contents
    #[arg(long, default_value = HAT_CONTENTS_FILE)]
    pub output: PathBuf,
    /// Also write the trained hats as json
    #[arg(long)]
    pub json: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
    /// Also log to this file at debug level
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Everything needed to run a session once the prompts are answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sticks: usize,
    pub mode: Mode,
    pub rounds: usize,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub json: Option<PathBuf>,
}

impl Args {
    pub fn settings(&self) -> Result<Settings> {
        let sticks = match self.sticks {
            Some(sticks) => sticks,
            None => ask_sticks()?,
        };
        let mode = match self.mode {
            Some(mode) => mode,
            None => ask_mode()?,
        };
        self.settings_with(sticks, mode)
    }

    fn settings_with(&self, sticks: usize, mode: Mode) -> Result<Settings> {
        ensure!(
            mode != Mode::Friend || self.rounds.is_none(),
            "--rounds only applies when the computer plays"
        );
        Ok(Settings {
            sticks,
            mode,
            rounds: self.rounds.unwrap_or_else(|| mode.default_rounds()),
            seed: self.seed,
            output: self.output.clone(),
            json: self.json.clone(),
        })
    }
}

fn check_sticks(sticks: usize) -> Result<(), String> {
    match (MIN_STICKS..=MAX_STICKS).contains(&sticks) {
        true => Ok(()),
        false => Err(format!(
            "Please enter a number between {} and {}",
            MIN_STICKS, MAX_STICKS
        )),
    }
}

fn parse_sticks(s: &str) -> Result<usize, String> {
    let sticks = s.parse::<usize>().map_err(|e| e.to_string())?;
    check_sticks(sticks)?;
    Ok(sticks)
}

fn ask_sticks() -> Result<usize> {
    prompt::ask(
        &format!(
            "How many sticks are there on the table initially ({}-{})?",
            MIN_STICKS, MAX_STICKS
        ),
        |sticks: &usize| check_sticks(*sticks),
    )
}

fn ask_mode() -> Result<Mode> {
    let modes: Vec<(Mode, &str)> = all::<Mode>()
        .filter_map(|mode| mode.menu_label().map(|label| (mode, label)))
        .collect();
    let labels: Vec<&str> = modes.iter().map(|(_, label)| *label).collect();
    let selection = prompt::select("What option do you choose?", &labels)?;
    Ok(modes[selection].0)
}
