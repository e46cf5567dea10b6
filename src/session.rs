use anyhow::Result;
use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::{Mode, Settings};
use crate::games::sticks::game::{outcome_message, play, SticksGame};
use crate::games::sticks::hats::Hats;
use crate::games::sticks::players::{HatPlayer, Human, MoveMaker};
use crate::games::sticks::report::{write_hat_contents, write_hats_json};
use crate::games::sticks::training::pretrain;
use crate::prompt;

pub fn run(settings: &Settings) -> Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match settings.mode {
        Mode::Friend => {
            let mut player1 = Human::new(1);
            let mut player2 = Human::new(2);
            player_vs_player(settings.sticks, [&mut player1, &mut player2]).map(|_| ())
        }
        Mode::Computer | Mode::Trained => {
            let hats = train(settings, &mut rng)?;
            let mut human = Human::new(1);
            let mut ai = HatPlayer::new("AI", hats, rng);
            ai.announce = true;
            player_vs_ai(settings.sticks, &mut human, &mut ai, || {
                prompt::confirm("Play another round?")
            })
            .map(|_| ())
        }
        Mode::Train => train(settings, &mut rng).map(|_| ()),
    }
}

/// Trains the computer and writes its hats out before any human play
fn train(settings: &Settings, rng: &mut impl Rng) -> Result<Hats> {
    let (hats, report) = pretrain(settings.sticks, settings.rounds, rng)?;
    log::debug!("{:?}", report);
    write_hat_contents(&hats, &settings.output)?;
    if let Some(path) = &settings.json {
        write_hats_json(&hats, path)?;
    }
    Ok(hats)
}

/// Returns the winner
pub fn player_vs_player(sticks: usize, players: [&mut dyn MoveMaker; 2]) -> Result<usize> {
    let mut game = SticksGame::new(sticks);
    play(&mut game, players)?;
    let winner = game.winner().expect("the game should be over");
    println!("{}", outcome_message(winner).green().bold());
    Ok(winner)
}

/// The human moves first and the computer keeps learning from every game.
/// Plays until `again` says no and returns the number of games played.
pub fn player_vs_ai<R: Rng>(
    sticks: usize,
    human: &mut dyn MoveMaker,
    ai: &mut HatPlayer<R>,
    mut again: impl FnMut() -> Result<bool>,
) -> Result<usize> {
    let mut games = 0;
    loop {
        let mut game = SticksGame::new(sticks);
        let loser = play(&mut game, [&mut *human, &mut *ai])?;
        games += 1;
        if loser == 0 {
            println!("{}", "You lose.".red().bold());
        } else {
            println!("{}", "AI loses.".green().bold());
        }
        log::debug!(
            "{} finished game {}, hat {} holds {:?}",
            ai.get_name(),
            games,
            sticks,
            ai.hats().counts(sticks)
        );
        if !again()? {
            return Ok(games);
        }
    }
}
