use anyhow::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::game::{play, SticksGame, PLAYER_COUNT};
use super::hats::Hats;
use super::players::HatPlayer;

const PROGRESS_INTERVAL: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub rounds: usize,
    // Games won by the AI moving first and the AI moving second
    pub wins: [usize; PLAYER_COUNT],
}

/// Trains two AIs against each other for `rounds` games and returns the hats of
/// the AI that moves second.
pub fn pretrain(
    initial_sticks: usize,
    rounds: usize,
    rng: &mut impl Rng,
) -> Result<(Hats, TrainingReport)> {
    let hats = Hats::new(initial_sticks);
    let mut ai1 = HatPlayer::new("AI 1", hats.clone(), StdRng::seed_from_u64(rng.gen()));
    let mut ai2 = HatPlayer::new("AI 2", hats, StdRng::seed_from_u64(rng.gen()));
    let mut report = TrainingReport {
        rounds,
        ..Default::default()
    };

    log::info!("training for {} rounds with {} sticks", rounds, initial_sticks);
    for round in 1..=rounds {
        let mut game = SticksGame::new(initial_sticks);
        let loser = play(&mut game, [&mut ai1, &mut ai2])?;
        report.wins[(loser + 1) % PLAYER_COUNT] += 1;
        if round % PROGRESS_INTERVAL == 0 {
            log::debug!("round {:>6} wins {:?}", round, report.wins);
        }
    }
    log::info!(
        "training finished: AI 1 won {}, AI 2 won {}",
        report.wins[0],
        report.wins[1]
    );

    Ok((ai2.into_hats(), report))
}
