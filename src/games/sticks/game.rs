use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::hats::MAX_TAKE;
use super::players::MoveMaker;

pub const PLAYER_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum State {
    // Sticks left on the table and the player (0 or 1) about to take some
    InProgress { sticks: usize, current_player: usize },
    // The player who took the last stick
    Finished { loser: usize },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub player: usize,
    // Pile size before the move
    pub sticks: usize,
    pub taken: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SticksGame {
    pub state: State,
    pub initial_sticks: usize,
    history: Vec<Turn>,
}

impl SticksGame {
    pub fn new(initial_sticks: usize) -> Self {
        assert!(initial_sticks > 0, "a game needs at least one stick");
        Self {
            state: State::InProgress {
                sticks: initial_sticks,
                current_player: 0,
            },
            initial_sticks,
            history: vec![],
        }
    }

    pub fn sticks(&self) -> usize {
        match self.state {
            State::InProgress { sticks, .. } => sticks,
            State::Finished { .. } => 0,
        }
    }

    pub fn current_player(&self) -> Option<usize> {
        match self.state {
            State::InProgress { current_player, .. } => Some(current_player),
            State::Finished { .. } => None,
        }
    }

    pub fn loser(&self) -> Option<usize> {
        match self.state {
            State::Finished { loser } => Some(loser),
            State::InProgress { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        self.loser().map(|loser| (loser + 1) % PLAYER_COUNT)
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn get_moves(&self) -> Vec<usize> {
        match self.state {
            State::InProgress { sticks, .. } => (1..=MAX_TAKE.min(sticks)).collect(),
            State::Finished { .. } => vec![],
        }
    }

    pub fn apply_move(&mut self, taken: usize) -> Result<()> {
        let State::InProgress {
            sticks,
            current_player,
        } = self.state
        else {
            anyhow::bail!("the game is already over");
        };
        ensure!(
            (1..=MAX_TAKE.min(sticks)).contains(&taken),
            "cannot take {} with {} sticks left",
            taken,
            sticks
        );
        self.history.push(Turn {
            player: current_player,
            sticks,
            taken,
        });
        self.state = if taken == sticks {
            State::Finished {
                loser: current_player,
            }
        } else {
            State::InProgress {
                sticks: sticks - taken,
                current_player: (current_player + 1) % PLAYER_COUNT,
            }
        };
        Ok(())
    }
}

/// Plays a game to the end and tells both players whether they won.
/// Returns the loser.
pub fn play(
    game: &mut SticksGame,
    mut players: [&mut dyn MoveMaker; PLAYER_COUNT],
) -> Result<usize> {
    while let Some(current_player) = game.current_player() {
        let taken = players[current_player].get_move(game.sticks())?;
        game.apply_move(taken)?;
    }
    let loser = game.loser().expect("the game should be over");
    for (player, move_maker) in players.iter_mut().enumerate() {
        move_maker.game_over(player != loser);
    }
    log::debug!(
        "{} took the last stick after {} turns",
        players[loser].get_name(),
        game.history().len()
    );
    Ok(loser)
}

pub fn outcome_message(winner: usize) -> String {
    format!("Player {} Wins!", winner + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sticks::hats::Hats;
    use crate::games::sticks::players::{tests::ScriptedPlayer, HatPlayer};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_new() {
        let game = SticksGame::new(10);
        assert_eq!(
            game.state,
            State::InProgress {
                sticks: 10,
                current_player: 0
            },
            "Player 1 moves first"
        );
        assert_eq!(game.get_moves(), vec![1, 2, 3]);
        assert_eq!(game.loser(), None);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_get_moves_near_the_end() {
        assert_eq!(SticksGame::new(3).get_moves(), vec![1, 2, 3]);
        assert_eq!(SticksGame::new(2).get_moves(), vec![1, 2]);
        assert_eq!(SticksGame::new(1).get_moves(), vec![1]);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = SticksGame::new(10);
        game.apply_move(3).unwrap();
        assert_eq!(game.current_player(), Some(1));
        assert_eq!(game.sticks(), 7);
        game.apply_move(2).unwrap();
        assert_eq!(game.current_player(), Some(0));
        assert_eq!(game.sticks(), 5);
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut game = SticksGame::new(2);
        assert!(game.apply_move(0).is_err());
        assert!(game.apply_move(3).is_err(), "cannot take more than is left");
        assert_eq!(game, SticksGame::new(2), "rejected moves leave the game alone");

        let mut game = SticksGame::new(10);
        assert!(game.apply_move(4).is_err());
    }

    #[test]
    fn test_taking_last_stick_loses() {
        let mut game = SticksGame::new(4);
        game.apply_move(3).unwrap();
        game.apply_move(1).unwrap();
        assert_eq!(game.state, State::Finished { loser: 1 });
        assert_eq!(game.winner(), Some(0));
        assert!(game.get_moves().is_empty());
        assert!(game.apply_move(1).is_err(), "no moves after the game is over");
    }

    #[test]
    fn test_player_vs_player_single_stick() {
        let mut game = SticksGame::new(1);
        let mut player1 = ScriptedPlayer::new(vec![1]);
        let mut player2 = ScriptedPlayer::new(vec![]);
        let loser = play(&mut game, [&mut player1, &mut player2]).unwrap();
        assert_eq!(loser, 0, "the forced move loses");
        assert_eq!(outcome_message(game.winner().unwrap()), "Player 2 Wins!");
        assert_eq!(player1.results, vec![false]);
        assert_eq!(player2.results, vec![true]);
    }

    #[test]
    fn test_scripted_game_reports_results() {
        let mut game = SticksGame::new(10);
        let mut player1 = ScriptedPlayer::new(vec![3, 3, 1]);
        let mut player2 = ScriptedPlayer::new(vec![2, 1]);
        // 10 -3-> 7 -2-> 5 -3-> 2 -1-> 1 -1-> 0, player 1 takes the last stick
        let loser = play(&mut game, [&mut player1, &mut player2]).unwrap();
        assert_eq!(loser, 0);
        assert_eq!(outcome_message(game.winner().unwrap()), "Player 2 Wins!");
        assert_eq!(player1.results, vec![false]);
        assert_eq!(player2.results, vec![true]);
        assert_eq!(
            game.history().iter().map(|t| t.sticks).collect::<Vec<usize>>(),
            vec![10, 7, 5, 2, 1]
        );
    }

    #[test]
    fn test_illegal_scripted_move_is_an_error() {
        let mut game = SticksGame::new(2);
        let mut player1 = ScriptedPlayer::new(vec![3]);
        let mut player2 = ScriptedPlayer::new(vec![]);
        assert!(play(&mut game, [&mut player1, &mut player2]).is_err());
        assert!(player1.results.is_empty(), "unfinished games are not reported");
    }

    #[test]
    fn test_self_play_pile_strictly_decreases() {
        let mut rng = StdRng::seed_from_u64(42);
        for initial_sticks in [1, 2, 3, 10, 37, 100] {
            let seeds: [u64; 2] = [rng.gen(), rng.gen()];
            let hats = Hats::new(initial_sticks);
            let mut ai1 = HatPlayer::new("AI 1", hats.clone(), StdRng::seed_from_u64(seeds[0]));
            let mut ai2 = HatPlayer::new("AI 2", hats, StdRng::seed_from_u64(seeds[1]));
            let mut game = SticksGame::new(initial_sticks);
            let loser = play(&mut game, [&mut ai1, &mut ai2]).unwrap();

            let history = game.history();
            assert!(history.len() <= initial_sticks);
            assert!(history.windows(2).all(|w| w[0].sticks > w[1].sticks));
            assert!(history.windows(2).all(|w| w[0].player != w[1].player));
            let last = history.last().unwrap();
            assert_eq!(last.sticks, last.taken, "the pile ends at exactly zero");
            assert_eq!(last.player, loser);
            assert_eq!(history.iter().map(|t| t.taken).sum::<usize>(), initial_sticks);
        }
    }
}
