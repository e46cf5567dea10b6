use anyhow::Result;
use colored::Colorize;
use rand::Rng;

use super::hats::{Beside, Hats, MAX_TAKE};
use crate::prompt;

/// Anything that can pick how many sticks to take
pub trait MoveMaker {
    /// A move in `1..=min(3, sticks)`
    fn get_move(&mut self, sticks: usize) -> Result<usize>;
    fn get_name(&self) -> &str;
    /// Called once the game is over
    fn game_over(&mut self, _won: bool) {}
}

/// Learns from its own games by drawing moves out of hats.
pub struct HatPlayer<R: Rng> {
    name: String,
    hats: Hats,
    beside: Beside,
    rng: R,
    // Print each move for a human opponent
    pub announce: bool,
}

impl<R: Rng> HatPlayer<R> {
    pub fn new(name: &str, hats: Hats, rng: R) -> Self {
        Self {
            name: name.to_string(),
            hats,
            beside: Beside::new(),
            rng,
            announce: false,
        }
    }

    pub fn hats(&self) -> &Hats {
        &self.hats
    }

    pub fn into_hats(self) -> Hats {
        self.hats
    }
}

impl<R: Rng> MoveMaker for HatPlayer<R> {
    fn get_move(&mut self, sticks: usize) -> Result<usize> {
        let selection = self.hats.select_move(sticks, &mut self.beside, &mut self.rng);
        if self.announce {
            println!("{} selects: {}", self.name, selection.to_string().bold());
        }
        Ok(selection)
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn game_over(&mut self, won: bool) {
        self.hats.update(&self.beside, won);
        self.beside.clear();
    }
}

/// Asks on stdin until a legal number of sticks is entered
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(player_number: usize) -> Self {
        Self {
            name: format!("Player {}", player_number),
        }
    }
}

impl MoveMaker for Human {
    fn get_move(&mut self, sticks: usize) -> Result<usize> {
        println!("There are {} sticks on the board.", sticks.to_string().bold());
        let max_sticks = MAX_TAKE.min(sticks);
        let selection = prompt::ask(
            &format!("{}: How many sticks do you take? (1 - {})", self.name, max_sticks),
            |taken: &usize| check_take(*taken, sticks),
        )?;
        Ok(selection)
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

fn check_take(taken: usize, sticks: usize) -> Result<(), String> {
    let max_sticks = MAX_TAKE.min(sticks);
    match (1..=max_sticks).contains(&taken) {
        true => Ok(()),
        false => Err(format!("Take between 1 and {} sticks", max_sticks)),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::games::sticks::game::{play, SticksGame};
    use rand::{rngs::StdRng, SeedableRng};

    /// Plays a fixed list of moves and remembers its results
    pub struct ScriptedPlayer {
        moves: VecDeque<usize>,
        pub results: Vec<bool>,
    }

    impl ScriptedPlayer {
        pub fn new(moves: Vec<usize>) -> Self {
            Self {
                moves: moves.into(),
                results: vec![],
            }
        }
    }

    impl MoveMaker for ScriptedPlayer {
        fn get_move(&mut self, _sticks: usize) -> Result<usize> {
            self.moves
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script ran out of moves"))
        }

        fn get_name(&self) -> &str {
            "scripted"
        }

        fn game_over(&mut self, won: bool) {
            self.results.push(won);
        }
    }

    #[test]
    fn test_hat_player_learns_from_win() {
        // The AI moves second on a pile of 5: 5 -1-> 4 -AI-> ... and wins
        // whenever the scripted player has to take the last stick.
        let mut ai = HatPlayer::new("AI", Hats::new(5), StdRng::seed_from_u64(3));
        let mut game = SticksGame::new(5);
        let mut opponent = ScriptedPlayer::new(vec![1, 1, 1, 1]);
        let loser = play(&mut game, [&mut opponent, &mut ai]).unwrap();

        let ai_turns: Vec<(usize, usize)> = game
            .history()
            .iter()
            .filter(|turn| turn.player == 1 && turn.sticks > 1)
            .map(|turn| (turn.sticks, turn.taken))
            .collect();
        assert!(!ai_turns.is_empty());
        for (sticks, taken) in ai_turns {
            let count = ai.hats().counts(sticks)[taken - 1];
            if loser == 0 {
                assert_eq!(count, 2, "winning ball at hat {} doubled", sticks);
            } else {
                assert_eq!(count, 1, "losing ball at hat {} restored", sticks);
            }
        }
    }

    #[test]
    fn test_check_take() {
        assert!(check_take(3, 10).is_ok());
        assert!(check_take(1, 1).is_ok());
        assert!(check_take(0, 10).is_err());
        assert!(check_take(4, 10).is_err());
        assert_eq!(check_take(3, 2), Err("Take between 1 and 2 sticks".to_string()));
    }

    #[test]
    fn test_hat_player_log_is_cleared() {
        let mut ai = HatPlayer::new("AI", Hats::new(10), StdRng::seed_from_u64(8));
        ai.get_move(10).unwrap();
        ai.game_over(false);
        assert!(ai.beside.is_empty());
        assert_eq!(ai.into_hats().counts(10), [1, 1, 1]);
    }
}
