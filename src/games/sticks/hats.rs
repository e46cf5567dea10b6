use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Largest number of sticks a single move may take
pub const MAX_TAKE: usize = 3;

/// Balls set beside each hat during one game: pile size -> ball drawn at that size.
/// A pile size is seen at most once per game because the pile only shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beside(BTreeMap<usize, usize>);

impl Beside {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&sticks, &ball)| (sticks, ball))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// One hat per pile size, each holding balls numbered with the moves it may pick.
/// The chance of a move being picked is proportional to how many of its balls
/// are in the hat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hats {
    hats: BTreeMap<usize, Vec<usize>>,
}

impl Hats {
    /// Hats for pile sizes 2..=max_sticks holding one ball per legal move.
    /// A pile of one stick has no hat since taking it is forced.
    pub fn new(max_sticks: usize) -> Self {
        let hats = (2..=max_sticks)
            .map(|sticks| (sticks, (1..=MAX_TAKE.min(sticks - 1)).collect()))
            .collect();
        Self { hats }
    }

    pub fn max_sticks(&self) -> usize {
        self.hats.keys().next_back().copied().unwrap_or(1)
    }

    pub fn contents(&self, sticks: usize) -> Option<&[usize]> {
        self.hats.get(&sticks).map(|hat| hat.as_slice())
    }

    /// Number of balls for each move (1's, 2's, 3's) in the hat for `sticks`
    pub fn counts(&self, sticks: usize) -> [usize; MAX_TAKE] {
        let mut counts = [0; MAX_TAKE];
        for &ball in self.contents(sticks).unwrap_or_default() {
            counts[ball - 1] += 1;
        }
        counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, [usize; MAX_TAKE])> + '_ {
        self.hats.keys().map(|&sticks| (sticks, self.counts(sticks)))
    }

    /// Draws a ball from the hat for `sticks`, leaving it beside the hat until
    /// the game is over.
    pub fn select_move(
        &mut self,
        sticks: usize,
        beside: &mut Beside,
        rng: &mut impl Rng,
    ) -> usize {
        if sticks == 1 {
            return 1;
        }
        let hat = self
            .hats
            .get_mut(&sticks)
            .expect("there should be a hat for every pile size");
        assert!(!hat.is_empty(), "hat {} should never be empty", sticks);
        let ball = hat.swap_remove(rng.gen_range(0..hat.len()));
        beside.0.insert(sticks, ball);
        log::trace!("hat {:>3} drew {} ({} balls left)", sticks, ball, hat.len());
        ball
    }

    /// Puts the balls beside each hat back after a game.
    /// Winning balls go back with an extra copy. A losing ball only goes back
    /// when its hat has no ball of that number left, so the move stays possible
    /// without gaining weight.
    pub fn update(&mut self, beside: &Beside, won: bool) {
        for (sticks, ball) in beside.iter() {
            let hat = self
                .hats
                .get_mut(&sticks)
                .expect("balls are only set beside existing hats");
            if won {
                hat.push(ball);
                hat.push(ball);
            } else if !hat.contains(&ball) {
                hat.push(ball);
            }
        }
        log::trace!("updated {} hats (won: {})", beside.len(), won);
    }
}
