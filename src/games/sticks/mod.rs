/*
Game: Game of Sticks
Players alternately take 1 to 3 sticks from a shared pile. Whoever takes the
last stick loses. The computer opponent learns with hats and beads: one hat
per pile size, one ball per move, winning balls are put back twice.
*/

pub mod game;
pub mod hats;
pub mod players;
pub mod report;
pub mod training;
