//! Number-guessing simulator: a binary-search session over random secrets
//! followed by a quick demo of random guesses.

pub mod demo;
pub mod game;
pub mod report;
pub mod simulation;
