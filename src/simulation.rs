//! Binary-search guessing simulation.
//!
//! Every round draws a fresh secret in `[SECRET_MIN, SECRET_MAX]` and guesses the
//! midpoint of the interval that can still contain it. Results are written to any
//! `io::Write` sink and returned so callers can inspect them.

use std::cmp::Ordering;
use std::io::{self, Write};

use rand::Rng;
use tracing::debug;

use crate::game::{check_guess, SearchInterval, SECRET_MAX, SECRET_MIN};

/// Rounds played per session.
pub const ROUNDS: u32 = 5;
/// Guesses allowed per round.
pub const MAX_ATTEMPTS: u32 = 5;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub secret: u32,
    pub attempts: u32,
    pub found: bool,
    pub guesses: Vec<u32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub rounds_won: u32,
    pub total_attempts: u32,
}

impl SessionStats {
    pub fn record(&mut self, round: &Round) {
        self.rounds_played += 1;
        if round.found {
            self.rounds_won += 1;
        }
        self.total_attempts += round.attempts;
    }

    /// Percentage of rounds won.
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            (self.rounds_won as f64) * 100.0 / (self.rounds_played as f64)
        }
    }

    pub fn mean_attempts(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            (self.total_attempts as f64) / (self.rounds_played as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub rounds: Vec<Round>,
    pub stats: SessionStats,
}

/// Play one round against a known secret, printing every attempt.
pub fn play_round<W: Write + ?Sized>(
    number: u32,
    secret: u32,
    out: &mut W,
) -> io::Result<Round> {
    writeln!(out, "\n🎯 Round {number}:")?;
    writeln!(out, "Secret number generated: {secret}")?;

    let mut interval = SearchInterval::full();
    let mut round = Round {
        number,
        secret,
        attempts: 0,
        found: false,
        guesses: Vec::with_capacity(MAX_ATTEMPTS as usize),
    };

    while !round.found && round.attempts < MAX_ATTEMPTS {
        let guess = interval.midpoint();
        round.attempts += 1;
        round.guesses.push(guess);

        write!(out, "  Attempt {}: {guess}", round.attempts)?;
        let ordering = check_guess(guess, secret);
        match ordering {
            Ordering::Less => writeln!(out, " → Too small!")?,
            Ordering::Greater => writeln!(out, " → Too big!")?,
            Ordering::Equal => {
                writeln!(out, " → 🎉 Found!")?;
                round.found = true;
            }
        }
        interval.narrow(guess, ordering);
    }

    if round.found {
        writeln!(out, "  ✅ Success in {} attempts!", round.attempts)?;
    } else {
        writeln!(
            out,
            "  ❌ Failed after {} attempts. The number was {secret}",
            round.attempts
        )?;
    }

    debug!(
        round = number,
        secret,
        attempts = round.attempts,
        found = round.found,
        "round finished"
    );
    Ok(round)
}

pub fn write_summary<W: Write + ?Sized>(stats: &SessionStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "📊 Simulation statistics:")?;
    writeln!(out, "Rounds played: {}", stats.rounds_played)?;
    writeln!(out, "Rounds won: {}", stats.rounds_won)?;
    writeln!(out, "Win rate: {:.1}%", stats.win_rate())?;
    writeln!(out, "Average attempts: {:.1}", stats.mean_attempts())?;
    Ok(())
}

/// Run the full session: header, `ROUNDS` rounds, then the statistics block.
pub fn run_simulation<R, W>(rng: &mut R, out: &mut W) -> io::Result<Session>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "🎮 Automatic Guessing Game - simulating {ROUNDS} rounds")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let mut stats = SessionStats::default();
    let mut rounds = Vec::with_capacity(ROUNDS as usize);
    for number in 1..=ROUNDS {
        let secret = rng.gen_range(SECRET_MIN..=SECRET_MAX);
        let round = play_round(number, secret, out)?;
        stats.record(&round);
        rounds.push(round);
    }

    write_summary(&stats, out)?;
    writeln!(out, "\n🤖 Simulation completed successfully!")?;

    Ok(Session { rounds, stats })
}
