use std::cmp::Ordering;
use std::io::{self, Write};

use rand::Rng;
use tracing::debug;

use crate::game::{check_guess, SECRET_MAX, SECRET_MIN};

/// Random guesses drawn by the quick demo.
pub const DEMO_GUESSES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    pub secret: u32,
    pub guesses: [u32; DEMO_GUESSES],
    /// 1-based index of the guess that hit the secret, if any.
    pub winning_attempt: Option<usize>,
}

impl DemoOutcome {
    pub fn won(&self) -> bool {
        self.winning_attempt.is_some()
    }
}

/// Replay pre-drawn guesses against `secret`, stopping at the first hit.
pub fn play_guesses<W: Write + ?Sized>(
    secret: u32,
    guesses: [u32; DEMO_GUESSES],
    out: &mut W,
) -> io::Result<DemoOutcome> {
    let mut winning_attempt = None;

    for (i, &guess) in guesses.iter().enumerate() {
        let attempt = i + 1;
        write!(out, "Attempt {attempt}: {guess}")?;
        match check_guess(guess, secret) {
            Ordering::Equal => {
                writeln!(out, " → 🎉 You win!")?;
                winning_attempt = Some(attempt);
                break;
            }
            Ordering::Less => writeln!(out, " → Higher")?,
            Ordering::Greater => writeln!(out, " → Lower")?,
        }
    }

    if winning_attempt.is_none() {
        writeln!(out, "\nThe number was {secret}")?;
    }

    Ok(DemoOutcome {
        secret,
        guesses,
        winning_attempt,
    })
}

pub fn run_quick_demo<R, W>(rng: &mut R, out: &mut W) -> io::Result<DemoOutcome>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "🎲 Quick guessing game demo")?;

    let secret = rng.gen_range(SECRET_MIN..=SECRET_MAX);
    writeln!(out, "Secret number: {secret}")?;

    let guesses: [u32; DEMO_GUESSES] =
        std::array::from_fn(|_| rng.gen_range(SECRET_MIN..=SECRET_MAX));
    debug!(secret, ?guesses, "demo guesses drawn");

    play_guesses(secret, guesses, out)
}
