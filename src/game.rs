use std::cmp::Ordering;

/// Smallest secret that can be drawn.
pub const SECRET_MIN: u32 = 1;
/// Largest secret that can be drawn.
pub const SECRET_MAX: u32 = 10;

/// Compare a guess against the secret.
/// `Less` means the guess is too small, `Greater` means it is too big.
pub fn check_guess(guess: u32, secret: u32) -> Ordering {
    guess.cmp(&secret)
}

/// Closed interval `[lo, hi]` still known to contain the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchInterval {
    pub lo: u32,
    pub hi: u32,
}

impl SearchInterval {
    pub fn full() -> Self {
        Self {
            lo: SECRET_MIN,
            hi: SECRET_MAX,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    pub fn midpoint(&self) -> u32 {
        (self.lo + self.hi) / 2
    }

    /// Shrink the interval after `guess` was judged with `ordering`.
    /// An exact hit leaves the interval untouched.
    pub fn narrow(&mut self, guess: u32, ordering: Ordering) {
        match ordering {
            Ordering::Less => self.lo = guess + 1,
            Ordering::Greater => self.hi = guess.saturating_sub(1),
            Ordering::Equal => {}
        }
    }
}
