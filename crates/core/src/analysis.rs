//! Guess analysis - exact and partial digit matching
//!
//! Exact matches are digits in the right position. Partial matches are
//! counted over the positions that did not match exactly: for each digit
//! value, credit is the smaller of its leftover count in the secret and in
//! the guess, so repeated digits are never credited more than once.

use serde::Serialize;

use crate::code::Code;
use crate::types::CODE_LENGTH;

/// Result of comparing a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Feedback {
    pub exact: u8,
    pub partial: u8,
}

impl Feedback {
    /// Every digit in place
    pub fn is_solved(&self) -> bool {
        self.exact as usize == CODE_LENGTH
    }
}

/// Compare `guess` against `secret`.
///
/// # Examples
///
/// ```
/// use codebreaker_core::{analyze, Code};
///
/// let secret = Code::parse("1123").unwrap();
/// let guess = Code::parse("1111").unwrap();
/// let fb = analyze(&secret, &guess);
/// // both leading 1s match in place; the surplus 1s in the guess earn nothing
/// assert_eq!((fb.exact, fb.partial), (2, 0));
///
/// let fb = analyze(&Code::parse("1000").unwrap(), &Code::parse("0111").unwrap());
/// assert_eq!((fb.exact, fb.partial), (0, 2));
/// ```
pub fn analyze(secret: &Code, guess: &Code) -> Feedback {
    let mut exact = 0u8;
    let mut secret_left = [0u8; 10];
    let mut guess_left = [0u8; 10];

    for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
        if s == g {
            exact += 1;
        } else {
            secret_left[s as usize] += 1;
            guess_left[g as usize] += 1;
        }
    }

    let partial = secret_left
        .iter()
        .zip(&guess_left)
        .map(|(&s, &g)| s.min(g))
        .sum();

    Feedback { exact, partial }
}
