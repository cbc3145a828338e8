//! Four-digit codes: the secret and every guess share this type.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::types::CODE_LENGTH;

/// Number of distinct codes (`0000`-`9999`)
pub const CODE_SPACE: u32 = 10_000;

/// A 4-digit decimal code, stored as digit values 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([u8; CODE_LENGTH]);

impl Code {
    /// Parse a code from exactly four ASCII decimal digits.
    ///
    /// No trimming is done; `" 1234"` and `"12345"` are both rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use codebreaker_core::Code;
    ///
    /// assert!(Code::parse("0042").is_some());
    /// assert!(Code::parse("42").is_none());
    /// assert!(Code::parse("12a4").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != CODE_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (d, b) in digits.iter_mut().zip(bytes) {
            *d = b - b'0';
        }
        Some(Self(digits))
    }

    /// Build a code from its numeric value, `value % 10000`.
    pub fn from_index(value: u32) -> Self {
        let mut n = value % CODE_SPACE;
        let mut digits = [0u8; CODE_LENGTH];
        for d in digits.iter_mut().rev() {
            *d = (n % 10) as u8;
            n /= 10;
        }
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Digit at a 0-based position, `None` when out of range
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.0.get(position).copied()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
