use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given its current state and how many of its
    /// neighbors are alive.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        // Counts past 8 can't happen on a grid, and would overflow the mask
        if neighbors > 8 {
            return false;
        }

        let bit = 1 << neighbors;

        if alive {
            self.survivals() & bit == bit
        } else {
            self.births() & bit == bit
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Rule must start with 'b' or 'B'")]
    MissingBirth,

    #[error("Rule is missing the 's' or 'S' survival section")]
    MissingSurvival,

    #[error("Invalid neighbor count '{got}', expected a digit from 0 to 8")]
    InvalidCount { got: char },
}

impl FromStr for RuleSet {
    type Err = RuleSetError;

    /// Parse rules that look like `B3/S23` or `b3s23`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let Some(rest) = s.strip_prefix(['b', 'B']) else {
            return Err(RuleSetError::MissingBirth);
        };

        let Some((b, s)) = rest.split_once(['s', 'S']) else {
            return Err(RuleSetError::MissingSurvival);
        };

        let b = b.strip_suffix('/').unwrap_or(b);

        Ok(RuleSet::new(chars_to_num(b)?, chars_to_num(s)?))
    }
}

/// Convert the human readable birth/survival digits to a packed bit representation
fn chars_to_num(digits: &str) -> Result<u16, RuleSetError> {
    let mut n = 0;

    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) if d <= 8 => n |= 1 << d,
            _ => return Err(RuleSetError::InvalidCount { got: c }),
        }
    }

    Ok(n)
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn digits(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
            for n in 0..=8 {
                if mask & (1 << n) != 0 {
                    write!(f, "{n}")?;
                }
            }

            Ok(())
        }

        write!(f, "B")?;
        digits(f, self.births())?;
        write!(f, "/S")?;
        digits(f, self.survivals())
    }
}
