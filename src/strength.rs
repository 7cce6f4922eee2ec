use crate::charset::CharacterClass;
use std::fmt;

pub const MAX_SCORE: u8 = 8;

const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];
const COMPLEXITY_MIN_LENGTH: usize = 16;
const COMPLEXITY_MIN_SCORE: u8 = 6;

/// Heuristic score in `[0, 8]`: one point per length threshold reached, one
/// per character class present, and a final point for long passwords that
/// already scored at least 6.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = 0u8;

    for threshold in LENGTH_THRESHOLDS {
        if length >= threshold {
            score += 1;
        }
    }

    for class in [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ] {
        if password.chars().any(|c| class.contains(c)) {
            score += 1;
        }
    }

    if length >= COMPLEXITY_MIN_LENGTH && score >= COMPLEXITY_MIN_SCORE {
        score += 1;
    }

    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            5..=6 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn assess(password: &str) -> (u8, Strength) {
    let score = score(password);
    (score, Strength::from_score(score))
}
