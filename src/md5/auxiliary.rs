//! The four auxiliary bitwise functions, one per round.

use super::word::Word;

/// `F(x, y, z) = (x & y) | (!x & z)`: bitwise "if x then y else z".
#[inline(always)]
pub fn f(x: Word, y: Word, z: Word) -> Word {
    (x & y) | (!x & z)
}

/// `G(x, y, z) = (x & z) | (y & !z)`: bitwise "if z then x else y".
#[inline(always)]
pub fn g(x: Word, y: Word, z: Word) -> Word {
    (x & z) | (y & !z)
}

/// `H(x, y, z) = x ^ y ^ z`: bitwise parity.
#[inline(always)]
pub fn h(x: Word, y: Word, z: Word) -> Word {
    x ^ y ^ z
}

/// `I(x, y, z) = y ^ (x | !z)`.
#[inline(always)]
pub fn i(x: Word, y: Word, z: Word) -> Word {
    y ^ (x | !z)
}

/// One of the four rounds of the compression function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    /// Steps 1-16, function F.
    One,
    /// Steps 17-32, function G.
    Two,
    /// Steps 33-48, function H.
    Three,
    /// Steps 49-64, function I.
    Four,
}

impl Round {
    /// All rounds in execution order.
    pub const ALL: [Round; 4] = [Round::One, Round::Two, Round::Three, Round::Four];

    /// Zero-based position of the round.
    pub fn index(self) -> usize {
        match self {
            Round::One => 0,
            Round::Two => 1,
            Round::Three => 2,
            Round::Four => 3,
        }
    }

    /// Applies this round's auxiliary function.
    #[inline(always)]
    pub fn aux(self, x: Word, y: Word, z: Word) -> Word {
        match self {
            Round::One => f(x, y, z),
            Round::Two => g(x, y, z),
            Round::Three => h(x, y, z),
            Round::Four => i(x, y, z),
        }
    }
}
