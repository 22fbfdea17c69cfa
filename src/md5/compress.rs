//! The MD5 compression function.
//!
//! [`compress`] folds one 16-word block into the chaining state. Each of the 64
//! steps computes
//!
//! ```text
//! a = b + ((a + aux(b, c, d) + X[k] + T[n]) <<< s)
//! ```
//!
//! and then rotates which register plays `a`. The rounds differ only in the
//! auxiliary function, the message word order `k`, the rotate amounts `s` and
//! which sixteen sine constants `T[n]` they consume.

use super::auxiliary::Round;
use super::sine_table::sine;
use super::state::DigestState;
use super::word::{Block, BLOCK_WORDS};

/// Message word consumed by each step, per round.
static MESSAGE_INDEX: [[usize; BLOCK_WORDS]; 4] = [
    // Round 1
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    // Round 2
    [1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12],
    // Round 3
    [5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2],
    // Round 4
    [0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9],
];

/// Left-rotate amounts; each round repeats its four amounts four times.
static ROTATE_AMOUNT: [[u32; 4]; 4] = [
    [7, 12, 17, 22],
    [5, 9, 14, 20],
    [4, 11, 16, 23],
    [6, 10, 15, 21],
];

/// Computes the chaining state that follows `state` after absorbing `block`.
///
/// The result is the entry state plus the registers left by the 64 steps,
/// word-wise modulo 2^32.
pub fn compress(state: DigestState, block: &Block) -> DigestState {
    let DigestState {
        mut a,
        mut b,
        mut c,
        mut d,
    } = state;

    for round in Round::ALL {
        let r = round.index();
        for step in 0..BLOCK_WORDS {
            let n = r * BLOCK_WORDS + step + 1;
            let mixed = a
                .wrapping_add(round.aux(b, c, d))
                .wrapping_add(block[MESSAGE_INDEX[r][step]])
                .wrapping_add(sine(n));
            let next = b.wrapping_add(mixed.rotate_left(ROTATE_AMOUNT[r][step % 4]));

            a = d;
            d = c;
            c = b;
            b = next;
        }
    }

    state.wrapping_add(DigestState { a, b, c, d })
}
