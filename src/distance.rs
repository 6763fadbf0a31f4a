//! Positional distance between two token sequences.
//!
//! Only the first `min(|a|, |b|)` positions are compared, with no shifting;
//! extra length on the longer side only grows the denominator. Used to pick a
//! candidate cluster, never to build a representative.
use crate::token::Token;

/// `1 - matches / max(|a|, |b|)`, in `[0, 1]`.
///
/// Two empty sequences are at distance 0.
pub fn distance(a: &[Token], b: &[Token]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }

    let matches = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();

    1.0 - matches as f64 / longest as f64
}
