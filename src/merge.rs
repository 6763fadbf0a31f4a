//! Merges two aligned sequences into one generalized representative.
//!
//! Rules per position, first match wins:
//! 1. two different literals        -> Wildcard
//! 2. wildcard against a literal    -> Wildcard (either side)
//! 3. same date/time/datetime kind  -> that canonical token
//! 4. anything else                 -> Literal carrying the right-hand payload
//!
//! Rule 4 favours the incoming (right) side whenever kinds collide in a way
//! the other rules do not cover, including any pairing with a Gap. A Gap on
//! the right therefore becomes the literal `-`, never a Gap token.
use crate::token::{Sequence, Token};

/// Merge position by position.
///
/// Inputs are expected to be the equal-length outputs of an alignment. If
/// they are not, only the common prefix is merged.
pub fn merge(left: &[Token], right: &[Token]) -> Sequence {
    left.iter()
        .zip(right.iter())
        .map(|(l, r)| merge_token(l, r))
        .collect()
}

fn merge_token(left: &Token, right: &Token) -> Token {
    match (left, right) {
        (Token::Literal(l), Token::Literal(r)) if l != r => Token::Wildcard,
        (Token::Wildcard, Token::Literal(_)) | (Token::Literal(_), Token::Wildcard) => {
            Token::Wildcard
        }
        // A slot that already varies keeps varying
        (Token::Wildcard, Token::Wildcard) => Token::Wildcard,
        (Token::Date, Token::Date) => Token::Date,
        (Token::Time, Token::Time) => Token::Time,
        (Token::DateTime, Token::DateTime) => Token::DateTime,
        (_, r) => Token::Literal(r.payload().to_string()),
    }
}
