/// Alignment and merge scenarios over tokenized log lines
use logmine::align::{
    align_global, align_local, align_local_str, identity_score, match_score,
    DEFAULT_GLOBAL_GAP_COST, DEFAULT_LOCAL_GAP_COST, DEFAULT_MATCH_SCORE,
};
use logmine::merge::merge;
use logmine::{tokenize, untokenize, Token};

fn align_tokens(left: &str, right: &str) -> (Vec<Token>, Vec<Token>) {
    align_local(
        &tokenize(left),
        &tokenize(right),
        &Token::Gap,
        DEFAULT_LOCAL_GAP_COST,
        |l, r| match_score(l, r, DEFAULT_MATCH_SCORE),
    )
}

#[test]
fn test_string_alignment() {
    let (left, right) = align_local_str("HEAGAWGHEE", "PAWHEAE");
    assert_eq!(left, "AWGHE-E");
    assert_eq!(right, "AW-HEAE");
}

#[test]
fn test_token_alignment() {
    let (left, right) = align_tokens("H E A G A W G H E E", "P A W H E A E");

    assert_eq!(untokenize(&left, ""), "AWGHE-E");
    assert_eq!(untokenize(&right, ""), "AW-HEAE");
    assert_eq!(left[5], Token::Gap);
    assert_eq!(right[2], Token::Gap);
}

#[test]
fn test_token_merging() {
    let (left, right) = align_tokens("This is a good test", "This is a bad test");
    let out = merge(&left, &right);

    assert_eq!(untokenize(&out, " "), "This is a WORD test");
}

#[test]
fn test_token_merging_truncates_to_local_region() {
    let (left, right) = align_tokens("This is a good test", "This is a really bad test");
    let out = merge(&left, &right);

    assert_eq!(untokenize(&out, " "), "This is a");
}

#[test]
fn test_local_alignment_is_deterministic() {
    let a = tokenize("2020-09-06T16:00:00 Connected as user: cching, database: users1");
    let b = tokenize("2020-09-06T16:00:00 Connected as user: blah, database: users1");

    let first = align_local(&a, &b, &Token::Gap, 2, |l, r| identity_score(l, r, 1));
    for _ in 0..10 {
        let again = align_local(&a, &b, &Token::Gap, 2, |l, r| identity_score(l, r, 1));
        assert_eq!(again, first);
    }
    assert_eq!(first.0.len(), first.1.len());
}

#[test]
fn test_global_token_alignment() {
    let (left, right) = align_global(
        &tokenize("user alice logged in"),
        &tokenize("user logged in from console"),
        &Token::Gap,
        DEFAULT_GLOBAL_GAP_COST,
    );

    assert_eq!(left.len(), right.len());
    assert_eq!(left.iter().filter(|t| !t.is_gap()).count(), 4);
    assert_eq!(right.iter().filter(|t| !t.is_gap()).count(), 5);
}
