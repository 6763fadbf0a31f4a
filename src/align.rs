//! Pairwise sequence alignment over arbitrary token sequences.
//!
//! Two dynamic-programming aligners share one score grid:
//! - [`align_local`]: Smith-Waterman. Finds the best-scoring overlapping
//!   region and drops unaligned leading/trailing tokens. Used by clustering.
//! - [`align_global`]: Needleman-Wunsch. Aligns both inputs end to end,
//!   padding indels with the gap token.
//!
//! Both outputs of an alignment always have equal length. The backtrace
//! tie-break order is load-bearing: the merge engine consumes the aligned
//! pairs position by position, so a different but equally-scored path
//! produces a different representative.

/// Cost of a match (and penalty of a mismatch) in the character aligners
pub const DEFAULT_MATCH_SCORE: i32 = 3;

/// Gap penalty subtracted by the local aligner
pub const DEFAULT_LOCAL_GAP_COST: i32 = 2;

/// Gap score added by the global aligner (negative: a penalty)
pub const DEFAULT_GLOBAL_GAP_COST: i32 = -2;

/// Gap marker used by the string helpers
pub const CHAR_GAP: char = '-';

/// Heap-allocated `(n + 1) x (m + 1)` score matrix.
///
/// Memory and time are both O(n·m) per alignment and nothing is reused
/// across calls. Callers aligning long inputs should check
/// [`Grid::cells`] first.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    pub fn new(left_len: usize, right_len: usize) -> Self {
        let cols = right_len + 1;
        Self {
            cols,
            cells: vec![0; (left_len + 1) * cols],
        }
    }

    /// Number of cells needed to align sequences of these lengths
    pub fn cells(left_len: usize, right_len: usize) -> usize {
        left_len
            .saturating_add(1)
            .saturating_mul(right_len.saturating_add(1))
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: i32) {
        self.cells[i * self.cols + j] = value;
    }
}

/// `+cost` on equality, `-cost` otherwise
pub fn match_score<T: PartialEq>(left: &T, right: &T, cost: i32) -> i32 {
    if left == right {
        cost
    } else {
        -cost
    }
}

/// `k` on equality, `0` otherwise. The clustering score.
pub fn identity_score<T: PartialEq>(left: &T, right: &T, k: i32) -> i32 {
    if left == right {
        k
    } else {
        0
    }
}

/// Local (Smith-Waterman) alignment.
///
/// `gap_cost` is subtracted for every indel. The backtrace starts from the
/// last cell (row-major) holding the maximum score and stops after emitting
/// the pair whose diagonal predecessor scored 0. Empty inputs yield empty
/// outputs.
pub fn align_local<T, F>(
    left: &[T],
    right: &[T],
    gap: &T,
    gap_cost: i32,
    score: F,
) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T, &T) -> i32,
{
    let mut grid = Grid::new(left.len(), right.len());

    let mut best = 0;
    let (mut bi, mut bj) = (0, 0);

    for i in 1..=left.len() {
        for j in 1..=right.len() {
            let diag = grid.get(i - 1, j - 1) + score(&left[i - 1], &right[j - 1]);
            let same_row = grid.get(i, j - 1) - gap_cost;
            let same_col = grid.get(i - 1, j) - gap_cost;
            let value = diag.max(same_row).max(same_col).max(0);
            grid.set(i, j, value);

            // Later cells win ties
            if value >= best {
                best = value;
                bi = i;
                bj = j;
            }
        }
    }

    let mut left_out = Vec::new();
    let mut right_out = Vec::new();

    let (mut i, mut j) = (bi, bj);
    while i > 0 && j > 0 {
        let same_row = grid.get(i, j - 1);
        let diag = grid.get(i - 1, j - 1);
        let same_col = grid.get(i - 1, j);

        if diag == 0 {
            left_out.push(left[i - 1].clone());
            right_out.push(right[j - 1].clone());
            break;
        }

        if diag >= same_row && diag >= same_col {
            left_out.push(left[i - 1].clone());
            right_out.push(right[j - 1].clone());
            i -= 1;
            j -= 1;
        } else if same_row >= same_col {
            left_out.push(gap.clone());
            right_out.push(right[j - 1].clone());
            j -= 1;
        } else {
            left_out.push(left[i - 1].clone());
            right_out.push(gap.clone());
            i -= 1;
        }
    }

    left_out.reverse();
    right_out.reverse();

    (left_out, right_out)
}

/// Global (Needleman-Wunsch) alignment with `±DEFAULT_MATCH_SCORE` scoring.
///
/// `gap_cost` is *added* per indel, so pass a negative value for a penalty.
pub fn align_global<T>(left: &[T], right: &[T], gap: &T, gap_cost: i32) -> (Vec<T>, Vec<T>)
where
    T: Clone + PartialEq,
{
    align_global_with(left, right, gap, gap_cost, |l, r| {
        match_score(l, r, DEFAULT_MATCH_SCORE)
    })
}

/// Global alignment with a caller-supplied match/mismatch score.
///
/// The backtrace from `(|left|, |right|)` takes the same-row predecessor by
/// default, switches to the diagonal if it is strictly greater, then to the
/// same-column predecessor if that is strictly greater still. Once one input
/// is exhausted the rest of the other is emitted against gaps.
pub fn align_global_with<T, F>(
    left: &[T],
    right: &[T],
    gap: &T,
    gap_cost: i32,
    score: F,
) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T, &T) -> i32,
{
    let mut grid = Grid::new(left.len(), right.len());

    for i in 0..=left.len() {
        for j in 0..=right.len() {
            let value = if i == 0 {
                j as i32 * gap_cost
            } else if j == 0 {
                i as i32 * gap_cost
            } else {
                let same_row = grid.get(i, j - 1) + gap_cost;
                let same_col = grid.get(i - 1, j) + gap_cost;
                let diag = grid.get(i - 1, j - 1) + score(&left[i - 1], &right[j - 1]);
                same_row.max(same_col).max(diag)
            };
            grid.set(i, j, value);
        }
    }

    let mut left_out = Vec::with_capacity(left.len() + right.len());
    let mut right_out = Vec::with_capacity(left.len() + right.len());

    let (mut i, mut j) = (left.len(), right.len());
    while i >= 1 && j >= 1 {
        let mut step = Step::SameRow;
        let mut m = grid.get(i, j - 1);

        if grid.get(i - 1, j - 1) > m {
            step = Step::Diagonal;
            m = grid.get(i - 1, j - 1);
        }
        if grid.get(i - 1, j) > m {
            step = Step::SameColumn;
        }

        match step {
            Step::Diagonal => {
                i -= 1;
                j -= 1;
                left_out.push(left[i].clone());
                right_out.push(right[j].clone());
            }
            Step::SameColumn => {
                i -= 1;
                left_out.push(left[i].clone());
                right_out.push(gap.clone());
            }
            Step::SameRow => {
                j -= 1;
                left_out.push(gap.clone());
                right_out.push(right[j].clone());
            }
        }
    }

    while i >= 1 {
        i -= 1;
        left_out.push(left[i].clone());
        right_out.push(gap.clone());
    }
    while j >= 1 {
        j -= 1;
        left_out.push(gap.clone());
        right_out.push(right[j].clone());
    }

    left_out.reverse();
    right_out.reverse();

    (left_out, right_out)
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Diagonal,
    SameRow,
    SameColumn,
}

/// Character-level local alignment with the default `±3` / gap `2` scoring
pub fn align_local_str(left: &str, right: &str) -> (String, String) {
    let l: Vec<char> = left.chars().collect();
    let r: Vec<char> = right.chars().collect();
    let (lo, ro) = align_local(&l, &r, &CHAR_GAP, DEFAULT_LOCAL_GAP_COST, |a, b| {
        match_score(a, b, DEFAULT_MATCH_SCORE)
    });
    (lo.into_iter().collect(), ro.into_iter().collect())
}

/// Character-level global alignment with the default `±3` / gap `-2` scoring
pub fn align_global_str(left: &str, right: &str) -> (String, String) {
    let l: Vec<char> = left.chars().collect();
    let r: Vec<char> = right.chars().collect();
    let (lo, ro) = align_global(&l, &r, &CHAR_GAP, DEFAULT_GLOBAL_GAP_COST);
    (lo.into_iter().collect(), ro.into_iter().collect())
}
