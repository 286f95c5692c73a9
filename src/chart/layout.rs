//! Significance Bracket Layout Module
//! Computes stacked vertical positions for the brackets drawn above the
//! bars to mark significant pairs, so that brackets do not collide.

use thiserror::Error;

/// Bracket height in value-axis units. A literal, not scaled to the data.
pub const BRACKET_HEIGHT: f64 = 0.2;

/// Label drawn above every bracket.
pub const SIGNIFICANCE_LABEL: &str = "p<0.05";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no groups to lay out")]
    NoGroups,
    #[error("got {means} means but {std_errors} std errors")]
    LengthMismatch { means: usize, std_errors: usize },
    #[error("pair ({left}, {right}) is not ordered left < right")]
    UnorderedPair { left: usize, right: usize },
    #[error("pair ({left}, {right}) references a group outside 0..{groups}")]
    PairOutOfRange {
        left: usize,
        right: usize,
        groups: usize,
    },
}

/// Placement of one bracket: two vertical ticks of `height` at the paired
/// group positions, joined by a horizontal segment at `y + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketPlacement {
    pub pair: (usize, usize),
    pub y: f64,
    pub height: f64,
}

impl BracketPlacement {
    /// Corner points of the bracket in chart coordinates, left tick bottom
    /// to right tick bottom.
    pub fn polyline(&self) -> [(f64, f64); 4] {
        let (x1, x2) = (self.pair.0 as f64, self.pair.1 as f64);
        let top = self.y + self.height;
        [(x1, self.y), (x1, top), (x2, top), (x2, self.y)]
    }

    /// Where the significance label sits: centered on the horizontal
    /// segment, anchored at its bottom.
    pub fn label_anchor(&self) -> (f64, f64) {
        let center = (self.pair.0 as f64 + self.pair.1 as f64) / 2.0;
        (center, self.y + self.height)
    }
}

/// Compute bracket placements for the given significant pairs.
///
/// The first-vs-last pair `(0, n-1)`, if marked, is placed topmost so the
/// widest bracket never nests inside a narrower one; the remaining pairs
/// follow in ascending `(i, j)` order, each one bracket-spacing lower.
/// Spacing is twice the largest std error; with all-zero std errors every
/// bracket collapses onto the same height, which is left as-is.
///
/// Pure function: no state, identical inputs give identical output.
pub fn layout_brackets(
    means: &[f64],
    std_errors: &[f64],
    pairs: &[(usize, usize)],
) -> Result<Vec<BracketPlacement>, LayoutError> {
    if means.is_empty() {
        return Err(LayoutError::NoGroups);
    }
    if means.len() != std_errors.len() {
        return Err(LayoutError::LengthMismatch {
            means: means.len(),
            std_errors: std_errors.len(),
        });
    }
    let n = means.len();
    for &(left, right) in pairs {
        if left >= right {
            return Err(LayoutError::UnorderedPair { left, right });
        }
        if right >= n {
            return Err(LayoutError::PairOutOfRange {
                left,
                right,
                groups: n,
            });
        }
    }

    if pairs.is_empty() {
        return Ok(Vec::new());
    }

    let outermost = (0, n - 1);
    let mut ordered = Vec::with_capacity(pairs.len());
    if pairs.contains(&outermost) {
        ordered.push(outermost);
    }
    let mut rest: Vec<(usize, usize)> = pairs
        .iter()
        .copied()
        .filter(|&pair| pair != outermost)
        .collect();
    rest.sort_unstable();
    ordered.extend(rest);

    let max_mean = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_err = std_errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spacing = 2.0 * max_err;
    let base_top = max_mean + max_err + (pairs.len() as f64 + 1.0) * spacing;

    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(k, pair)| BracketPlacement {
            pair,
            y: base_top - (k as f64 + 1.0) * spacing,
            height: BRACKET_HEIGHT,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_placement_per_pair() {
        let placements = layout_brackets(
            &[1.0, 2.0, 3.0, 4.0],
            &[0.1, 0.2, 0.1, 0.3],
            &[(0, 1), (1, 2), (0, 3), (2, 3)],
        )
        .unwrap();
        assert_eq!(placements.len(), 4);
    }

    #[test]
    fn outermost_pair_is_topmost() {
        let placements = layout_brackets(
            &[1.0, 2.0, 3.0],
            &[0.1, 0.1, 0.1],
            &[(1, 2), (0, 2), (0, 1)],
        )
        .unwrap();
        assert_eq!(placements[0].pair, (0, 2));
        assert_eq!(placements[1].pair, (0, 1));
        assert_eq!(placements[2].pair, (1, 2));
    }

    #[test]
    fn remaining_pairs_sort_lexicographically() {
        let placements = layout_brackets(
            &[0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.5, 0.5, 0.5, 0.5, 0.5],
            &[(2, 3), (0, 1), (1, 4), (0, 2)],
        )
        .unwrap();
        let order: Vec<_> = placements.iter().map(|p| p.pair).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 4), (2, 3)]);
    }

    #[test]
    fn consecutive_placements_differ_by_spacing() {
        let placements = layout_brackets(
            &[1.0, 2.0, 3.0],
            &[0.1, 0.3, 0.2],
            &[(0, 1), (0, 2), (1, 2)],
        )
        .unwrap();
        let spacing = 2.0 * 0.3;
        for pair in placements.windows(2) {
            assert!((pair[0].y - pair[1].y - spacing).abs() < 1e-12);
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let means = [2.0, 1.0, 4.0];
        let errs = [0.2, 0.1, 0.4];
        let pairs = [(0, 2), (1, 2)];
        let first = layout_brackets(&means, &errs, &pairs).unwrap();
        let second = layout_brackets(&means, &errs, &pairs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_group_without_pairs_is_empty() {
        let placements = layout_brackets(&[5.0], &[0.5], &[]).unwrap();
        assert!(placements.is_empty());
    }

    #[test]
    fn zero_std_errors_collapse_to_one_height() {
        let placements = layout_brackets(
            &[1.0, 2.0, 3.0],
            &[0.0, 0.0, 0.0],
            &[(0, 1), (0, 2)],
        )
        .unwrap();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].y, placements[1].y);
        assert_eq!(placements[0].y, 3.0);
    }

    #[test]
    fn out_of_range_pair_is_rejected() {
        let result = layout_brackets(&[1.0, 2.0, 3.0], &[0.1, 0.1, 0.1], &[(2, 5)]);
        assert_eq!(
            result,
            Err(LayoutError::PairOutOfRange {
                left: 2,
                right: 5,
                groups: 3
            })
        );
    }

    #[test]
    fn unordered_pair_is_rejected() {
        let result = layout_brackets(&[1.0, 2.0], &[0.1, 0.1], &[(1, 1)]);
        assert_eq!(result, Err(LayoutError::UnorderedPair { left: 1, right: 1 }));
        let result = layout_brackets(&[1.0, 2.0], &[0.1, 0.1], &[(1, 0)]);
        assert_eq!(result, Err(LayoutError::UnorderedPair { left: 1, right: 0 }));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let result = layout_brackets(&[1.0, 2.0], &[0.1], &[]);
        assert_eq!(
            result,
            Err(LayoutError::LengthMismatch {
                means: 2,
                std_errors: 1
            })
        );
    }

    #[test]
    fn empty_means_are_rejected() {
        assert_eq!(layout_brackets(&[], &[], &[]), Err(LayoutError::NoGroups));
    }

    #[test]
    fn negative_values_are_legal() {
        let placements =
            layout_brackets(&[-1.0, -2.0], &[0.1, 0.1], &[(0, 1)]).unwrap();
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn worked_example_matches_expected_geometry() {
        let placements = layout_brackets(
            &[1.0, 2.0, 3.0],
            &[0.1, 0.1, 0.1],
            &[(0, 2), (0, 1)],
        )
        .unwrap();
        // spacing = 0.2, base_top = 3 + 0.1 + 3 * 0.2 = 3.7
        assert_eq!(placements[0].pair, (0, 2));
        assert!((placements[0].y - 3.5).abs() < 1e-12);
        assert_eq!(placements[1].pair, (0, 1));
        assert!((placements[1].y - 3.3).abs() < 1e-12);
        assert_eq!(placements[0].height, 0.2);
        assert_eq!(placements[1].height, 0.2);
    }

    #[test]
    fn bracket_geometry_spans_the_pair() {
        let placement = BracketPlacement {
            pair: (1, 3),
            y: 5.0,
            height: 0.2,
        };
        assert_eq!(
            placement.polyline(),
            [(1.0, 5.0), (1.0, 5.2), (3.0, 5.2), (3.0, 5.0)]
        );
        assert_eq!(placement.label_anchor(), (2.0, 5.2));
    }
}
