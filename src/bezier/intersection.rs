/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::consts::*;
use crate::geo::*;

///
/// A single point where two curves cross
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveIntersection {
    /// Where the curves cross
    ///
    /// This is the average of the two curves' positions at `t1` and `t2`. Once the search
    /// has converged those positions lie within the requested tolerance of each other, but
    /// they are not guaranteed to coincide exactly.
    pub point: Point2D,

    /// Position of the intersection on the first curve
    pub t1: f64,

    /// Position of the intersection on the second curve
    pub t2: f64,
}

///
/// Finds the points where two curves cross, to within a distance tolerance
///
/// The curves can be different types (a line crossed with a cubic, say): only the curve
/// contract is used. The search recursion is capped at `DEFAULT_MAX_DEPTH`;
/// `curve_intersects_curve_with_depth` exposes the cap for callers that want a different
/// cost/completeness trade.
///
pub fn curve_intersects_curve<C1, C2>(curve1: &C1, curve2: &C2, tolerance: f64) -> Vec<CurveIntersection>
where
    C1: BezierCurve,
    C2: BezierCurve,
{
    curve_intersects_curve_with_depth(curve1, curve2, tolerance, DEFAULT_MAX_DEPTH)
}

///
/// Finds the points where two curves cross, with an explicit recursion depth limit
///
/// Both curves are repeatedly subdivided wherever their bounding boxes overlap, and an
/// intersection is reported once both boxes are smaller than `tolerance` on every side.
/// Pairs whose boxes are disjoint are discarded without recursing, which is what keeps the
/// search tractable: only genuinely crossing regions subdivide deeply.
///
/// Branches still unresolved at `max_depth` are abandoned. That bounds the cost of
/// searching curves that overlap along a whole arc (a curve intersected with itself, say),
/// at the price of under-reporting intersections that would need a finer subdivision than
/// the depth budget allows. An empty result is a valid outcome, not an error.
///
pub fn curve_intersects_curve_with_depth<C1, C2>(
    curve1: &C1,
    curve2: &C2,
    tolerance: f64,
    max_depth: usize,
) -> Vec<CurveIntersection>
where
    C1: BezierCurve,
    C2: BezierCurve,
{
    let found = subdivision_search(curve1, (0.0, 1.0), curve2, (0.0, 1.0), tolerance, max_depth);

    remove_duplicates(found, tolerance)
}

///
/// One branch of the subdivision search
///
/// `segment1` and `segment2` are pieces of the original curves; `range1` and `range2` are
/// the position sub-intervals on the originals that those pieces cover, so that converged
/// intersections can be reported in the original curves' frame rather than the segment's.
/// Each branch returns its own list of results and the caller merges them, so there is no
/// shared accumulator threaded through the recursion.
///
fn subdivision_search<C1, C2>(
    segment1: &C1,
    range1: (f64, f64),
    segment2: &C2,
    range2: (f64, f64),
    tolerance: f64,
    remaining_depth: usize,
) -> Vec<CurveIntersection>
where
    C1: BezierCurve,
    C2: BezierCurve,
{
    test_assert!(range1.0 <= range1.1);
    test_assert!(range2.0 <= range2.1);

    let bounds1 = segment1.bounding_box();
    let bounds2 = segment2.bounding_box();

    // Disjoint boxes cannot contain a crossing
    if !bounds1.overlaps(&bounds2) {
        return vec![];
    }

    // Both pieces smaller than the tolerance in every direction: report an intersection at
    // the middle of the two sub-intervals
    if bounds1.longest_side() < tolerance && bounds2.longest_side() < tolerance {
        let t1 = (range1.0 + range1.1) * 0.5;
        let t2 = (range2.0 + range2.1) * 0.5;
        let point = (segment1.point_at_pos(0.5) + segment2.point_at_pos(0.5)) * 0.5;

        return vec![CurveIntersection { point, t1, t2 }];
    }

    // Out of depth budget before converging: abandon the branch
    if remaining_depth == 0 {
        return vec![];
    }

    let (left1, right1) = segment1.subdivide(0.5);
    let (left2, right2) = segment2.subdivide(0.5);

    let mid1 = (range1.0 + range1.1) * 0.5;
    let mid2 = (range2.0 + range2.1) * 0.5;

    let mut found = vec![];

    found.extend(subdivision_search(&left1, (range1.0, mid1), &left2, (range2.0, mid2), tolerance, remaining_depth - 1));
    found.extend(subdivision_search(&left1, (range1.0, mid1), &right2, (mid2, range2.1), tolerance, remaining_depth - 1));
    found.extend(subdivision_search(&right1, (mid1, range1.1), &left2, (range2.0, mid2), tolerance, remaining_depth - 1));
    found.extend(subdivision_search(&right1, (mid1, range1.1), &right2, (mid2, range2.1), tolerance, remaining_depth - 1));

    found
}

///
/// Collapses reported intersections that lie closer together than the tolerance
///
/// Adjacent subdivision branches can converge on the same true crossing from either side;
/// the first report for any location wins.
///
fn remove_duplicates(found: Vec<CurveIntersection>, tolerance: f64) -> Vec<CurveIntersection> {
    let mut distinct: Vec<CurveIntersection> = vec![];

    for candidate in found {
        let already_seen = distinct
            .iter()
            .any(|seen| seen.point.distance_to(&candidate.point) < tolerance);

        if !already_seen {
            distinct.push(candidate);
        }
    }

    distinct
}
