//! Enclosing circle algorithms: a cheap heuristic bounding circle and the exact smallest
//! enclosing circle (Welzl's randomized incremental algorithm).
use crate::circle::Circle;
use crate::core::traits::Real;
use crate::point::Point;
use rand::seq::SliceRandom;
use rand::Rng;

/// Heuristic bounding circle covering all `points`, O(n) and not guaranteed minimal.
///
/// Scans for the extreme points along each axis, seeds a circle on the diameter of the axis pair
/// with the larger separation, then grows the radius (never moving the center) until every point
/// is covered. Because the center stays where it was seeded the result is an upper bound on the
/// smallest enclosing circle, useful as a fast baseline.
///
/// Empty input yields a radius zero circle at the origin.
pub fn heuristic_enclosing_circle<T>(points: &[Point<T>]) -> Circle<T>
where
    T: Real,
{
    let first = match points.first() {
        Some(p) => *p,
        None => return Circle::zero(),
    };

    let mut min_x = first;
    let mut max_x = first;
    let mut min_y = first;
    let mut max_y = first;

    // strict comparisons so ties keep the first occurrence
    for p in points {
        if p.pos.x < min_x.pos.x {
            min_x = *p;
        }
        if p.pos.x > max_x.pos.x {
            max_x = *p;
        }
        if p.pos.y < min_y.pos.y {
            min_y = *p;
        }
        if p.pos.y > max_y.pos.y {
            max_y = *p;
        }
    }

    let x_separation = Point::distance(min_x, max_x);
    let y_separation = Point::distance(min_y, max_y);

    let seed = if x_separation > y_separation {
        Circle::from_diameter(min_x, max_x)
    } else {
        Circle::from_diameter(min_y, max_y)
    };

    // grow the radius to the farthest point, center fixed
    points.iter().fold(seed, |circle, p| {
        let d = Point::distance(circle.center, *p);
        if circle.radius < d {
            Circle::new(circle.center, d)
        } else {
            circle
        }
    })
}

/// Exact smallest enclosing circle of `points` using a thread local random source for the
/// permutation step.
///
/// Expected O(n) running time. See [smallest_enclosing_circle_with_rng] for a seedable variant
/// with reproducible execution paths.
///
/// Degenerate inputs are not errors: empty input yields a radius zero circle at the origin, a
/// single point yields a radius zero circle at that point, and collinear/duplicate point sets
/// are covered by a diameter circle.
pub fn smallest_enclosing_circle<T>(points: &[Point<T>]) -> Circle<T>
where
    T: Real,
{
    smallest_enclosing_circle_with_rng(points, &mut rand::thread_rng())
}

/// Exact smallest enclosing circle of `points`, drawing the random permutation from `rng`.
///
/// The random processing order is what gives Welzl's algorithm its expected linear running time
/// (adversarial orderings trigger the quadratic worst case); it does not affect the result, the
/// smallest enclosing circle is unique. Passing a seeded rng (e.g.
/// `StdRng::seed_from_u64(seed)`) makes the execution path reproducible.
pub fn smallest_enclosing_circle_with_rng<T, R>(points: &[Point<T>], rng: &mut R) -> Circle<T>
where
    T: Real,
    R: Rng,
{
    let mut shuffled = points.to_vec();
    shuffled.shuffle(rng);
    welzl(&shuffled)
}

/// Boundary point set of the Welzl recursion, holds at most 3 points (3 boundary points fully
/// determine a circle).
#[derive(Debug, Copy, Clone)]
struct Boundary<T> {
    points: [Point<T>; 3],
    count: usize,
}

impl<T> Boundary<T>
where
    T: Real,
{
    fn empty() -> Self {
        Boundary {
            points: [Point::origin(); 3],
            count: 0,
        }
    }

    fn with(&self, p: Point<T>) -> Self {
        debug_assert!(self.count < 3, "boundary set can hold at most 3 points");
        let mut extended = *self;
        extended.points[extended.count] = p;
        extended.count += 1;
        extended
    }

    fn as_slice(&self) -> &[Point<T>] {
        &self.points[..self.count]
    }
}

/// Pending work of the iterative Welzl solver.
///
/// `Solve` computes the smallest circle enclosing the first `candidates` shuffled points with
/// every `boundary` point on the circle's edge. `Revisit` runs after the nested `Solve` finished
/// and decides whether candidate point `candidates - 1` forces a re-solve with that point
/// constrained to the boundary.
enum Frame<T> {
    Solve {
        candidates: usize,
        boundary: Boundary<T>,
    },
    Revisit {
        candidates: usize,
        boundary: Boundary<T>,
    },
}

/// Welzl's algorithm over an already shuffled point slice.
///
/// The textbook formulation is recursive with worst case O(n) stack depth; this implementation
/// drives the same recursion tree with an explicit frame stack so large inputs cannot overflow
/// the call stack. The circle produced by the most recently completed `Solve` frame doubles as
/// the recursion's return value register.
fn welzl<T>(points: &[Point<T>]) -> Circle<T>
where
    T: Real,
{
    let mut stack = vec![Frame::Solve {
        candidates: points.len(),
        boundary: Boundary::empty(),
    }];
    let mut result = Circle::zero();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Solve {
                candidates,
                boundary,
            } => {
                if boundary.count == 3 {
                    // 3 boundary points fully determine the circle regardless of remaining
                    // candidates
                    result = boundary_circle(&boundary);
                } else if candidates == 0 {
                    result = match *boundary.as_slice() {
                        [] => Circle::zero(),
                        [p] => Circle::new(p, T::zero()),
                        [p0, p1] => Circle::from_diameter(p0, p1),
                        _ => unreachable!("boundary set holds at most 3 points"),
                    };
                } else {
                    stack.push(Frame::Revisit {
                        candidates,
                        boundary,
                    });
                    stack.push(Frame::Solve {
                        candidates: candidates - 1,
                        boundary,
                    });
                }
            }
            Frame::Revisit {
                candidates,
                boundary,
            } => {
                let p = points[candidates - 1];
                if !result.contains_point(p) {
                    // p must lie on the boundary of the true answer
                    stack.push(Frame::Solve {
                        candidates: candidates - 1,
                        boundary: boundary.with(p),
                    });
                }
            }
        }
    }

    result
}

/// Circle through the 3 points of a full boundary set.
///
/// A collinear (or duplicate point) triple has no finite circumcircle; it can only reach a full
/// boundary set when the input itself contains such points, and the correct enclosing circle is
/// then the diameter circle over the farthest apart pair. That degenerate branch is handled
/// here so no error escapes the exact algorithm.
fn boundary_circle<T>(boundary: &Boundary<T>) -> Circle<T>
where
    T: Real,
{
    let [p0, p1, p2] = boundary.points;
    match Circle::circumcircle(p0, p1, p2) {
        Ok(circle) => circle,
        Err(_) => {
            let d01 = Point::distance_squared(p0, p1);
            let d02 = Point::distance_squared(p0, p2);
            let d12 = Point::distance_squared(p1, p2);
            if d01 >= d02 && d01 >= d12 {
                Circle::from_diameter(p0, p1)
            } else if d02 >= d12 {
                Circle::from_diameter(p0, p2)
            } else {
                Circle::from_diameter(p1, p2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn collinear_boundary_falls_back_to_extreme_pair() {
        let boundary = Boundary::empty()
            .with(Point::new(0.0, 0.0))
            .with(Point::new(1.0, 1.0))
            .with(Point::new(3.0, 3.0));
        let circle = boundary_circle(&boundary);
        assert!(circle.center.fuzzy_eq(Point::new(1.5, 1.5)));
        assert!(circle.radius.fuzzy_eq(18.0f64.sqrt() / 2.0));
    }

    #[test]
    fn duplicate_boundary_points_fall_back() {
        let p = Point::new(2.0, -1.0);
        let boundary = Boundary::empty().with(p).with(p).with(p);
        let circle = boundary_circle(&boundary);
        assert!(circle.center.fuzzy_eq(p));
        assert!(circle.radius.fuzzy_eq_zero());
    }
}
