//! Bidirectional search for the middle snake of an optimal edit path.
//!
//! A forward search from `(0, 0)` and a reverse search from `(N, M)` are
//! advanced one edit distance at a time until their furthest reaching paths
//! overlap. The snake at which they meet lies on a shortest edit path and
//! splits the problem into two independent halves. Only the two diagonal
//! arrays are needed, whatever the edit distance.

use crate::algorithm::diagonal::Diagonals;
use crate::algorithm::snake::{Snake, View, find_end_snake};

/// The snake where the two searches met, in forward coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MiddleSnake {
    pub(crate) snake: Snake,
    /// Found by the reverse search: its costed edge comes after the
    /// matching run when read left to right.
    pub(crate) reverse: bool,
    /// Edit distance of the whole sub-problem.
    pub(crate) d: isize,
}

pub(crate) fn find_middle_snake<T, U, F>(
    a: &[T],
    b: &[U],
    forward: &mut Diagonals,
    backward: &mut Diagonals,
    eq: &mut F,
) -> MiddleSnake
where
    F: FnMut(&T, &U) -> bool,
{
    let (n, m) = (a.len() as isize, b.len() as isize);
    let delta = n - m;
    let odd = delta % 2 != 0;
    debug_assert!((n + m + 1) / 2 <= forward.span().min(backward.span()));

    forward[1] = 0;
    backward[1] = 0;

    let (fa, fb) = (View::forward(a), View::forward(b));
    let (ra, rb) = (View::backward(a), View::backward(b));

    for d in 0..=(n + m + 1) / 2 {
        for k1 in (-d..=d).step_by(2) {
            let snake = find_end_snake(fa, fb, forward, d, k1, eq);
            forward[k1] = snake.u;

            let k2 = -(k1 - delta);
            if odd && -(d - 1) <= k2 && k2 <= d - 1 && forward[k1] + backward[k2] >= n {
                return MiddleSnake {
                    snake,
                    reverse: false,
                    d: 2 * d - 1,
                };
            }
        }

        for k2 in (-d..=d).step_by(2) {
            let snake = find_end_snake(ra, rb, backward, d, k2, eq);
            backward[k2] = snake.u;

            let k1 = -(k2 - delta);
            if !odd && -d <= k1 && k1 <= d && forward[k1] + backward[k2] >= n {
                return MiddleSnake {
                    snake: Snake {
                        x: n - snake.u,
                        y: m - snake.v,
                        u: n - snake.x,
                        v: m - snake.y,
                        add: snake.add,
                    },
                    reverse: true,
                    d: 2 * d,
                };
            }
        }
    }

    unreachable!("forward and reverse searches never overlapped for {n}x{m} edit graph")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn middle_snake(a: &str, b: &str) -> MiddleSnake {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let max = a.len() + b.len();
        let mut forward = Diagonals::new(max);
        let mut backward = Diagonals::new(max);

        find_middle_snake(&a, &b, &mut forward, &mut backward, &mut |x: &char, y: &char| x == y)
    }

    #[rstest]
    #[case("abcabba", "cbabac", 5)]
    #[case("a", "b", 2)]
    #[case("ab", "b", 1)]
    #[case("b", "ab", 1)]
    #[case("abc", "xyz", 6)]
    #[case("abcd", "acbd", 2)]
    fn reports_the_edit_distance(#[case] a: &str, #[case] b: &str, #[case] distance: isize) {
        assert_eq!(middle_snake(a, b).d, distance);
    }

    #[test]
    fn odd_distance_is_found_by_the_forward_search() {
        let found = middle_snake("abcabba", "cbabac");

        assert!(!found.reverse);
        assert_eq!(found.d % 2, 1);
    }

    #[test]
    fn even_distance_is_found_by_the_reverse_search() {
        let found = middle_snake("abcd", "acbd");

        assert!(found.reverse);
        assert_eq!(found.d, 2);
    }

    #[rstest]
    #[case("abcabba", "cbabac")]
    #[case("kitten", "sitting")]
    #[case("x", "y")]
    #[case("aaaa", "bbbbbbb")]
    fn snake_stays_inside_the_edit_graph(#[case] a: &str, #[case] b: &str) {
        let found = middle_snake(a, b);
        let Snake { x, y, u, v, .. } = found.snake;
        let (n, m) = (a.chars().count() as isize, b.chars().count() as isize);

        assert!(0 <= x && x <= u && u <= n, "x={x} u={u} n={n}");
        assert!(0 <= y && y <= v && v <= m, "y={y} v={v} m={m}");
        assert_eq!(u - x, v - y);
    }
}
