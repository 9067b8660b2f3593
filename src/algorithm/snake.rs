use crate::algorithm::diagonal::Diagonals;

/// Read-only window over one side of the edit graph.
///
/// The reverse half of the middle snake search walks both sequences back to
/// front; flipping the view keeps the snake finder oblivious to direction.
#[derive(Debug)]
pub(crate) struct View<'d, T> {
    items: &'d [T],
    reversed: bool,
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for View<'_, T> {}

impl<'d, T> View<'d, T> {
    pub(crate) fn forward(items: &'d [T]) -> Self {
        Self {
            items,
            reversed: false,
        }
    }

    pub(crate) fn backward(items: &'d [T]) -> Self {
        Self {
            items,
            reversed: true,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn at(&self, i: usize) -> &'d T {
        if self.reversed {
            &self.items[self.items.len() - 1 - i]
        } else {
            &self.items[i]
        }
    }
}

/// A costed edge followed by a (possibly empty) run of matches.
///
/// `(x, y)` is the point reached right after the edge, `(u, v)` the point
/// after the matching run. `add` tells whether the edge was vertical
/// (an insertion from B) or horizontal (a deletion from A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snake {
    pub(crate) x: isize,
    pub(crate) y: isize,
    pub(crate) u: isize,
    pub(crate) v: isize,
    pub(crate) add: bool,
}

/// Extends the furthest reaching `d`-path on diagonal `k`.
///
/// The caller is responsible for recording `V[k] = snake.u`.
pub(crate) fn find_end_snake<T, U, F>(
    a: View<'_, T>,
    b: View<'_, U>,
    diagonals: &Diagonals,
    d: isize,
    k: isize,
    eq: &mut F,
) -> Snake
where
    F: FnMut(&T, &U) -> bool,
{
    let (n, m) = (a.len() as isize, b.len() as isize);

    // the right-hand diagonal already went further along x: step down from it,
    // otherwise step right from the left-hand diagonal
    let add = k == -d || (k != d && diagonals[k - 1] < diagonals[k + 1]);
    let x = if add {
        diagonals[k + 1]
    } else {
        diagonals[k - 1] + 1
    };
    let y = x - k;

    let (mut u, mut v) = (x, y);
    while u < n && v < m && eq(a.at(u as usize), b.at(v as usize)) {
        u += 1;
        v += 1;
    }

    Snake { x, y, u, v, add }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn eq(a: &char, b: &char) -> bool {
        a == b
    }

    #[test]
    fn first_step_follows_the_common_prefix() {
        let a: Vec<char> = "abcx".chars().collect();
        let b: Vec<char> = "abcy".chars().collect();
        let mut diagonals = Diagonals::new(8);
        diagonals[1] = 0;

        let snake = find_end_snake(
            View::forward(&a),
            View::forward(&b),
            &diagonals,
            0,
            0,
            &mut eq,
        );

        assert_eq!(
            snake,
            Snake {
                x: 0,
                y: 0,
                u: 3,
                v: 3,
                add: true
            }
        );
    }

    #[test]
    fn lowest_diagonal_always_takes_a_vertical_edge() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "xab".chars().collect();
        let mut diagonals = Diagonals::new(5);
        diagonals[0] = 0;

        let snake = find_end_snake(
            View::forward(&a),
            View::forward(&b),
            &diagonals,
            1,
            -1,
            &mut eq,
        );

        assert!(snake.add);
        assert_eq!((snake.x, snake.y), (0, 1));
        assert_eq!((snake.u, snake.v), (2, 3));
    }

    #[test]
    fn highest_diagonal_always_takes_a_horizontal_edge() {
        let a: Vec<char> = "xab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        let mut diagonals = Diagonals::new(5);
        diagonals[0] = 0;

        let snake = find_end_snake(
            View::forward(&a),
            View::forward(&b),
            &diagonals,
            1,
            1,
            &mut eq,
        );

        assert!(!snake.add);
        assert_eq!((snake.x, snake.y), (1, 0));
        assert_eq!((snake.u, snake.v), (3, 2));
    }

    #[test]
    fn tie_between_neighbours_prefers_the_horizontal_edge() {
        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        let mut diagonals = Diagonals::new(4);
        diagonals[-1] = 1;
        diagonals[1] = 1;

        let snake = find_end_snake(
            View::forward(&a),
            View::forward(&b),
            &diagonals,
            2,
            0,
            &mut eq,
        );

        assert!(!snake.add);
        assert_eq!((snake.x, snake.y), (2, 2));
    }

    #[test]
    fn backward_view_reads_from_the_end() {
        let items = [1, 2, 3];
        let view = View::backward(&items);

        assert_eq!(*view.at(0), 3);
        assert_eq!(*view.at(2), 1);
        assert_eq!(view.len(), 3);
    }
}
