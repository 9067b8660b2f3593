use crate::algorithm::diagonal::Diagonals;
use crate::algorithm::middle_snake::find_middle_snake;
use crate::script::edit_script::EditScript;
use crate::script::record::Diff;
use derive_new::new;
use std::ops::Range;

/// Computes the edit script turning `a` into `b` with native equality.
pub fn find_diff<T: PartialEq>(a: &[T], b: &[T]) -> EditScript {
    find_diff_by(a, b, |x, y| x == y)
}

/// Computes the edit script turning `a` into `b`, comparing elements with
/// `eq`.
///
/// `eq` must behave as an equivalence relation and give the same answer for
/// the same pair throughout the call; the script is only guaranteed minimal
/// under that condition.
pub fn find_diff_by<T, U, F>(a: &[T], b: &[U], mut eq: F) -> EditScript
where
    F: FnMut(&T, &U) -> bool,
{
    let max = a.len() + b.len();
    let mut forward = Diagonals::new(max);
    let mut backward = Diagonals::new(max);
    let mut script = EditScript::new();

    let mut search = Search {
        a,
        b,
        forward: &mut forward,
        backward: &mut backward,
        eq: &mut eq,
        script: &mut script,
    };
    search.diff(0..a.len(), 0..b.len());

    tracing::debug!(
        old_len = a.len(),
        new_len = b.len(),
        distance = script.distance(),
        records = script.len(),
        "computed edit script"
    );

    script
}

/// Struct-style entry point over a pair of slices.
///
/// ```
/// use snakediff::MyersDiff;
///
/// let a = ["one", "two", "three"];
/// let b = ["one", "three", "four"];
/// let script = MyersDiff::new(&a, &b).diff();
///
/// assert_eq!(script.distance(), 2);
/// assert_eq!(script.apply(&a, &b), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T> MyersDiff<'d, T> {
    pub fn diff(&self) -> EditScript
    where
        T: PartialEq,
    {
        find_diff(self.a, self.b)
    }

    pub fn diff_by<F>(&self, eq: F) -> EditScript
    where
        F: FnMut(&T, &T) -> bool,
    {
        find_diff_by(self.a, self.b, eq)
    }
}

struct Search<'s, T, U, F> {
    a: &'s [T],
    b: &'s [U],
    forward: &'s mut Diagonals,
    backward: &'s mut Diagonals,
    eq: &'s mut F,
    script: &'s mut EditScript,
}

impl<T, U, F> Search<'_, T, U, F>
where
    F: FnMut(&T, &U) -> bool,
{
    fn diff(&mut self, mut a: Range<usize>, mut b: Range<usize>) {
        let mut prefix_len = 0;
        while !a.is_empty() && !b.is_empty() && (self.eq)(&self.a[a.start], &self.b[b.start]) {
            a.start += 1;
            b.start += 1;
            prefix_len += 1;
        }

        let mut suffix_len = 0;
        while !a.is_empty() && !b.is_empty() && (self.eq)(&self.a[a.end - 1], &self.b[b.end - 1])
        {
            a.end -= 1;
            b.end -= 1;
            suffix_len += 1;
        }

        self.script.append(Diff::keep(prefix_len));

        if a.is_empty() {
            self.script.append(Diff::add(b.len(), b.start));
        } else if b.is_empty() {
            self.script.append(Diff::remove(a.len()));
        } else {
            self.split(a, b);
        }

        self.script.append(Diff::keep(suffix_len));
    }

    fn split(&mut self, a: Range<usize>, b: Range<usize>) {
        let found = find_middle_snake(
            &self.a[a.clone()],
            &self.b[b.clone()],
            self.forward,
            self.backward,
            self.eq,
        );
        let snake = found.snake;
        let (len_a, len_b) = (a.len() as isize, b.len() as isize);

        assert!(
            found.d > 0
                && 0 <= snake.x
                && snake.x <= snake.u
                && snake.u <= len_a
                && 0 <= snake.y
                && snake.y <= snake.v
                && snake.v <= len_b,
            "middle snake {snake:?} (d = {}) escapes the {len_a}x{len_b} sub-problem",
            found.d
        );

        tracing::trace!(
            a = ?a,
            b = ?b,
            d = found.d,
            reverse = found.reverse,
            ?snake,
            "found middle snake"
        );

        let (x, y, u, v) = (
            snake.x as usize,
            snake.y as usize,
            snake.u as usize,
            snake.v as usize,
        );
        let recurse = found.d > 1;

        // a forward snake is preceded by its edge, a reverse one followed by it
        let (before_a, before_b, after_a, after_b) = match (found.reverse, snake.add) {
            (false, true) => (x, y - 1, u, v),
            (false, false) => (x - 1, y, u, v),
            (true, true) => (x, y, u, v + 1),
            (true, false) => (x, y, u + 1, v),
        };

        if recurse {
            self.diff(a.start..a.start + before_a, b.start..b.start + before_b);
        }

        // a forward add edge ends at y, a reverse one starts at v
        let edge = if !snake.add {
            Diff::remove(1)
        } else if found.reverse {
            Diff::add(1, b.start + v)
        } else {
            Diff::add(1, b.start + y - 1)
        };

        if !found.reverse {
            self.script.append(edge);
        }

        self.script.append(Diff::keep(u - x));

        if found.reverse {
            self.script.append(edge);
        }

        if recurse {
            self.diff(a.start + after_a..a.end, b.start + after_b..b.end);
        }
    }
}
