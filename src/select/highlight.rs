#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

/// Moves the highlight one row among the visible options, clamped at both ends.
///
/// `visible` holds option indices in display order. A highlight that is not among
/// them counts as sitting above the first row, so `Down` lands on the first row
/// and `Up` keeps it where it is.
pub fn step(visible: &[usize], current: Option<usize>, direction: NavDirection) -> Option<usize> {
    if visible.is_empty() {
        return current;
    }

    let pos = current.and_then(|current| visible.iter().position(|i| *i == current));

    match (direction, pos) {
        (NavDirection::Down, None) => visible.first().copied(),
        (NavDirection::Down, Some(pos)) => visible.get(pos + 1).or(visible.get(pos)).copied(),
        (NavDirection::Up, None) => current,
        (NavDirection::Up, Some(pos)) => visible.get(pos.saturating_sub(1)).copied(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::down_from_nothing(&[0, 1, 2], None, NavDirection::Down, Some(0))]
    #[case::up_from_nothing(&[0, 1, 2], None, NavDirection::Up, None)]
    #[case::down(&[0, 1, 2], Some(0), NavDirection::Down, Some(1))]
    #[case::down_clamped(&[0, 1, 2], Some(2), NavDirection::Down, Some(2))]
    #[case::up(&[0, 1, 2], Some(2), NavDirection::Up, Some(1))]
    #[case::up_clamped(&[0, 1, 2], Some(0), NavDirection::Up, Some(0))]
    #[case::skips_hidden(&[1, 4], Some(1), NavDirection::Down, Some(4))]
    #[case::hidden_highlight_down(&[1, 4], Some(2), NavDirection::Down, Some(1))]
    #[case::nothing_visible(&[], Some(2), NavDirection::Down, Some(2))]
    fn step_highlight(
        #[case] visible: &[usize],
        #[case] current: Option<usize>,
        #[case] direction: NavDirection,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(step(visible, current, direction), expected);
    }

    #[test]
    fn repeated_steps_stay_in_bounds() {
        let visible = [0, 1, 2];
        let mut current = None;

        for _ in 0..10 {
            current = step(&visible, current, NavDirection::Down);
        }
        assert_eq!(current, Some(2));

        for _ in 0..10 {
            current = step(&visible, current, NavDirection::Up);
        }
        assert_eq!(current, Some(0));
    }
}
