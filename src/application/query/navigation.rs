// SPDX-License-Identifier: MPL-2.0
//! Index and direction resolution over an ordered collection.
//!
//! These are pure functions: positions are always looked up by identifier
//! because the collection may be replaced between two events.

use crate::domain::gallery::{Direction, Item, ItemId, NavigationHint};

/// Neighbours of a position, without wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<'a> {
    pub previous: Option<&'a Item>,
    pub current: Option<&'a Item>,
    pub next: Option<&'a Item>,
}

/// Returns the position of the item with the given identifier.
#[must_use]
pub fn index_of(items: &[Item], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| &item.id == id)
}

/// Computes the transition direction from `current` to `target`.
///
/// An explicit hint wins outright. Otherwise the values are compared with
/// their natural order: greater is forward, lesser is backward, equal is
/// no direction at all.
#[must_use]
pub fn resolve_direction<T: Ord + ?Sized>(
    target: &T,
    current: &T,
    hint: Option<NavigationHint>,
) -> Direction {
    match hint {
        Some(NavigationHint::Next) => Direction::Forward,
        Some(NavigationHint::Previous) => Direction::Backward,
        None => match target.cmp(current) {
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        },
    }
}

/// Index following `index`, wrapping to 0 past the end.
///
/// Returns `None` for an empty collection.
#[must_use]
pub fn next_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index + 1) % len)
}

/// Index preceding `index`, wrapping to the last position below 0.
///
/// Returns `None` for an empty collection.
#[must_use]
pub fn previous_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(if index == 0 { len - 1 } else { (index - 1).min(len - 1) })
}

/// Returns the raw neighbours of `index`. Boundaries are reported as absent.
#[must_use]
pub fn adjacent(items: &[Item], index: usize) -> Adjacent<'_> {
    Adjacent {
        previous: index.checked_sub(1).and_then(|i| items.get(i)),
        current: items.get(index),
        next: index.checked_add(1).and_then(|i| items.get(i)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter()
            .map(|id| Item::new(*id, format!("{id}.png")))
            .collect()
    }

    #[test]
    fn index_of_finds_existing_item() {
        let list = items(&["a", "b", "c"]);
        assert_eq!(index_of(&list, &ItemId::from("b")), Some(1));
    }

    #[test]
    fn index_of_reports_missing_item() {
        let list = items(&["a", "b", "c"]);
        assert_eq!(index_of(&list, &ItemId::from("z")), None);
        assert_eq!(index_of(&[], &ItemId::from("a")), None);
    }

    #[test]
    fn hint_wins_over_comparison() {
        assert_eq!(
            resolve_direction(&1, &5, Some(NavigationHint::Next)),
            Direction::Forward
        );
        assert_eq!(
            resolve_direction(&5, &1, Some(NavigationHint::Previous)),
            Direction::Backward
        );
        assert_eq!(
            resolve_direction(&3, &3, Some(NavigationHint::Next)),
            Direction::Forward
        );
    }

    #[test]
    fn comparison_without_hint() {
        assert_eq!(resolve_direction(&2, &1, None), Direction::Forward);
        assert_eq!(resolve_direction(&1, &2, None), Direction::Backward);
        assert_eq!(resolve_direction(&2, &2, None), Direction::None);
        assert_eq!(
            resolve_direction(&ItemId::from("b"), &ItemId::from("a"), None),
            Direction::Forward
        );
    }

    #[test]
    fn next_index_wraps_at_end() {
        for len in 1..6 {
            for i in 0..len {
                assert_eq!(next_index(i, len), Some((i + 1) % len));
            }
            assert_eq!(next_index(len - 1, len), Some(0));
        }
        assert_eq!(next_index(0, 0), None);
    }

    #[test]
    fn previous_index_wraps_at_start() {
        for len in 1..6 {
            for i in 0..len {
                assert_eq!(previous_index(i, len), Some((i + len - 1) % len));
            }
            assert_eq!(previous_index(0, len), Some(len - 1));
        }
        assert_eq!(previous_index(0, 0), None);
    }

    #[test]
    fn adjacent_reports_boundaries_as_absent() {
        let list = items(&["a", "b", "c"]);

        let first = adjacent(&list, 0);
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|i| i.id.as_str()), Some("b"));

        let last = adjacent(&list, 2);
        assert_eq!(last.previous.map(|i| i.id.as_str()), Some("b"));
        assert!(last.next.is_none());
    }
}
