// SPDX-License-Identifier: MPL-2.0
//! Navigation state and transition planning.
//!
//! Planning is pure: it resolves the target position and the payload to
//! report. Committing is the only way the displayed item changes.

use super::callbacks::{SlideAction, SlideChange, Slides};
use crate::application::query::navigation::{
    adjacent, index_of, next_index, previous_index, resolve_direction,
};
use crate::domain::gallery::{Collection, Direction, Item, ItemId, NavigationHint};
use crate::error::{Error, Result};

/// Displayed item and the direction of the last transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Option<Item>,
    direction: Direction,
}

impl NavigationState {
    #[must_use]
    pub fn new(current: Option<Item>) -> Self {
        Self {
            current,
            direction: Direction::None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&ItemId> {
        self.current.as_ref().map(|item| &item.id)
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction of a move to `target_index`.
    ///
    /// Without a hint, positions of the target and the current item are
    /// compared. If the current item is gone from the collection its
    /// identifier is compared instead; with no current item there is no
    /// direction.
    #[must_use]
    pub fn direction_to(
        &self,
        collection: &Collection,
        target_index: usize,
        hint: Option<NavigationHint>,
    ) -> Direction {
        let Some(current) = self.current.as_ref() else {
            return match hint {
                Some(NavigationHint::Next) => Direction::Forward,
                Some(NavigationHint::Previous) => Direction::Backward,
                None => Direction::None,
            };
        };

        match index_of(collection.as_slice(), &current.id) {
            Some(current_index) => resolve_direction(&target_index, &current_index, hint),
            None => match collection.get(target_index) {
                Some(target) => resolve_direction(&target.id, &current.id, hint),
                None => Direction::None,
            },
        }
    }

    pub(crate) fn commit(&mut self, item: Item, direction: Direction) {
        self.current = Some(item);
        self.direction = direction;
    }

    /// Sets the displayed item without a transition.
    pub(crate) fn assume(&mut self, item: Item) {
        self.current = Some(item);
    }
}

/// A resolved navigation request, ready to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub index: usize,
    pub hint: Option<NavigationHint>,
    pub change: SlideChange,
}

impl Transition {
    fn at(collection: &Collection, index: usize, action: SlideAction) -> Option<Self> {
        let neighbours = adjacent(collection.as_slice(), index);
        let current = neighbours.current?.clone();
        let hint = match action {
            SlideAction::Selected => None,
            SlideAction::Right => Some(NavigationHint::Next),
            SlideAction::Left => Some(NavigationHint::Previous),
        };

        Some(Self {
            index,
            hint,
            change: SlideChange {
                action,
                slides: Slides {
                    previous: neighbours.previous.cloned(),
                    current,
                    next: neighbours.next.cloned(),
                },
                index,
            },
        })
    }

    #[must_use]
    pub fn target(&self) -> &Item {
        &self.change.slides.current
    }
}

fn position(collection: &Collection, id: &ItemId) -> Result<usize> {
    index_of(collection.as_slice(), id).ok_or_else(|| Error::ItemNotFound(id.clone()))
}

/// Plans a direct selection of `target`.
pub fn plan_select(collection: &Collection, target: &ItemId) -> Result<Transition> {
    let index = position(collection, target)?;
    Transition::at(collection, index, SlideAction::Selected)
        .ok_or_else(|| Error::ItemNotFound(target.clone()))
}

/// Plans a forward move from `from`, wrapping to the first item.
pub fn plan_next(collection: &Collection, from: &ItemId) -> Result<Transition> {
    let index = position(collection, from)?;
    next_index(index, collection.len())
        .and_then(|next| Transition::at(collection, next, SlideAction::Right))
        .ok_or_else(|| Error::ItemNotFound(from.clone()))
}

/// Plans a backward move from `from`, wrapping to the last item.
pub fn plan_previous(collection: &Collection, from: &ItemId) -> Result<Transition> {
    let index = position(collection, from)?;
    previous_index(index, collection.len())
        .and_then(|previous| Transition::at(collection, previous, SlideAction::Left))
        .ok_or_else(|| Error::ItemNotFound(from.clone()))
}
