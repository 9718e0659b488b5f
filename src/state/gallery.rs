use std::rc::Rc;
use yew::Reducible;

use crate::model::{Discovery, GalleryEntry};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub entries: Vec<GalleryEntry>,
    /// `None` while discovery is still running.
    pub outcome: Option<Discovery>,
}

pub enum GalleryAction {
    Found(GalleryEntry),
    Finished(Discovery),
}

impl GalleryState {
    /// The empty-state hint only appears once discovery has given up.
    pub fn show_placeholder(&self) -> bool {
        self.outcome.is_some() && self.entries.is_empty()
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Found(entry) => next.entries.push(entry),
            GalleryAction::Finished(outcome) => next.outcome = Some(outcome),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_waits_for_discovery_to_finish() {
        let state = Rc::new(GalleryState::default());
        assert!(!state.show_placeholder());
        let done = state.reduce(GalleryAction::Finished(Discovery::Probed {
            found: 0,
            last_index: 6,
        }));
        assert!(done.show_placeholder());
    }

    #[test]
    fn found_entries_append_in_order() {
        let state = Rc::new(GalleryState::default())
            .reduce(GalleryAction::Found(GalleryEntry::new(2, "b")))
            .reduce(GalleryAction::Found(GalleryEntry::new(5, "e")))
            .reduce(GalleryAction::Finished(Discovery::Probed {
                found: 2,
                last_index: 11,
            }));
        assert_eq!(
            state.entries.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert!(!state.show_placeholder());
    }
}
