use std::rc::Rc;
use yew::Reducible;

use super::zoom::{DragState, ZoomState};

/// Delay before the closed viewer drops its image, long enough for the
/// fade-out transition.
pub const CLEAR_SOURCE_DELAY_MS: u32 = 300;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct LightboxState {
    pub open: bool,
    pub src: Option<String>,
    pub zoom: ZoomState,
    pub drag: DragState,
    /// Bumped on every open so a pending clear from an earlier close can be
    /// recognised as stale.
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxAction {
    Open(String),
    Close,
    ClearSource { generation: u32 },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Wheel { delta_y: f64 },
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxAction::Open(src) => {
                next.open = true;
                next.src = Some(src);
                next.generation = next.generation.wrapping_add(1);
                next.zoom.reset();
                next.drag = DragState::default();
            }
            LightboxAction::Close => {
                if !next.open {
                    return self;
                }
                next.open = false;
                next.drag = DragState::default();
            }
            LightboxAction::ClearSource { generation } => {
                if next.open || generation != next.generation {
                    return self;
                }
                next.src = None;
            }
            LightboxAction::ZoomIn => next.zoom.zoom_in(),
            LightboxAction::ZoomOut => next.zoom.zoom_out(),
            LightboxAction::ResetZoom => next.zoom.reset(),
            LightboxAction::Wheel { delta_y } => {
                if !next.open {
                    return self;
                }
                if delta_y < 0.0 {
                    next.zoom.zoom_in();
                } else {
                    next.zoom.zoom_out();
                }
            }
            LightboxAction::DragStart { x, y } => {
                if !next.zoom.can_pan() {
                    return self;
                }
                next.drag = DragState {
                    active: true,
                    grab_x: x - next.zoom.offset_x,
                    grab_y: y - next.zoom.offset_y,
                };
            }
            LightboxAction::DragMove { x, y } => {
                if !next.drag.active || !next.zoom.can_pan() {
                    return self;
                }
                next.zoom.offset_x = x - next.drag.grab_x;
                next.zoom.offset_y = y - next.drag.grab_y;
            }
            LightboxAction::DragEnd => {
                if !next.drag.active {
                    return self;
                }
                next.drag.active = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: LightboxState, actions: impl IntoIterator<Item = LightboxAction>) -> LightboxState {
        let mut rc = Rc::new(state);
        for action in actions {
            rc = rc.reduce(action);
        }
        (*rc).clone()
    }

    fn opened() -> LightboxState {
        apply(LightboxState::default(), [LightboxAction::Open("a.png".into())])
    }

    #[test]
    fn open_resets_zoom_and_translation() {
        let panned = apply(
            opened(),
            [
                LightboxAction::ZoomIn,
                LightboxAction::ZoomIn,
                LightboxAction::DragStart { x: 10.0, y: 10.0 },
                LightboxAction::DragMove { x: 60.0, y: 30.0 },
            ],
        );
        assert_eq!(panned.zoom.offset_x, 50.0);
        assert_eq!(panned.zoom.offset_y, 20.0);

        let reopened = apply(panned, [LightboxAction::Open("b.png".into())]);
        assert_eq!(reopened.zoom, ZoomState::default());
        assert!(!reopened.drag.active);
        assert_eq!(reopened.src.as_deref(), Some("b.png"));
    }

    #[test]
    fn drag_is_ignored_at_or_below_natural_size() {
        let s = apply(
            opened(),
            [
                LightboxAction::DragStart { x: 0.0, y: 0.0 },
                LightboxAction::DragMove { x: 40.0, y: 40.0 },
            ],
        );
        assert!(!s.drag.active);
        assert_eq!((s.zoom.offset_x, s.zoom.offset_y), (0.0, 0.0));
    }

    #[test]
    fn drag_continues_from_previous_offset() {
        let s = apply(
            opened(),
            [
                LightboxAction::ZoomIn,
                LightboxAction::DragStart { x: 0.0, y: 0.0 },
                LightboxAction::DragMove { x: 10.0, y: 5.0 },
                LightboxAction::DragEnd,
                LightboxAction::DragMove { x: 99.0, y: 99.0 },
                LightboxAction::DragStart { x: 100.0, y: 100.0 },
                LightboxAction::DragMove { x: 110.0, y: 100.0 },
            ],
        );
        assert_eq!((s.zoom.offset_x, s.zoom.offset_y), (20.0, 5.0));
    }

    #[test]
    fn wheel_direction_and_bounds() {
        let up: Vec<_> = (0..20).map(|_| LightboxAction::Wheel { delta_y: -100.0 }).collect();
        let s = apply(opened(), up);
        assert_eq!(s.zoom.zoom, 3.0);
        let down: Vec<_> = (0..20).map(|_| LightboxAction::Wheel { delta_y: 100.0 }).collect();
        let s = apply(s, down);
        assert_eq!(s.zoom.zoom, 0.5);

        let closed = apply(LightboxState::default(), [LightboxAction::Wheel { delta_y: -1.0 }]);
        assert_eq!(closed.zoom.zoom, 1.0);
    }

    #[test]
    fn close_keeps_source_until_cleared() {
        let s = apply(opened(), [LightboxAction::Close]);
        assert!(!s.open);
        assert_eq!(s.src.as_deref(), Some("a.png"));
        let generation = s.generation;
        let s = apply(s, [LightboxAction::ClearSource { generation }]);
        assert_eq!(s.src, None);
    }

    #[test]
    fn stale_clear_does_not_blank_reopened_image() {
        let closed = apply(opened(), [LightboxAction::Close]);
        let stale = closed.generation;
        let s = apply(
            closed,
            [
                LightboxAction::Open("b.png".into()),
                LightboxAction::ClearSource { generation: stale },
            ],
        );
        assert!(s.open);
        assert_eq!(s.src.as_deref(), Some("b.png"));

        let s = apply(
            s,
            [
                LightboxAction::Close,
                LightboxAction::ClearSource { generation: stale },
            ],
        );
        assert_eq!(s.src.as_deref(), Some("b.png"));
    }

    #[test]
    fn reset_zoom_recenters() {
        let s = apply(
            opened(),
            [
                LightboxAction::ZoomIn,
                LightboxAction::DragStart { x: 0.0, y: 0.0 },
                LightboxAction::DragMove { x: 30.0, y: 30.0 },
                LightboxAction::ResetZoom,
            ],
        );
        assert_eq!(s.zoom, ZoomState::default());
    }
}
