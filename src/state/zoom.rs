// Viewer zoom & pan state
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ZoomState {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Panning is only allowed while magnified.
    pub fn can_pan(&self) -> bool {
        self.zoom > 1.0
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset_x, self.offset_y, self.zoom
        )
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", (self.zoom * 100.0).round() as i64)
    }
}

/// Pointer grab point relative to the current offset.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub grab_x: f64,
    pub grab_y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut z = ZoomState::default();
        for _ in 0..50 {
            z.zoom_in();
            assert!(z.zoom <= ZOOM_MAX);
        }
        assert_eq!(z.zoom, 3.0);
        for _ in 0..50 {
            z.zoom_out();
            assert!(z.zoom >= ZOOM_MIN);
        }
        assert_eq!(z.zoom, 0.5);
    }

    #[test]
    fn zoom_moves_in_quarter_steps() {
        let mut z = ZoomState::default();
        z.zoom_in();
        assert_eq!(z.zoom, 1.25);
        z.zoom_out();
        z.zoom_out();
        assert_eq!(z.zoom, 0.75);
        assert!(!z.can_pan());
    }

    #[test]
    fn transform_and_label() {
        let z = ZoomState {
            zoom: 1.5,
            offset_x: 12.0,
            offset_y: -4.5,
        };
        assert_eq!(z.css_transform(), "translate(12px, -4.5px) scale(1.5)");
        assert_eq!(z.percent_label(), "150%");
        assert_eq!(ZoomState::default().css_transform(), "translate(0px, 0px) scale(1)");
    }
}
