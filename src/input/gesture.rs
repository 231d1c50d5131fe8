use glam::Vec2;

use super::event::PointerButton;

/// Pointer gesture state machine.
///
/// Exactly one gesture is active at a time. A press only starts a gesture
/// from [`Idle`](Self::Idle); any release (or focus loss) ends it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No button held.
    #[default]
    Idle,
    /// Primary-button drag orbiting the target.
    Rotating {
        /// Pointer position at the previous move (or the press).
        anchor: Vec2,
    },
    /// Secondary-button drag moving the target.
    Panning {
        /// Pointer position at the previous move (or the press).
        anchor: Vec2,
    },
}

/// Frame-to-frame pointer movement produced by an active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragDelta {
    /// Unscaled pixel delta of a rotate drag.
    Rotate(Vec2),
    /// Unscaled pixel delta of a pan drag.
    Pan(Vec2),
}

impl Gesture {
    /// Whether no gesture is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Button press at `pos`. Returns `true` if a gesture started.
    pub fn press(&mut self, button: PointerButton, pos: Vec2) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = match button {
            PointerButton::Primary => Self::Rotating { anchor: pos },
            PointerButton::Secondary => Self::Panning { anchor: pos },
            PointerButton::Middle => return false,
        };
        true
    }

    /// Any button release or focus loss. Returns `true` if a gesture ended.
    pub fn release(&mut self) -> bool {
        let was_active = !self.is_idle();
        *self = Self::Idle;
        was_active
    }

    /// Pointer moved to `pos`. Returns the delta since the last anchor and
    /// advances the anchor, so consecutive deltas never overlap.
    pub fn drag(&mut self, pos: Vec2) -> Option<DragDelta> {
        match self {
            Self::Idle => None,
            Self::Rotating { anchor } => {
                let delta = pos - *anchor;
                *anchor = pos;
                Some(DragDelta::Rotate(delta))
            }
            Self::Panning { anchor } => {
                let delta = pos - *anchor;
                *anchor = pos;
                Some(DragDelta::Pan(delta))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_rotates_secondary_pans() {
        let mut g = Gesture::default();
        assert!(g.press(PointerButton::Primary, Vec2::new(1.0, 2.0)));
        assert_eq!(g, Gesture::Rotating { anchor: Vec2::new(1.0, 2.0) });

        let mut g = Gesture::default();
        assert!(g.press(PointerButton::Secondary, Vec2::ZERO));
        assert!(matches!(g, Gesture::Panning { .. }));
    }

    #[test]
    fn second_press_does_not_switch_gesture() {
        let mut g = Gesture::default();
        let _ = g.press(PointerButton::Primary, Vec2::ZERO);
        assert!(!g.press(PointerButton::Secondary, Vec2::ONE));
        assert_eq!(g, Gesture::Rotating { anchor: Vec2::ZERO });
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut g = Gesture::default();
        assert!(!g.press(PointerButton::Middle, Vec2::ZERO));
        assert!(g.is_idle());
    }

    #[test]
    fn deltas_are_frame_to_frame() {
        let mut g = Gesture::default();
        let _ = g.press(PointerButton::Primary, Vec2::new(10.0, 10.0));
        assert_eq!(
            g.drag(Vec2::new(15.0, 10.0)),
            Some(DragDelta::Rotate(Vec2::new(5.0, 0.0)))
        );
        assert_eq!(
            g.drag(Vec2::new(18.0, 6.0)),
            Some(DragDelta::Rotate(Vec2::new(3.0, -4.0)))
        );
    }

    #[test]
    fn release_returns_to_idle() {
        let mut g = Gesture::default();
        assert!(!g.release());
        let _ = g.press(PointerButton::Secondary, Vec2::ZERO);
        assert!(g.release());
        assert!(g.is_idle());
        assert_eq!(g.drag(Vec2::ONE), None);
    }
}
