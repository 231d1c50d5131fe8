//! Translation from winit window events to [`InputEvent`]s.

use glam::Vec2;
use winit::{
    event::{ElementState, MouseScrollDelta, WindowEvent},
    keyboard::PhysicalKey,
};

use super::event::InputEvent;

/// Pixel-delta wheels report far larger values than line-based ones.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Stateful winit adapter.
///
/// winit reports button changes without a position, so the last cursor
/// position is tracked here and attached to press/release events.
#[derive(Debug, Default)]
pub struct WindowInput {
    cursor: Vec2,
}

impl WindowInput {
    /// Create an adapter with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Translate one window event. Returns `None` for events the orbit
    /// controller has no use for.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMoved {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = (*button).into();
                let (x, y) = (self.cursor.x, self.cursor.y);
                Some(match state {
                    ElementState::Pressed => {
                        InputEvent::PointerPressed { button, x, y }
                    }
                    ElementState::Released => {
                        InputEvent::PointerReleased { button, x, y }
                    }
                })
            }
            // winit reports scrolling away from the user as positive;
            // the controller expects that as a negative delta.
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -*y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        -(pos.y as f32) * PIXEL_SCROLL_SCALE
                    }
                };
                Some(InputEvent::Scroll { delta })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(InputEvent::KeyPressed {
                    key: format!("{code:?}"),
                })
            }
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_loss_is_forwarded() {
        let mut input = WindowInput::new();
        assert_eq!(
            input.translate(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(input.translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn unrelated_events_are_dropped() {
        let mut input = WindowInput::new();
        assert_eq!(input.translate(&WindowEvent::CloseRequested), None);
        assert_eq!(input.cursor(), Vec2::ZERO);
    }
}
