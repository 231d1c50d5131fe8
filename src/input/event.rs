use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are delivered by a [`Surface`](super::Surface) (or injected
/// directly) and fed to [`OrbitController::handle_event`].
///
/// [`OrbitController::handle_event`]: crate::OrbitController::handle_event
///
/// Serde uses an internally tagged, snake_case representation so replay
/// scripts stay readable:
///
/// ```json
/// { "type": "pointer_pressed", "button": "primary", "x": 10.0, "y": 20.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer button pressed at a position.
    PointerPressed {
        /// Which button went down.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer moved to an absolute position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button released at a position.
    PointerReleased {
        /// Which button went up.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Wheel scroll (negative = forward/up).
    Scroll {
        /// Signed scroll amount.
        delta: f32,
    },
    /// A key went down. `key` uses the `winit::keyboard::KeyCode` debug
    /// format: `"Space"`, `"KeyR"`, `"Escape"`.
    KeyPressed {
        /// Physical key string.
        key: String,
    },
    /// The surface lost input focus.
    FocusLost,
}

impl InputEvent {
    /// Subscription channel this event is delivered on.
    #[must_use]
    pub fn channel(&self) -> Channel {
        match self {
            Self::PointerPressed { .. }
            | Self::PointerMoved { .. }
            | Self::PointerReleased { .. } => Channel::Pointer,
            Self::Scroll { .. } => Channel::Wheel,
            Self::KeyPressed { .. } => Channel::Keyboard,
            Self::FocusLost => Channel::Focus,
        }
    }

    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Self::PointerPressed { x, y, .. }
            | Self::PointerMoved { x, y }
            | Self::PointerReleased { x, y, .. } => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

/// Platform-agnostic pointer button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (left) button: rotates.
    Primary,
    /// Secondary (right) button: pans.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// Event category a [`Surface`](super::Surface) subscription can listen to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Press, move, release.
    Pointer,
    /// Scroll wheel.
    Wheel,
    /// Key presses (global).
    Keyboard,
    /// Focus changes.
    Focus,
}

impl Channel {
    /// Every channel, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Pointer, Self::Wheel, Self::Keyboard, Self::Focus];
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Primary,
        }
    }
}
