//! Input handling: platform-agnostic events, the pointer gesture state
//! machine, key actions, and the surface capability that delivers events.

/// Platform-agnostic input events.
pub mod event;
/// Pointer gesture state machine.
pub mod gesture;
/// Bindable key actions.
pub mod keyboard;
pub mod surface;
#[cfg(feature = "winit")]
pub mod window;

pub use event::{Channel, InputEvent, PointerButton};
pub use gesture::{DragDelta, Gesture};
pub use keyboard::KeyAction;
pub use surface::{EventQueue, SubscriptionId, Surface, Viewport};
#[cfg(feature = "winit")]
pub use window::WindowInput;
