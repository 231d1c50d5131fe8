// -- Lint policy ---------------------------------------------------------
// Group levels and allowances live in Cargo.toml; these are the hard
// guarantees for library code.

// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Orbit camera controller built on glam.
//!
//! Converts pointer, wheel and key input into a camera pose that circles a
//! target point. The pose is kept in spherical coordinates around the
//! camera's up axis, with clamped radius and polar angle.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - input handling and pose recomputation
//! - [`camera::Camera`] - perspective camera with view/projection matrices
//! - [`input::Surface`] - where input events come from; [`input::EventQueue`]
//!   is the headless implementation
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame loop
//!
//! ```
//! use orbitview::camera::{Camera, OrbitController};
//! use orbitview::input::{EventQueue, InputEvent, Viewport};
//! use orbitview::options::OrbitOptions;
//!
//! let mut surface = EventQueue::new(Viewport::new(800, 600));
//! let mut orbit =
//!     OrbitController::new(Camera::default(), OrbitOptions::default())?;
//! orbit.attach(&mut surface)?;
//!
//! let _ = surface.push(InputEvent::Scroll { delta: 1.0 });
//! let _ = orbit.pump(&mut surface);
//! orbit.update();
//! let _view_proj = orbit.camera().build_matrix();
//!
//! orbit.dispose(&mut surface);
//! # Ok::<(), orbitview::OrbitError>(())
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{Camera, CameraRig, OrbitController};
pub use error::OrbitError;
pub use input::{InputEvent, PointerButton, Viewport};
