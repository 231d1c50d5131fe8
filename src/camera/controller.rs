use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, CameraRig};
use super::spherical::Spherical;
use crate::error::OrbitError;
use crate::input::{
    Channel, DragDelta, Gesture, InputEvent, KeyAction, SubscriptionId,
    Surface, Viewport,
};
use crate::options::{KeyBindings, OrbitOptions};

/// Padding applied by [`OrbitController::frame_points`] so the framed points
/// don't touch the viewport edge.
const FRAME_PADDING: f32 = 1.5;

/// Input-derived changes not yet folded into the pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDelta {
    /// Azimuth change in radians.
    pub theta: f32,
    /// Polar-angle change in radians.
    pub phi: f32,
    /// Radius multiplier.
    pub scale: f32,
    /// World-space target displacement.
    pub pan: Vec3,
}

impl Default for PendingDelta {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            scale: 1.0,
            pan: Vec3::ZERO,
        }
    }
}

impl PendingDelta {
    /// Whether applying this delta would change nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Orbit camera controller: keeps a camera on a sphere around a target
/// point and steers it from pointer, wheel and key input.
///
/// Input only accumulates into a [`PendingDelta`]; [`update`](Self::update)
/// folds it into the pose, clamping radius and polar angle. Call `update`
/// once per frame. [`handle_event`](Self::handle_event) already calls it
/// after every accepted move or scroll.
pub struct OrbitController<C: CameraRig = Camera> {
    camera: C,
    target: Vec3,
    options: OrbitOptions,
    keybindings: KeyBindings,
    gesture: Gesture,
    pending: PendingDelta,
    spherical: Spherical,
    subscription: Option<SubscriptionId>,
}

impl<C: CameraRig> OrbitController<C> {
    /// Take ownership of `camera` and orbit it around the origin.
    ///
    /// The initial pose is clamped into the configured limits right away.
    pub fn new(camera: C, options: OrbitOptions) -> Result<Self, OrbitError> {
        options.validate()?;
        let mut controller = Self {
            camera,
            target: Vec3::ZERO,
            options,
            keybindings: KeyBindings::default(),
            gesture: Gesture::Idle,
            pending: PendingDelta::default(),
            spherical: Spherical::new(0.0, 0.0, 0.0),
            subscription: None,
        };
        controller.update();
        Ok(controller)
    }

    /// Replace the default key bindings.
    #[must_use]
    pub fn with_keybindings(mut self, keybindings: KeyBindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable camera access. Pose changes made here are picked up by the
    /// next [`update`](Self::update) as if they were user input.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &OrbitOptions {
        &self.options
    }

    /// Current key bindings.
    #[must_use]
    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Active gesture.
    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Deltas accumulated since the last [`update`](Self::update).
    #[must_use]
    pub fn pending(&self) -> &PendingDelta {
        &self.pending
    }

    /// Whether input is currently accepted.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Whether a surface subscription is held.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Swap in new options. Invalid options are rejected and the previous
    /// ones stay in force. Limits apply from the next
    /// [`update`](Self::update) on.
    pub fn set_options(
        &mut self,
        options: OrbitOptions,
    ) -> Result<(), OrbitError> {
        if let Err(e) = options.validate() {
            log::warn!("Rejected orbit options: {e}");
            return Err(e);
        }
        let enabled = options.enabled;
        self.options = options;
        if !enabled {
            let _ = self.gesture.release();
        }
        Ok(())
    }

    /// Enable or disable input. Disabling ends any active gesture but keeps
    /// the pose and pending deltas.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
        if !enabled && self.gesture.release() {
            log::debug!("orbit gesture cancelled: controller disabled");
        }
    }

    /// Clamped spherical offset produced by the last
    /// [`update`](Self::update), measured around the camera's up axis.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Rotation taking the camera's up axis onto +Y.
    fn realignment(&self) -> Quat {
        let up = self.camera.up().normalize_or(Vec3::Y);
        Quat::from_rotation_arc(up, Vec3::Y)
    }

    // ── Surface plumbing ─────────────────────────────────────────────────

    /// Subscribe to every input channel of `surface`.
    ///
    /// A controller holds one subscription at a time: while attached, this
    /// fails with [`OrbitError::AlreadyAttached`] and nothing changes.
    /// [`dispose`](Self::dispose) against the current surface first.
    pub fn attach<S: Surface>(
        &mut self,
        surface: &mut S,
    ) -> Result<(), OrbitError> {
        if self.subscription.is_some() {
            return Err(OrbitError::AlreadyAttached);
        }
        self.subscription = Some(surface.subscribe(&Channel::ALL));
        Ok(())
    }

    /// Handle every event queued on `surface` since the last pump, in
    /// arrival order. Returns how many were consumed.
    pub fn pump<S: Surface>(&mut self, surface: &mut S) -> usize {
        let Some(id) = self.subscription else {
            return 0;
        };
        let viewport = surface.size();
        surface
            .drain(id)
            .iter()
            .filter(|event| self.handle_event(event, viewport))
            .count()
    }

    /// Release the surface subscription. Safe to call repeatedly.
    ///
    /// `surface` must be the one passed to [`attach`](Self::attach); any
    /// other surface does not know the subscription, so it is kept.
    pub fn dispose<S: Surface>(&mut self, surface: &mut S) {
        let Some(id) = self.subscription else {
            return;
        };
        if !surface.unsubscribe(id) {
            log::warn!("dispose: {id:?} is not held by this surface");
            return;
        }
        self.subscription = None;
        let _ = self.gesture.release();
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// Process one input event. Returns `true` if it changed the gesture,
    /// the pending deltas, or the pose.
    ///
    /// Accepted moves and scrolls trigger an immediate
    /// [`update`](Self::update). Everything is dropped while disabled.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        viewport: Viewport,
    ) -> bool {
        if !self.options.enabled {
            return false;
        }
        match event {
            InputEvent::PointerPressed { button, x, y } => {
                let started = self.gesture.press(*button, Vec2::new(*x, *y));
                if started {
                    log::debug!("orbit gesture started: {:?}", self.gesture);
                }
                started
            }
            InputEvent::PointerMoved { x, y } => {
                let consumed = match self.gesture.drag(Vec2::new(*x, *y)) {
                    Some(DragDelta::Rotate(delta)) => {
                        self.rotate(delta, viewport)
                    }
                    Some(DragDelta::Pan(delta)) => self.pan(delta, viewport),
                    None => false,
                };
                if consumed {
                    self.update();
                }
                consumed
            }
            InputEvent::PointerReleased { .. } | InputEvent::FocusLost => {
                let ended = self.gesture.release();
                if ended {
                    log::debug!("orbit gesture ended");
                }
                ended
            }
            InputEvent::Scroll { delta } => {
                let consumed = if *delta < 0.0 {
                    self.zoom_in()
                } else if *delta > 0.0 {
                    self.zoom_out()
                } else {
                    false
                };
                if consumed {
                    self.update();
                }
                consumed
            }
            InputEvent::KeyPressed { key } => match self.keybindings.lookup(key)
            {
                Some(KeyAction::ResetCamera) => {
                    self.reset();
                    true
                }
                None => false,
            },
        }
    }

    /// Accumulate an orbit from an unscaled pixel drag. Both axes are
    /// normalized by the surface height.
    pub fn rotate(&mut self, delta: Vec2, viewport: Viewport) -> bool {
        if !self.options.enabled || viewport.height == 0 {
            return false;
        }
        let height = viewport.height as f32;
        let scaled = delta * self.options.rotate_speed;
        self.pending.theta -= TAU * scaled.x / height;
        self.pending.phi -= TAU * scaled.y / height;
        true
    }

    /// Accumulate a target displacement from an unscaled pixel drag.
    ///
    /// World distance per pixel grows with the camera's distance from the
    /// target and with the field of view, keeping on-screen pan speed
    /// roughly constant across zoom levels.
    pub fn pan(&mut self, delta: Vec2, viewport: Viewport) -> bool {
        if !self.options.enabled || viewport.height == 0 {
            return false;
        }
        let height = viewport.height as f32;
        let scaled = delta * self.options.pan_speed;
        let target_distance = (self.camera.position() - self.target).length()
            * (self.camera.fovy().to_radians() / 2.0).tan();
        let (right, up) = self.camera.world_basis();
        let step = 2.0 * target_distance / height;
        self.pending.pan +=
            right * (-scaled.x * step) + up * (scaled.y * step);
        true
    }

    /// One zoom-in step: grows the pending radius factor by
    /// `1 / 0.95^zoom_speed`.
    pub fn zoom_in(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.pending.scale /= self.options.zoom_scale();
        true
    }

    /// One zoom-out step: shrinks the pending radius factor by
    /// `0.95^zoom_speed`.
    pub fn zoom_out(&mut self) -> bool {
        if !self.options.enabled {
            return false;
        }
        self.pending.scale *= self.options.zoom_scale();
        true
    }

    // ── Pose ─────────────────────────────────────────────────────────────

    /// Fold the pending deltas into the pose and clear them.
    ///
    /// With nothing pending and the pose already inside the limits, the
    /// camera position is left bit-for-bit unchanged.
    pub fn update(&mut self) {
        let to_y = self.realignment();
        let from_y = to_y.inverse();

        let current =
            Spherical::from_vec3(to_y * (self.camera.position() - self.target));
        let mut next = current;
        next.theta += self.pending.theta;
        next.phi = (next.phi + self.pending.phi)
            .clamp(self.options.min_polar_angle, self.options.max_polar_angle);
        next.make_safe();
        next.radius = (next.radius * self.pending.scale)
            .clamp(self.options.min_distance, self.options.max_distance);

        let pan = self.pending.pan;
        self.target += pan;

        if next != current || pan != Vec3::ZERO {
            self.camera
                .set_position(self.target + from_y * next.to_vec3());
        }
        self.camera.look_at(self.target);

        self.spherical = next;
        self.pending = PendingDelta::default();
    }

    /// Snap the target to the origin and the camera to
    /// [`Camera::HOME`], discarding pending input.
    pub fn reset(&mut self) {
        self.pending = PendingDelta::default();
        self.target = Vec3::ZERO;
        self.camera.set_position(Camera::HOME);
        self.camera.look_at(self.target);
        self.update();
        log::debug!("orbit camera reset");
    }

    /// Center on the centroid of `points` and back off until their
    /// bounding sphere fits the vertical field of view. The viewing
    /// direction is kept. An empty slice is ignored.
    pub fn frame_points(&mut self, points: &[Vec3]) {
        if points.is_empty() {
            return;
        }
        let centroid =
            points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let radius = points
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0_f32, f32::max);

        let half_fov = (self.camera.fovy().to_radians() / 2.0).tan();
        let distance = (radius / half_fov * FRAME_PADDING)
            .clamp(self.options.min_distance, self.options.max_distance);
        let direction = (self.camera.position() - self.target)
            .normalize_or(Camera::HOME.normalize());

        self.pending = PendingDelta::default();
        self.target = centroid;
        self.camera.set_position(centroid + direction * distance);
        self.update();
    }
}

impl OrbitController<Camera> {
    /// Match the camera's aspect ratio to a resized surface. Zero-height
    /// sizes (minimized windows) are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(aspect) = viewport.aspect() {
            self.camera.aspect = aspect;
        }
    }
}
