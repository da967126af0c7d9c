// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};
use loupe_animation::{AnimationScheduler, AnimationTarget, Easing, Progress};
use loupe_gesture::{
    Gesture, GestureRecognizer, PointerAction, PointerEvent, TapDetector, TapGesture,
};
use loupe_transform::{
    DisplayUpdate, EdgeStates, FitPolicy, ScaleLevels, TransformComposer, TransformError,
};
use smallvec::SmallVec;

use crate::ControllerConfig;
use crate::observers::{Observers, SingleFling};

/// Zoom at or below which a single-pointer fling is reported to the
/// single-fling observer. This is the stock minimum, not the configured one.
const SINGLE_FLING_MAX_SCALE: f64 = 1.0;

/// Routes pointer input for one piece of content into pan, zoom, rotate and
/// fling, and reports the result to the host.
///
/// The host feeds raw events to [`on_pointer_event`](Self::on_pointer_event)
/// and calls [`on_frame`](Self::on_frame) once per display frame while it
/// returns [`Progress::Continue`]. Everything runs on the caller's thread.
///
/// ```
/// use kurbo::{Insets, Size};
/// use loupe::{PhotoController, Progress};
/// use loupe_gesture::PointerEvent;
///
/// let mut photo = PhotoController::default();
/// photo.bind_viewport(Size::new(400.0, 300.0), Insets::ZERO);
/// photo.bind_content(Size::new(800.0, 600.0));
///
/// // Double tap in the middle.
/// for (t, event) in [
///     (0, PointerEvent::down(0, 1, (200.0, 150.0))),
///     (50, PointerEvent::up(50, 1, (200.0, 150.0))),
///     (150, PointerEvent::down(150, 1, (200.0, 150.0))),
///     (200, PointerEvent::up(200, 1, (200.0, 150.0))),
/// ] {
///     assert!(photo.on_pointer_event(&event), "event at {t} ms");
/// }
///
/// let mut now = 200;
/// while photo.on_frame(now) == Progress::Continue {
///     now += 16;
/// }
/// assert!((photo.scale() - 1.75).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct PhotoController {
    config: ControllerConfig,
    composer: TransformComposer,
    recognizer: GestureRecognizer,
    taps: TapDetector,
    scheduler: AnimationScheduler,
    observers: Observers,
    padding: Insets,
    block_parent_intercept: bool,
    parent_may_intercept: bool,
}

impl Default for PhotoController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl PhotoController {
    /// Creates a controller with no content and an empty viewport.
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        let mut composer = TransformComposer::new();
        composer.set_fit_policy(config.fit_policy);
        Self {
            config,
            composer,
            recognizer: GestureRecognizer::new(config.gesture),
            taps: TapDetector::new(config.gesture),
            scheduler: AnimationScheduler::new(config.scroller),
            observers: Observers::default(),
            padding: Insets::ZERO,
            block_parent_intercept: false,
            parent_may_intercept: true,
        }
    }

    /// Current settings.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Notification handlers.
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    // Binding

    /// Binds content of the given intrinsic size and fits it.
    ///
    /// Running animations are dropped. A size with an empty or non-finite
    /// dimension unbinds the content.
    pub fn bind_content(&mut self, size: Size) {
        self.stop_animations();
        let update = self.composer.bind_content(size);
        self.publish(update);
    }

    /// Removes the bound content. Pointer input is ignored until new content
    /// is bound.
    pub fn unbind_content(&mut self) {
        self.stop_animations();
        self.composer.unbind_content();
    }

    /// Sets the size of the view and its padding, and refits.
    ///
    /// Content is laid out inside the padded area. Pointer positions are
    /// expected in the same coordinates as the display rect.
    pub fn bind_viewport(&mut self, size: Size, padding: Insets) {
        self.padding = padding;
        let update = self.composer.set_viewport(padded(size, padding));
        self.publish(update);
    }

    /// Refits after the view bounds moved or resized.
    pub fn on_layout_changed(&mut self, old: Rect, new: Rect) {
        if old == new {
            return;
        }
        log::debug!("layout changed from {old:?} to {new:?}");
        self.composer.set_viewport(padded(new.size(), self.padding));
        let update = self.composer.update_base_transform();
        self.publish(update);
    }

    /// Sets how content is fitted at rest.
    pub fn set_fit_policy(&mut self, policy: FitPolicy) {
        self.config.fit_policy = policy;
        let update = self.composer.set_fit_policy(policy);
        self.publish(update);
    }

    /// Sets the rotation content rests at, in degrees, and refits.
    pub fn set_base_rotation(&mut self, degrees: f64) {
        let update = self.composer.set_base_rotation(degrees);
        self.publish(update);
    }

    // Input

    /// Handles one raw pointer event.
    ///
    /// Returns `false` when the event was ignored because zoom is disabled or
    /// there is nothing to interact with.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.config.zoom_enabled || !self.composer.is_ready() {
            return false;
        }

        let mut handled = false;
        match event.action {
            PointerAction::Down => {
                self.set_parent_may_intercept(false);
                self.scheduler.cancel_fling();
            }
            PointerAction::Up | PointerAction::Cancel => {
                handled = self.start_release_correction();
            }
            _ => {}
        }

        let was_scaling = self.recognizer.is_scaling();
        let was_dragging = self.recognizer.is_dragging();
        let mut gestures = SmallVec::<[Gesture; 4]>::new();
        handled |= self.recognizer.process_event(event, &mut gestures);
        for gesture in gestures {
            self.on_gesture(gesture);
        }
        let didnt_scale = !was_scaling && !self.recognizer.is_scaling();
        let didnt_drag = !was_dragging && !self.recognizer.is_dragging();
        self.block_parent_intercept = didnt_scale && didnt_drag;

        let mut taps = SmallVec::<[TapGesture; 2]>::new();
        if self.taps.process_event(event, &mut taps) {
            handled = true;
        }
        for tap in taps {
            self.on_tap(tap);
        }
        handled
    }

    /// Steps animations and tap timers for time `now_ms`.
    ///
    /// Returns [`Progress::Continue`] while anything still needs frames.
    pub fn on_frame(&mut self, now_ms: u64) -> Progress {
        let mut taps = SmallVec::<[TapGesture; 2]>::new();
        self.taps.poll(now_ms, &mut taps);
        for tap in taps {
            self.on_tap(tap);
        }

        let mut target = Mutator {
            composer: &mut self.composer,
            observers: &mut self.observers,
            max_scale: self.config.scale_levels.max(),
        };
        let animations = self.scheduler.advance(now_ms, &mut target);
        if animations == Progress::Continue || self.taps.has_pending_deadline() {
            Progress::Continue
        } else {
            Progress::Done
        }
    }

    // Queries

    /// Zoom of the user transform.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.composer.scale()
    }

    /// Content bounds in viewport coordinates, if content is bound.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        self.composer.display_rect()
    }

    /// Transform to draw content with.
    #[must_use]
    pub fn draw_transform(&self) -> Affine {
        self.composer.draw_transform()
    }

    /// User interaction on top of the fit transform.
    #[must_use]
    pub fn supplementary_transform(&self) -> Affine {
        self.composer.supplementary()
    }

    /// Edge states from the last clamp pass.
    #[must_use]
    pub fn edges(&self) -> EdgeStates {
        self.composer.edges()
    }

    /// The current fit policy.
    #[must_use]
    pub fn fit_policy(&self) -> FitPolicy {
        self.composer.fit_policy()
    }

    /// The configured zoom levels.
    #[must_use]
    pub fn scale_levels(&self) -> ScaleLevels {
        self.config.scale_levels
    }

    /// Whether pointer input is handled.
    #[must_use]
    pub fn is_zoom_enabled(&self) -> bool {
        self.config.zoom_enabled
    }

    /// Whether the enclosing container may currently take over the gesture.
    #[must_use]
    pub fn parent_may_intercept(&self) -> bool {
        self.parent_may_intercept
    }

    /// Returns `true` while a zoom or fling animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    // Mutations

    /// Zooms to `scale` about the viewport centre.
    pub fn set_scale(&mut self, scale: f64, animate: bool) -> Result<(), TransformError> {
        let size = self.composer.viewport_size();
        self.set_scale_about(scale, Point::new(size.width / 2.0, size.height / 2.0), animate)
    }

    /// Zooms to `scale` about `focus`.
    ///
    /// Fails with [`TransformError::ScaleOutOfRange`] unless `scale` lies
    /// within the configured levels. Without `animate`, any pan and rotation
    /// are replaced.
    pub fn set_scale_about(
        &mut self,
        scale: f64,
        focus: Point,
        animate: bool,
    ) -> Result<(), TransformError> {
        self.config.scale_levels.check(scale)?;
        if animate {
            self.start_zoom(scale, focus);
        } else {
            let update = self.composer.set_scale_about(scale, focus);
            self.publish(update);
        }
        Ok(())
    }

    /// Sets all three zoom levels at once.
    pub fn set_scale_levels(&mut self, min: f64, mid: f64, max: f64) -> Result<(), TransformError> {
        self.config.scale_levels.set(min, mid, max)
    }

    /// Sets the minimum zoom.
    pub fn set_minimum_scale(&mut self, min: f64) -> Result<(), TransformError> {
        self.config.scale_levels.set_min(min)
    }

    /// Sets the medium zoom.
    pub fn set_medium_scale(&mut self, mid: f64) -> Result<(), TransformError> {
        self.config.scale_levels.set_mid(mid)
    }

    /// Sets the maximum zoom.
    pub fn set_maximum_scale(&mut self, max: f64) -> Result<(), TransformError> {
        self.config.scale_levels.set_max(max)
    }

    /// Replaces the user transform by a rotation of `degrees`.
    pub fn set_rotation_to(&mut self, degrees: f64) {
        let update = self.composer.apply_rotate(degrees, true);
        self.publish(update);
    }

    /// Rotates the user transform by `degrees`.
    pub fn set_rotation_by(&mut self, degrees: f64) {
        let update = self.composer.apply_rotate(degrees, false);
        self.publish(update);
    }

    /// Switches input handling on or off.
    ///
    /// Switching it off returns the content to rest.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
        self.update();
    }

    /// Refits content, or returns it to rest when zoom is disabled.
    pub fn update(&mut self) {
        self.stop_animations();
        let update = if self.config.zoom_enabled {
            self.composer.update_base_transform()
        } else {
            self.composer.reset()
        };
        self.publish(update);
    }

    /// Replaces the user transform.
    ///
    /// Fails without bound content or for a non-finite transform, leaving
    /// state untouched.
    pub fn set_display_transform(&mut self, transform: Affine) -> Result<(), TransformError> {
        let update = self.composer.set_supplementary(transform)?;
        self.publish(Some(update));
        Ok(())
    }

    /// Sets the duration of animated zooms.
    pub fn set_zoom_duration_ms(&mut self, duration_ms: u64) {
        self.config.zoom_duration_ms = duration_ms;
    }

    /// Sets the curve of animated zooms.
    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
    }

    /// Lets the container take over drags that push against a resting edge.
    pub fn set_allow_parent_intercept_on_edge(&mut self, allow: bool) {
        self.config.allow_parent_intercept_on_edge = allow;
    }

    // Routing

    fn on_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Drag(delta) => self.on_drag(delta),
            Gesture::Scale { factor, focus } => self.mutator().apply_scale(factor, focus),
            Gesture::Fling { velocity, .. } => {
                let viewport = self.composer.viewport_size();
                self.scheduler.start_fling(&self.composer, viewport, velocity);
            }
        }
    }

    fn on_drag(&mut self, delta: Vec2) {
        if self.recognizer.is_scaling() {
            return;
        }
        self.observers.view_drag(delta);
        self.mutator().apply_translate(delta);

        if self.config.allow_parent_intercept_on_edge
            && !self.recognizer.is_scaling()
            && !self.block_parent_intercept
        {
            if self.composer.edges().releases_drag(delta) {
                self.set_parent_may_intercept(true);
            }
        } else {
            self.set_parent_may_intercept(false);
        }
    }

    fn on_tap(&mut self, tap: TapGesture) {
        match tap {
            TapGesture::SingleTapConfirmed(at) => {
                self.observers.single_click();
                self.observers.view_tap(at);
                if let Some(rect) = self.composer.display_rect() {
                    if rect.contains(at) {
                        let normalized = Point::new(
                            (at.x - rect.x0) / rect.width(),
                            (at.y - rect.y0) / rect.height(),
                        );
                        log::debug!("tap on content at {normalized:?}");
                        self.observers.photo_tap(normalized);
                    } else {
                        log::debug!("tap outside content at {at:?}");
                        self.observers.outside_photo_tap();
                    }
                }
            }
            TapGesture::DoubleTap(at) => {
                let target = self.config.scale_levels.double_tap_target(self.scale());
                log::debug!("double tap at {at:?}, zooming to {target}");
                self.start_zoom(target, at);
            }
            TapGesture::LongPress(at) => self.observers.long_press(at),
            TapGesture::Fling {
                start,
                end,
                velocity,
                multi_pointer,
            } => {
                if self.observers.has_single_fling()
                    && self.scale() <= SINGLE_FLING_MAX_SCALE
                    && !multi_pointer
                {
                    self.observers.single_fling(SingleFling {
                        start,
                        end,
                        velocity,
                    });
                }
            }
        }
    }

    /// Tweens back into `[min, max]` about the display rect centre.
    /// Starts a zoom back into the level range; returns whether one started.
    fn start_release_correction(&mut self) -> bool {
        let Some(target) = self.config.scale_levels.rest_target(self.scale()) else {
            return false;
        };
        let Some(rect) = self.composer.display_rect() else {
            return false;
        };
        self.start_zoom(target, rect.center());
        true
    }

    fn start_zoom(&mut self, to: f64, focus: Point) {
        self.scheduler.start_zoom(
            &self.composer,
            to,
            focus,
            self.config.zoom_duration_ms,
            self.config.easing,
        );
    }

    fn stop_animations(&mut self) {
        self.scheduler.cancel_fling();
        self.scheduler.cancel_zoom();
    }

    fn set_parent_may_intercept(&mut self, allowed: bool) {
        self.parent_may_intercept = allowed;
        self.observers.parent_intercept(allowed);
    }

    fn mutator(&mut self) -> Mutator<'_> {
        Mutator {
            composer: &mut self.composer,
            observers: &mut self.observers,
            max_scale: self.config.scale_levels.max(),
        }
    }

    fn publish(&mut self, update: Option<DisplayUpdate>) {
        publish(&mut self.observers, update);
    }
}

/// The mutation path shared by gestures and animations.
///
/// Zooming in is refused once the scale has reached the maximum, while
/// zooming out always passes.
struct Mutator<'a> {
    composer: &'a mut TransformComposer,
    observers: &'a mut Observers,
    max_scale: f64,
}

impl AnimationTarget for Mutator<'_> {
    fn current_scale(&self) -> f64 {
        self.composer.scale()
    }

    fn display_rect(&self) -> Option<Rect> {
        self.composer.display_rect()
    }

    fn apply_scale(&mut self, factor: f64, focus: Point) {
        if self.composer.scale() < self.max_scale || factor < 1.0 {
            self.observers.scale_changed(factor, focus);
            let update = self.composer.apply_scale(factor, focus);
            publish(self.observers, update);
        }
    }

    fn apply_translate(&mut self, delta: Vec2) {
        let update = self.composer.apply_translate(delta);
        publish(self.observers, update);
    }
}

fn publish(observers: &mut Observers, update: Option<DisplayUpdate>) {
    if let Some(update) = update {
        observers.render(update.draw_transform);
        if update.changed {
            observers.matrix_changed(update.display_rect);
        }
    }
}

fn padded(size: Size, padding: Insets) -> Size {
    Size::new(
        (size.width - padding.x_value()).max(0.0),
        (size.height - padding.y_value()).max(0.0),
    )
}
