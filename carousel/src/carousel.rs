use std::cell::Cell;
use std::f32::consts::TAU;
use std::sync::Arc;

use crate::angle::{angular_half_width, item_angular_width, opacity};
use crate::arrange::{ArcStepper, PoseCompositor};
use crate::catalog::ItemCatalog;
use crate::error::{CarouselError, Result};
use crate::options::CarouselOptions;
use crate::physics;
use crate::state::{CarouselSnapshot, CarouselState, Phase};
use crate::types::{Container, ItemDesc, ItemLayout, PreviewSlot};

/// Upper bound on slots emitted by a single preview walk.
const MAX_PREVIEW_SLOTS: usize = 4096;

/// A headless cylindrical carousel.
///
/// The carousel holds no UI objects. A host drives it by:
/// - forwarding pointer/wheel events through [`crate::ScrollInput`]
/// - calling [`Carousel::tick`] once per frame with the frame's `delta_time`
/// - running [`Carousel::layout`] (or [`Carousel::layout_if_dirty`]) with its current items and
///   applying the resulting poses and opacities
///
/// Input and physics never write the scroll value in the same frame: physics is suspended while
/// a drag is in progress.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    container: Container,
    radius: f32,
    state: CarouselState,

    catalog: ItemCatalog,
    items: Vec<ItemLayout>,

    dirty: bool,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel. Fails when the options or the container height are invalid.
    pub fn new(options: CarouselOptions, container: Container) -> Result<Self> {
        options.validate()?;
        let radius = options.radius_for(container.height)?;
        cdebug!(
            radius,
            enabled = options.enabled,
            movement = ?options.scroll.movement_type,
            "Carousel::new"
        );
        Ok(Self {
            options,
            container,
            radius,
            state: CarouselState::default(),
            catalog: ItemCatalog::new(),
            items: Vec::new(),
            dirty: true,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options. On error the previous options stay in effect.
    pub fn set_options(&mut self, options: CarouselOptions) -> Result<()> {
        let radius = options
            .validate()
            .and_then(|()| options.radius_for(self.container.height))
            .inspect_err(|_err| {
                cwarn!(err = %_err, "Carousel::set_options rejected");
            })?;
        let was_enabled = self.options.enabled;
        self.options = options;
        self.radius = radius;
        ctrace!(radius, enabled = self.options.enabled, "Carousel::set_options");

        if !self.options.enabled && was_enabled {
            self.halt();
        }
        self.mark_dirty();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_invalidate(
        &mut self,
        on_invalidate: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) {
        self.options.on_invalidate = on_invalidate.map(|f| Arc::new(f) as _);
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.halt();
        }
        self.mark_dirty();
    }

    /// Drops any drag and all motion.
    fn halt(&mut self) {
        self.state.phase = Phase::Idle;
        self.state.did_scroll = false;
        self.stop_motion();
    }

    /// Zeroes the throw velocity and the snap spring's velocity.
    ///
    /// The phase is left alone, so an in-progress drag keeps going. Hosts that drive `value`
    /// themselves (tweens, jumps) call this first so the next [`Carousel::tick`] does not resume
    /// an earlier throw.
    pub fn stop_motion(&mut self) {
        self.state.velocity = 0.0;
        self.state.snap_velocity = 0.0;
    }

    pub fn container(&self) -> Container {
        self.container
    }

    /// Replaces the container. Fails (keeping the old one) when the derived radius is invalid.
    pub fn set_container(&mut self, container: Container) -> Result<()> {
        let radius = self.options.radius_for(container.height)?;
        if self.container == container {
            return Ok(());
        }
        self.container = container;
        self.radius = radius;
        self.mark_dirty();
        Ok(())
    }

    pub fn set_container_height(&mut self, height: f32) -> Result<()> {
        self.set_container(Container {
            height,
            ..self.container
        })
    }

    pub fn set_container_transform(&mut self, transform: glam::Affine3A) {
        if self.container.transform == transform {
            return;
        }
        self.container.transform = transform;
        self.mark_dirty();
    }

    /// `container.height * radius_scale / 2`.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut CarouselState {
        &mut self.state
    }

    pub fn value(&self) -> f32 {
        self.state.value
    }

    /// Moves the scroll value programmatically (no animation, velocity untouched).
    pub fn set_value(&mut self, value: f32) {
        if self.state.value == value {
            return;
        }
        self.state.value = value;
        self.mark_dirty();
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Upper scroll bound as of the last layout pass.
    pub fn total_arc(&self) -> f32 {
        self.state.total_arc
    }

    /// Signed distance that brings the current value back into bounds.
    pub fn bounds_offset(&self) -> f32 {
        physics::bounds_offset(
            self.state.value,
            0.0,
            self.state.total_arc,
            self.options.scroll.movement_type,
        )
    }

    pub fn nearest_index(&self) -> Option<usize> {
        self.state.nearest.index()
    }

    pub fn nearest_item(&self) -> Option<&ItemLayout> {
        self.nearest_index().and_then(|i| self.items.get(i))
    }

    /// Layouts produced by the last pass, in arrangement order.
    pub fn items(&self) -> &[ItemLayout] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&ItemLayout> {
        self.items.get(index)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn for_each_item(&self, mut f: impl FnMut(&ItemLayout)) {
        for item in &self.items {
            f(item);
        }
    }

    /// Makes `index` the snap target without touching the value.
    ///
    /// The next layout pass re-derives the nearest item from scratch.
    pub fn focus_item(&mut self, index: usize) -> Result<()> {
        let Some(item) = self.items.get(index) else {
            return Err(CarouselError::ItemOutOfRange {
                index,
                count: self.items.len(),
            });
        };
        ctrace!(index, theta = item.theta, "focus_item");
        self.state.nearest.focus(index, item.theta);
        Ok(())
    }

    pub fn focus_first_item(&mut self) -> Result<()> {
        self.focus_item(0)
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            value: self.state.value,
            velocity: self.state.velocity,
        }
    }

    /// Restores a snapshot. Any drag in progress is dropped.
    pub fn restore(&mut self, snapshot: CarouselSnapshot) {
        self.state.value = snapshot.value;
        self.state.velocity = snapshot.velocity;
        self.state.snap_velocity = 0.0;
        self.state.phase = Phase::Idle;
        self.mark_dirty();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Asks for a new layout pass (options or item set changed on the host side).
    pub fn request_layout(&mut self) {
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        if !self.options.enabled {
            return;
        }
        self.dirty = true;
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_invalidate {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_invalidate` notification.
    ///
    /// A frame typically forwards several input events and then ticks; wrapping them here fires
    /// the host's rebuild hook at most once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Advances physics by one frame. Returns whether a layout pass is pending.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.options.enabled {
            return false;
        }
        let outcome = physics::step(&mut self.state, &self.options.scroll, delta_time);
        if outcome.changed() {
            self.mark_dirty();
        }
        self.dirty
    }

    /// Runs a layout pass over the host's items.
    ///
    /// Rebuilds the item catalog, assigns each participating item its angular position, pose
    /// and opacity, recomputes `total_arc`, and re-derives the nearest item.
    pub fn layout<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = ItemDesc>,
    {
        let radius = self.radius;
        let presentation = self.options.presentation;
        let value = self.state.value;

        self.catalog.rebuild(source, presentation.reverse_arrangement);

        let compositor = PoseCompositor::new(
            radius,
            presentation.invert,
            presentation.control_child_rotation,
            self.container.transform,
        );
        let mut stepper = ArcStepper::new(value, angular_half_width(presentation.spacing, radius));

        self.items.clear();
        self.state.nearest.reset();
        let mut total_arc = 0.0;

        for entry in self.catalog.entries() {
            let angular_width = item_angular_width(entry.extent, radius);
            let relative_theta = stepper.place(angular_width);
            let theta = stepper.absolute(relative_theta);
            total_arc = theta;

            self.state.nearest.consider(entry.index, theta, value);
            self.items.push(ItemLayout {
                index: entry.index,
                source_index: entry.source_index,
                extent: entry.extent,
                angular_width,
                theta,
                relative_theta,
                pose: compositor.compose(relative_theta),
                opacity: presentation
                    .alpha
                    .then(|| opacity(relative_theta, presentation.blend_area)),
            });
        }

        self.state.total_arc = total_arc;
        self.dirty = false;
        ctrace!(
            items = self.items.len(),
            total_arc,
            nearest = ?self.state.nearest.index(),
            value,
            "layout"
        );
    }

    /// Runs a layout pass only if one is pending. Returns whether it ran.
    pub fn layout_if_dirty<I>(&mut self, source: I) -> bool
    where
        I: IntoIterator<Item = ItemDesc>,
    {
        if !self.dirty {
            return false;
        }
        self.layout(source);
        true
    }

    /// Walks a full turn of the cylinder using the current layout, padding the real items with
    /// placeholder slots of `placeholder_extent` until the arc passes `2π`.
    ///
    /// Useful for previews of how many items fit. Does not touch the carousel state.
    pub fn for_each_preview_slot(&self, placeholder_extent: f32, mut f: impl FnMut(PreviewSlot)) {
        let radius = self.radius;
        let presentation = self.options.presentation;
        let value = self.state.value;
        let spacing = angular_half_width(presentation.spacing, radius);
        let compositor = PoseCompositor::new(
            radius,
            presentation.invert,
            presentation.control_child_rotation,
            self.container.transform,
        );
        let placeholder_width = item_angular_width(placeholder_extent, radius);
        let placeholders_advance = placeholder_width + spacing > 0.0;
        let limit = -value + TAU;

        let mut stepper = ArcStepper::new(value, spacing);
        for index in 0..MAX_PREVIEW_SLOTS {
            let real = self.catalog.get(index);
            if real.is_none() && (!placeholders_advance || stepper.cursor() >= limit) {
                break;
            }
            let width = real.map_or(placeholder_width, |e| item_angular_width(e.extent, radius));
            let relative_theta = stepper.place(width);
            f(PreviewSlot {
                index,
                relative_theta,
                pose: compositor.compose(relative_theta),
                opacity: opacity(relative_theta, presentation.blend_area),
                placeholder: real.is_none(),
            });
        }
    }
}
