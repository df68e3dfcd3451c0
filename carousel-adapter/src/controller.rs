use carousel::{Carousel, CarouselOptions, Container, ItemDesc, ScrollInput};

use crate::{Easing, Tween};

/// Frame time assumed when there is no previous timestamp to measure from.
pub const DEFAULT_DELTA_TIME: f32 = 1.0 / 60.0;

/// Longest frame the controller will feed to the physics, in seconds.
///
/// Keeps a stalled host (breakpoint, background tab) from throwing the value across the arc on
/// the next frame.
pub const MAX_DELTA_TIME: f32 = 0.1;

/// A framework-neutral controller that wraps a [`Carousel`] and a millisecond clock.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - the input methods (`on_scroll`, `on_drag*`) with event timestamps
/// - `tick(now_ms)` once per frame
/// - `layout_if_dirty(items)` when `tick` reports pending layout
#[derive(Clone, Debug)]
pub struct Controller {
    carousel: Carousel,
    tween: Option<Tween>,
    last_tick_ms: Option<u64>,
    last_drag_ms: Option<u64>,
}

impl Controller {
    pub fn new(options: CarouselOptions, container: Container) -> carousel::Result<Self> {
        Ok(Self::from_carousel(Carousel::new(options, container)?))
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            tween: None,
            last_tick_ms: None,
            last_drag_ms: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Advances the controller by one frame.
    ///
    /// - If a tween is active, writes its sample into the scroll value (physics is skipped).
    /// - Otherwise runs one physics step with the time elapsed since the previous tick.
    ///
    /// Returns whether a layout pass is pending.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let delta_time = delta_seconds(self.last_tick_ms, now_ms);
        self.last_tick_ms = Some(now_ms);

        let Some(tween) = self.tween else {
            return self.carousel.tick(delta_time);
        };

        self.carousel.set_value(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        self.carousel.is_dirty()
    }

    /// Runs a layout pass if one is pending. Returns whether it ran.
    pub fn layout_if_dirty<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = ItemDesc>,
    {
        self.carousel.layout_if_dirty(items)
    }

    /// A wheel event. Cancels any active tween.
    pub fn on_scroll(&mut self, delta_y: f32) {
        self.cancel_animation();
        self.carousel.on_scroll(delta_y);
    }

    /// A pointer went down. Cancels any active tween and stops motion.
    pub fn on_potential_drag_begin(&mut self, now_ms: u64) {
        self.cancel_animation();
        self.last_drag_ms = Some(now_ms);
        self.carousel.on_potential_drag_begin();
    }

    pub fn on_drag_begin(&mut self, delta_y: f32, now_ms: u64) {
        self.cancel_animation();
        let delta_time = self.drag_delta_time(now_ms);
        self.carousel.on_drag_begin(delta_y, delta_time);
    }

    pub fn on_drag(&mut self, delta_y: f32, now_ms: u64) {
        let delta_time = self.drag_delta_time(now_ms);
        self.carousel.on_drag(delta_y, delta_time);
    }

    pub fn on_drag_end(&mut self, delta_y: f32, now_ms: u64) {
        let delta_time = self.drag_delta_time(now_ms);
        self.carousel.on_drag_end(delta_y, delta_time);
        self.last_drag_ms = None;
    }

    fn drag_delta_time(&mut self, now_ms: u64) -> f32 {
        let delta_time = delta_seconds(self.last_drag_ms, now_ms);
        self.last_drag_ms = Some(now_ms);
        delta_time
    }

    /// Centres an item immediately (no animation) and drops any leftover throw.
    ///
    /// Returns the applied scroll value.
    pub fn scroll_to_item(&mut self, index: usize) -> carousel::Result<f32> {
        self.cancel_animation();
        let target = self.item_theta(index)?;
        self.carousel.focus_item(index)?;
        self.carousel.stop_motion();
        self.carousel.set_value(target);
        Ok(target)
    }

    /// Starts a tween that centres an item.
    ///
    /// Any leftover throw is dropped, and the item becomes the snap target, so once the tween
    /// ends the snap spring holds it in place. Returns the target scroll value.
    pub fn start_tween_to_item(
        &mut self,
        index: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> carousel::Result<f32> {
        let target = self.item_theta(index)?;
        self.carousel.focus_item(index)?;
        self.carousel.stop_motion();
        let from = self.carousel.value();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "carousel_adapter",
            index,
            from,
            to = target,
            duration_ms,
            "start_tween_to_item"
        );
        self.tween = Some(Tween::new(from, target, now_ms, duration_ms, easing));
        Ok(target)
    }

    fn item_theta(&self, index: usize) -> carousel::Result<f32> {
        self.carousel
            .item(index)
            .map(|it| it.theta)
            .ok_or(carousel::CarouselError::ItemOutOfRange {
                index,
                count: self.carousel.item_count(),
            })
    }
}

fn delta_seconds(last_ms: Option<u64>, now_ms: u64) -> f32 {
    match last_ms {
        Some(last) => (now_ms.saturating_sub(last) as f32 / 1000.0).min(MAX_DELTA_TIME),
        None => DEFAULT_DELTA_TIME,
    }
}
