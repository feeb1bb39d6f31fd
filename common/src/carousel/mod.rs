//! Banner carousel rotation engine.
//!
//! `Carousel` owns the rotation state over a fixed, ordered list of image
//! sources: the focused index, the auto-play configuration and the handle of
//! the recurring timer that drives automatic rotation.
//!
//! The engine never talks to a clock itself. The hosting component hands in an
//! `arm` closure that creates a timer and returns its handle; dropping the
//! handle must cancel the timer (as `gloo_timers::callback::Interval` does).
//! Lifecycle hooks of the host map onto the engine like this:
//!
//! - mount -> [`Carousel::start`]
//! - property change -> [`Carousel::reconfigure`]
//! - unmount -> [`Carousel::stop`]
//!
//! At most one timer handle is held at any time, so repeated re-renders or
//! re-configuration with identical values can never stack up ticks.

mod error;

pub use error::CarouselError;

use std::num::NonZeroU32;

/// Rotation period used when none (or an invalid one) is given.
pub const DEFAULT_INTERVAL_MS: u32 = 5000;

/// Auto-play settings of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Whether a timer advances the carousel on its own.
    pub auto_play: bool,
    /// Rotation period in milliseconds.
    pub interval: NonZeroU32,
}

impl CarouselConfig {
    /// Builds a config from raw property values. A zero period falls back to
    /// [`DEFAULT_INTERVAL_MS`].
    pub fn new(auto_play: bool, interval_ms: u32) -> Self {
        Self {
            auto_play,
            interval: NonZeroU32::new(interval_ms).unwrap_or(default_interval()),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: true,
            interval: default_interval(),
        }
    }
}

fn default_interval() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_INTERVAL_MS).unwrap_or(NonZeroU32::MIN)
}

/// Display state derived from the number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    /// No images: a placeholder is shown.
    Empty,
    /// Exactly one image: shown without controls or rotation.
    Static,
    /// Two or more images: navigation and auto-play apply.
    Rotating,
}

/// One indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Rotation state for one mounted carousel. `T` is the host's timer handle.
#[derive(Debug)]
pub struct Carousel<T> {
    images: Vec<String>,
    current: usize,
    config: CarouselConfig,
    running: bool,
    timer: Option<T>,
}

impl<T> Carousel<T> {
    /// Creates an engine focused on the first image. No timer is armed until
    /// [`Carousel::start`] is called.
    pub fn new(images: Vec<String>, config: CarouselConfig) -> Self {
        Self {
            images,
            current: 0,
            config,
            running: false,
            timer: None,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn mode(&self) -> CarouselMode {
        match self.images.len() {
            0 => CarouselMode::Empty,
            1 => CarouselMode::Static,
            _ => CarouselMode::Rotating,
        }
    }

    /// Focused index, `None` when there are no images.
    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current)
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Whether a rotation timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the configuration calls for automatic rotation.
    pub fn should_rotate(&self) -> bool {
        self.config.auto_play && self.mode() == CarouselMode::Rotating
    }

    /// Advances to the next image, wrapping at the end. Returns `true` when the
    /// focused index changed.
    pub fn next(&mut self) -> bool {
        let len = self.images.len();
        if len <= 1 {
            return false;
        }
        self.current = (self.current + 1) % len;
        true
    }

    /// Steps back to the previous image, wrapping at the start.
    pub fn previous(&mut self) -> bool {
        let len = self.images.len();
        if len <= 1 {
            return false;
        }
        self.current = (self.current + len - 1) % len;
        true
    }

    /// Focuses the image at `index`. Out-of-range indices are rejected and the
    /// state is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<bool, CarouselError> {
        let len = self.images.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        let moved = self.current != index;
        self.current = index;
        Ok(moved)
    }

    /// Timer callback. Ticks that arrive while no timer is armed are stale and
    /// ignored.
    pub fn tick(&mut self) -> bool {
        if self.timer.is_none() {
            tracing::trace!("ignoring stale carousel tick");
            return false;
        }
        self.next()
    }

    /// Mount hook: marks the carousel as running and arms the rotation timer if
    /// the configuration calls for one. Returns `true` if a timer was armed.
    pub fn start<F>(&mut self, arm: F) -> bool
    where
        F: FnOnce(NonZeroU32) -> T,
    {
        self.running = true;
        self.arm_if_needed(arm)
    }

    /// Unmount hook: disarms the timer. Returns `true` if one was armed.
    pub fn stop(&mut self) -> bool {
        self.running = false;
        self.disarm()
    }

    /// Property-change hook. Identical values are a no-op; otherwise the old
    /// timer is dropped before the new configuration is applied and, if the
    /// carousel is running, at most one new timer is armed. Returns `true`
    /// when anything changed.
    pub fn reconfigure<F>(&mut self, images: Vec<String>, config: CarouselConfig, arm: F) -> bool
    where
        F: FnOnce(NonZeroU32) -> T,
    {
        let images_changed = self.images != images;
        if !images_changed && self.config == config {
            return false;
        }

        self.disarm();
        if images_changed {
            self.images = images;
            self.current = 0;
        }
        self.config = config;
        tracing::debug!(
            images = self.images.len(),
            auto_play = config.auto_play,
            interval_ms = config.interval.get(),
            "carousel reconfigured"
        );

        if self.running {
            self.arm_if_needed(arm);
        }
        true
    }

    /// CSS transform that brings the focused image into view on a horizontal
    /// track of full-width slides.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.images.len()).map(move |index| Indicator {
            index,
            active: index == self.current,
        })
    }

    fn arm_if_needed<F>(&mut self, arm: F) -> bool
    where
        F: FnOnce(NonZeroU32) -> T,
    {
        if self.timer.is_some() || !self.should_rotate() {
            return false;
        }
        tracing::debug!(interval_ms = self.config.interval.get(), "arming carousel timer");
        self.timer = Some(arm(self.config.interval));
        true
    }

    fn disarm(&mut self) -> bool {
        let armed = self.timer.take().is_some();
        if armed {
            tracing::debug!("carousel timer disarmed");
        }
        armed
    }
}

#[cfg(test)]
mod tests;
