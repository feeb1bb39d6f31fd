//! Properties of the `BannerCarousel` component.

use common::carousel::DEFAULT_INTERVAL_MS;
use yew::prelude::*;

/// Properties for the `BannerCarousel`.
///
/// Any change to these values is forwarded to the rotation engine, which
/// restarts its timer only when something actually differs.
#[derive(Properties, PartialEq, Clone)]
pub struct BannerCarouselProps {
    /// Image urls in display order. May be empty.
    pub images: Vec<String>,

    /// Advance automatically every `interval_ms`. Defaults to `true`.
    #[prop_or(true)]
    pub auto_play: bool,

    /// Rotation period in milliseconds. Zero falls back to the default period.
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval_ms: u32,
}
