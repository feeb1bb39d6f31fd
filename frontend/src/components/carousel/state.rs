use common::carousel::{Carousel, CarouselConfig};
use gloo_timers::callback::Interval;

use super::props::BannerCarouselProps;

/// State of a mounted `BannerCarousel`. Dropping the held `Interval` cancels
/// the browser timer.
pub struct BannerCarousel {
    pub engine: Carousel<Interval>,
}

impl BannerCarousel {
    pub fn new(props: &BannerCarouselProps) -> Self {
        Self {
            engine: Carousel::new(props.images.clone(), config_of(props)),
        }
    }
}

pub fn config_of(props: &BannerCarouselProps) -> CarouselConfig {
    CarouselConfig::new(props.auto_play, props.interval_ms)
}
