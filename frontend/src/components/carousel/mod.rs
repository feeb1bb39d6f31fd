//! Home page banner carousel.
//!
//! The Yew lifecycle drives the shared rotation engine:
//! - `rendered` (first render) arms the auto-play timer,
//! - `changed` forwards new properties, re-arming only on real changes,
//! - `destroy` drops the timer.

use std::num::NonZeroU32;

use gloo_timers::callback::Interval;
use yew::html::Scope;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::BannerCarouselProps;
pub use state::BannerCarousel;

impl Component for BannerCarousel {
    type Message = Msg;
    type Properties = BannerCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        BannerCarousel::new(ctx.props())
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Next => self.engine.next(),
            Msg::Previous => self.engine.previous(),
            Msg::Tick => self.engine.tick(),
            Msg::JumpTo(index) => match self.engine.jump_to(index) {
                Ok(moved) => moved,
                Err(err) => {
                    tracing::warn!("{err}");
                    false
                }
            },
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.engine.reconfigure(
            props.images.clone(),
            state::config_of(props),
            interval_armer(ctx.link().clone()),
        )
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.engine.start(interval_armer(ctx.link().clone()));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.engine.stop();
    }
}

/// Creates the browser interval that feeds `Msg::Tick` back into the component.
fn interval_armer(link: Scope<BannerCarousel>) -> impl FnOnce(NonZeroU32) -> Interval {
    move |period| Interval::new(period.get(), move || link.send_message(Msg::Tick))
}
