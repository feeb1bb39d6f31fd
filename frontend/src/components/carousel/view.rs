use common::carousel::{CarouselMode, Indicator};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::BannerCarousel;

const FRAME_STYLE: &str =
    "position:relative;aspect-ratio:1/1;border-radius:16px;overflow:hidden;";
const NAV_BUTTON_STYLE: &str = "position:absolute;top:50%;transform:translateY(-50%);\
    background:rgba(255,255,255,0.8);border:none;border-radius:50%;padding:8px;\
    cursor:pointer;box-shadow:0 1px 4px rgba(0,0,0,0.2);";

pub fn view(component: &BannerCarousel, ctx: &Context<BannerCarousel>) -> Html {
    let engine = &component.engine;
    match engine.mode() {
        CarouselMode::Empty => placeholder(),
        CarouselMode::Static => {
            let src = engine.current_image().unwrap_or_default().to_string();
            html! {
                <div class="banner-carousel" style={FRAME_STYLE}>
                    <img src={src} alt="Banner" style="width:100%;height:100%;object-fit:cover;" />
                </div>
            }
        }
        CarouselMode::Rotating => rotating(component, ctx.link()),
    }
}

/// Brand panel shown when no banner images are configured.
fn placeholder() -> Html {
    html! {
        <div
            class="banner-carousel banner-placeholder"
            style="aspect-ratio:1/1;border-radius:16px;background:rgba(22,128,61,0.1);display:flex;align-items:center;justify-content:center;"
        >
            <div style="text-align:center;">
                <div style="font-size:3.75rem;font-weight:bold;color:#16803d;">{ "马上住" }</div>
                <p style="margin-top:8px;color:#6b7280;">{ "宜然焕新服务" }</p>
            </div>
        </div>
    }
}

fn rotating(component: &BannerCarousel, link: &Scope<BannerCarousel>) -> Html {
    let engine = &component.engine;
    let track_style = format!(
        "display:flex;height:100%;transition:transform 500ms ease-in-out;transform:{};",
        engine.track_transform()
    );

    let slides = engine
        .images()
        .iter()
        .enumerate()
        .map(|(index, src)| {
            html! {
                <div key={index} style="width:100%;height:100%;flex-shrink:0;">
                    <img
                        src={src.clone()}
                        alt={format!("Banner {}", index + 1)}
                        style="width:100%;height:100%;object-fit:cover;"
                    />
                </div>
            }
        })
        .collect::<Html>();

    let dots = engine
        .indicators()
        .map(|dot| indicator(dot, link))
        .collect::<Html>();

    html! {
        <div class="banner-carousel" style={FRAME_STYLE}>
            <div class="banner-track" style={track_style}>
                { slides }
            </div>

            <button
                class="banner-nav prev"
                aria-label="上一张"
                style={format!("{NAV_BUTTON_STYLE}left:8px;")}
                onclick={link.callback(|_| Msg::Previous)}
            >
                { "‹" }
            </button>
            <button
                class="banner-nav next"
                aria-label="下一张"
                style={format!("{NAV_BUTTON_STYLE}right:8px;")}
                onclick={link.callback(|_| Msg::Next)}
            >
                { "›" }
            </button>

            <div style="position:absolute;bottom:16px;left:50%;transform:translateX(-50%);display:flex;gap:8px;">
                { dots }
            </div>
        </div>
    }
}

fn indicator(dot: Indicator, link: &Scope<BannerCarousel>) -> Html {
    let (width, background) = if dot.active {
        ("16px", "#fff")
    } else {
        ("8px", "rgba(255,255,255,0.5)")
    };
    let style = format!(
        "width:{width};height:8px;border-radius:9999px;border:none;padding:0;\
         background:{background};transition:all 300ms;cursor:pointer;"
    );
    let index = dot.index;

    html! {
        <button
            key={index}
            class={classes!("banner-dot", dot.active.then_some("active"))}
            aria-label={format!("第 {} 张", index + 1)}
            style={style}
            onclick={link.callback(move |_| Msg::JumpTo(index))}
        />
    }
}
