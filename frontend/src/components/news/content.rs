//! Display of article bodies with inline images.

use common::content::{segments, ImageMarker, Segment};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsContentProps {
    /// Article body containing `![alt](url)` markers.
    pub content: AttrValue,
}

/// Renders text runs as pre-wrapped paragraphs and markers as figures.
#[function_component(NewsContent)]
pub fn news_content(props: &NewsContentProps) -> Html {
    segments(&props.content)
        .enumerate()
        .filter(|(_, segment)| !segment.is_blank())
        .map(|(index, segment)| match segment {
            Segment::Text(text) => html! {
                <p key={index} class="news-paragraph" style="margin-bottom:16px;line-height:1.75;white-space:pre-wrap;">
                    { text }
                </p>
            },
            Segment::Image(marker) => figure(index, marker),
        })
        .collect::<Html>()
}

fn figure(index: usize, marker: ImageMarker<'_>) -> Html {
    html! {
        <figure key={index} class="news-figure" style="margin:24px 0;">
            <img
                src={marker.url.to_string()}
                alt={marker.alt.to_string()}
                style="width:100%;height:auto;border-radius:8px;box-shadow:0 2px 6px rgba(0,0,0,0.15);"
            />
            {
                match marker.caption() {
                    Some(caption) => html! {
                        <figcaption style="margin-top:8px;text-align:center;font-size:0.875rem;color:#6b7280;">
                            { caption }
                        </figcaption>
                    },
                    None => html! {},
                }
            }
        </figure>
    }
}
