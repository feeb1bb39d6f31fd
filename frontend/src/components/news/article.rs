//! Public article page.

use common::model::news::News;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::content::NewsContent;
use crate::api;

#[derive(Properties, PartialEq, Clone)]
pub struct NewsArticleProps {
    pub id: i64,
}

pub enum Msg {
    Loaded(News),
    NotFound,
}

enum Status {
    Loading,
    Ready(News),
    Missing,
}

pub struct NewsArticle {
    status: Status,
}

impl Component for NewsArticle {
    type Message = Msg;
    type Properties = NewsArticleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            status: Status::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.status = match msg {
            Msg::Loaded(news) => Status::Ready(news),
            Msg::NotFound => Status::Missing,
        };
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.status {
            Status::Loading => html! { <div class="news-loading">{ "加载中..." }</div> },
            Status::Missing => html! {
                <div class="news-missing">
                    <p>{ "新闻不存在" }</p>
                    <a href="/news">{ "返回新闻列表" }</a>
                </div>
            },
            Status::Ready(news) => article(news),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let id = ctx.props().id;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_news(id).await {
                    Ok(news) => link.send_message(Msg::Loaded(news)),
                    Err(err) => {
                        tracing::error!("failed to load news {id}: {err}");
                        link.send_message(Msg::NotFound);
                    }
                }
            });
        }
    }
}

fn article(news: &News) -> Html {
    html! {
        <article class="news-article">
            <header style="padding:48px 0;">
                <a href="/news" class="back-link" style="display:inline-block;margin-bottom:24px;color:#6b7280;">{ "← 返回新闻列表" }</a>
                <h1 style="font-size:2rem;font-weight:bold;">{ news.title.clone() }</h1>
                <div style="margin-top:16px;display:flex;gap:16px;color:#6b7280;">
                    <span>{ news.published_on().unwrap_or_default() }</span>
                    <span>{ format!("{} 次浏览", news.view_count) }</span>
                </div>
                <span class="news-category" style="display:inline-block;margin-top:16px;padding:4px 12px;border-radius:9999px;background:rgba(22,128,61,0.1);color:#16803d;">
                    { news.category.clone() }
                </span>
            </header>
            {
                match &news.cover_image {
                    Some(cover) if !cover.is_empty() => html! {
                        <img src={cover.clone()} alt={news.title.clone()} style="width:100%;border-radius:8px;margin-bottom:32px;" />
                    },
                    _ => html! {},
                }
            }
            <NewsContent content={AttrValue::from(news.content.clone())} />
        </article>
    }
}
