//! News listings.
//!
//! The same component serves the public `/news` page (published articles as
//! cards) and the admin `/admin/news` table, which adds title search, the
//! publish toggle, edit links and delete. Filtering happens client-side over
//! the list fetched on first render.

use common::model::news::{News, NewsFilter, ALL_CATEGORIES, NEWS_CATEGORIES};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{confirm, show_toast, Tone};

#[derive(Properties, PartialEq, Clone)]
pub struct NewsListProps {
    /// Admin table instead of public cards.
    #[prop_or_default]
    pub admin: bool,
}

pub enum Msg {
    Loaded(Vec<News>),
    LoadFailed,
    SetCategory(String),
    SetSearch(String),
    TogglePublish(i64),
    Updated(News),
    Delete(i64),
    Deleted(i64),
    ActionFailed,
}

pub struct NewsList {
    news: Option<Vec<News>>,
    filter: NewsFilter,
    /// Article with a publish or delete request in flight.
    pending: Option<i64>,
}

impl Component for NewsList {
    type Message = Msg;
    type Properties = NewsListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            news: None,
            filter: NewsFilter::default(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(news) => {
                tracing::debug!(count = news.len(), "news list loaded");
                self.news = Some(news);
                true
            }
            Msg::LoadFailed => {
                self.news = Some(Vec::new());
                show_toast(Tone::Error, "加载新闻列表失败。");
                true
            }
            Msg::SetCategory(category) => {
                if self.filter.category == category {
                    return false;
                }
                self.filter.category = category;
                true
            }
            Msg::SetSearch(search) => {
                self.filter.search = search;
                true
            }
            Msg::TogglePublish(id) => {
                let Some(news) = self.find(id) else {
                    return false;
                };
                if self.pending.is_some() {
                    return false;
                }
                let publish = !news.is_published;
                self.pending = Some(id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::set_published(id, publish).await {
                        Ok(news) => link.send_message(Msg::Updated(news)),
                        Err(err) => {
                            tracing::error!("failed to set news {id} published={publish}: {err}");
                            link.send_message(Msg::ActionFailed);
                        }
                    }
                });
                true
            }
            Msg::Updated(updated) => {
                self.pending = None;
                if let Some(news) = self
                    .news
                    .as_mut()
                    .and_then(|list| list.iter_mut().find(|news| news.id == updated.id))
                {
                    *news = updated;
                }
                true
            }
            Msg::Delete(id) => {
                if self.pending.is_some() || !confirm("确定要删除这篇新闻吗？") {
                    return false;
                }
                self.pending = Some(id);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_news(id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => {
                            tracing::error!("failed to delete news {id}: {err}");
                            link.send_message(Msg::ActionFailed);
                        }
                    }
                });
                true
            }
            Msg::Deleted(id) => {
                self.pending = None;
                if let Some(list) = self.news.as_mut() {
                    list.retain(|news| news.id != id);
                }
                show_toast(Tone::Success, "新闻已删除。");
                true
            }
            Msg::ActionFailed => {
                self.pending = None;
                show_toast(Tone::Error, "操作失败，请稍后重试。");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let admin = ctx.props().admin;
        let body = match &self.news {
            None => html! { <div class="news-loading">{ "加载中..." }</div> },
            Some(list) if list.is_empty() => html! { <div class="news-empty">{ "暂无新闻数据" }</div> },
            Some(list) if admin => self.table(list, link),
            Some(list) => self.cards(list),
        };

        html! {
            <section class="news-list" style="display:flex;flex-direction:column;gap:24px;padding:32px 0;">
                <div style="display:flex;align-items:center;justify-content:space-between;">
                    <h1 style="font-size:1.75rem;font-weight:bold;">
                        { if admin { "新闻管理" } else { "新闻资讯" } }
                    </h1>
                    if admin {
                        <a href="/admin/news/new" class="btn-primary">{ "发布新闻" }</a>
                    }
                </div>
                { self.toolbar(link, admin) }
                { body }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let published_only = !ctx.props().admin;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_news_list(published_only).await {
                    Ok(news) => link.send_message(Msg::Loaded(news)),
                    Err(err) => {
                        tracing::error!("failed to load news list: {err}");
                        link.send_message(Msg::LoadFailed);
                    }
                }
            });
        }
    }
}

impl NewsList {
    fn find(&self, id: i64) -> Option<&News> {
        self.news.as_deref()?.iter().find(|news| news.id == id)
    }

    /// Category buttons, plus the title search for admins.
    fn toolbar(&self, link: &Scope<Self>, admin: bool) -> Html {
        let buttons = std::iter::once(ALL_CATEGORIES)
            .chain(NEWS_CATEGORIES)
            .map(|category| {
                let active = self.filter.category == category;
                html! {
                    <button
                        type="button"
                        class={classes!("category-btn", active.then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetCategory(category.to_string()))}
                    >
                        { category }
                    </button>
                }
            })
            .collect::<Html>();

        html! {
            <div style="display:flex;flex-wrap:wrap;gap:16px;align-items:center;">
                if admin {
                    <input
                        type="search"
                        placeholder="搜索新闻标题..."
                        value={self.filter.search.clone()}
                        style="flex:1;min-width:200px;padding:8px 16px;border:1px solid #d1d5db;border-radius:6px;"
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                }
                <div style="display:flex;gap:8px;">{ buttons }</div>
            </div>
        }
    }

    fn cards(&self, list: &[News]) -> Html {
        let cards = self
            .filter
            .apply(list)
            .map(|news| {
                html! {
                    <a key={news.id.to_string()} href={format!("/news/{}", news.id)} class="news-card" style="display:block;border:1px solid #e5e7eb;border-radius:8px;overflow:hidden;">
                        { thumbnail(news, "width:100%;aspect-ratio:16/9;object-fit:cover;") }
                        <div style="padding:20px;">
                            <span class="news-category">{ news.category.clone() }</span>
                            <h3 style="margin-top:8px;font-weight:600;">{ news.title.clone() }</h3>
                            <p style="margin-top:8px;font-size:0.875rem;color:#6b7280;">
                                { news.summary.clone().unwrap_or_default() }
                            </p>
                            <div style="margin-top:12px;display:flex;gap:16px;font-size:0.75rem;color:#9ca3af;">
                                <span>{ news.published_on().unwrap_or_default() }</span>
                                <span>{ format!("{} 次浏览", news.view_count) }</span>
                            </div>
                        </div>
                    </a>
                }
            })
            .collect::<Html>();

        html! {
            <div style="display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:24px;">
                { cards }
            </div>
        }
    }

    fn table(&self, list: &[News], link: &Scope<Self>) -> Html {
        let rows = self
            .filter
            .apply(list)
            .map(|news| {
                let id = news.id;
                let busy = self.pending == Some(id);
                html! {
                    <tr key={id.to_string()}>
                        <td style="display:flex;gap:12px;align-items:center;">
                            { thumbnail(news, "width:64px;height:48px;object-fit:cover;border-radius:4px;") }
                            <div>
                                <p style="font-weight:500;">{ news.title.clone() }</p>
                                <p style="font-size:0.875rem;color:#6b7280;">{ news.summary.clone().unwrap_or_default() }</p>
                            </div>
                        </td>
                        <td>{ news.category.clone() }</td>
                        <td>
                            <button
                                type="button"
                                class={classes!("status-btn", news.is_published.then_some("published"))}
                                disabled={busy}
                                onclick={link.callback(move |_| Msg::TogglePublish(id))}
                            >
                                { news.status_label() }
                            </button>
                        </td>
                        <td>{ news.view_count.to_string() }</td>
                        <td>{ news.published_on().unwrap_or("-") }</td>
                        <td style="display:flex;gap:8px;">
                            <a href={format!("/news/{id}")}>{ "查看" }</a>
                            <a href={format!("/admin/news/{id}")}>{ "编辑" }</a>
                            <button type="button" disabled={busy} onclick={link.callback(move |_| Msg::Delete(id))}>
                                { "删除" }
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>();

        html! {
            <table class="news-table" style="width:100%;">
                <thead>
                    <tr>
                        <th>{ "标题" }</th>
                        <th>{ "分类" }</th>
                        <th>{ "状态" }</th>
                        <th>{ "浏览量" }</th>
                        <th>{ "发布时间" }</th>
                        <th>{ "操作" }</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        }
    }
}

fn thumbnail(news: &News, style: &'static str) -> Html {
    match news.thumbnail() {
        Some(src) => html! { <img src={src.to_string()} alt={news.title.clone()} style={style} /> },
        None => html! { <div class="news-thumb-empty" style={format!("{style}background:rgba(22,128,61,0.1);")} /> },
    }
}
