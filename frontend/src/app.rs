use crate::components::banners::BannerSettings;
use crate::components::company::CompanyProvider;
use crate::components::helpers::current_path;
use crate::components::home::HomeHero;
use crate::components::news::article::NewsArticle;
use crate::components::news::editor::NewsEditor;
use crate::components::news::list::NewsList;
use yew::{html, Component, Context, Html};

/// Pages handled by this client, resolved from the location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NewsList,
    Article(i64),
    AdminNews,
    NewArticle,
    EditArticle(i64),
    Banners,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        match parts.as_slice() {
            ["news"] => Route::NewsList,
            ["news", id] => id.parse().map(Route::Article).unwrap_or(Route::NewsList),
            ["admin", "news"] => Route::AdminNews,
            ["admin", "news", "new"] => Route::NewArticle,
            ["admin", "news", id] => id.parse().map(Route::EditArticle).unwrap_or(Route::AdminNews),
            ["admin", "company"] => Route::Banners,
            _ => Route::Home,
        }
    }
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = current_path();
        let route = Route::from_path(&path);
        tracing::debug!("{path} -> {route:?}");
        Self { route }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Route::Home => html! { <HomeHero /> },
            Route::NewsList => html! { <NewsList /> },
            Route::Article(id) => html! { <NewsArticle id={id} /> },
            Route::AdminNews => html! { <NewsList admin={true} /> },
            Route::NewArticle => html! { <NewsEditor /> },
            Route::EditArticle(id) => html! { <NewsEditor news_id={Some(id)} /> },
            Route::Banners => html! { <BannerSettings /> },
        };

        html! {
            <CompanyProvider>
                <nav class="site-nav" style="display:flex;gap:24px;padding:16px 0;">
                    <a href="/">{ "首页" }</a>
                    <a href="/news">{ "新闻资讯" }</a>
                </nav>
                <main class="container">{ page }</main>
            </CompanyProvider>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_public_and_admin_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/news/12"), Route::Article(12));
        assert_eq!(Route::from_path("/news"), Route::NewsList);
        assert_eq!(Route::from_path("/news/abc"), Route::NewsList);
        assert_eq!(Route::from_path("/admin/news"), Route::AdminNews);
        assert_eq!(Route::from_path("/admin/news/new"), Route::NewArticle);
        assert_eq!(Route::from_path("/admin/news/7/"), Route::EditArticle(7));
        assert_eq!(Route::from_path("/admin/news/x"), Route::AdminNews);
        assert_eq!(Route::from_path("/admin/company"), Route::Banners);
        assert_eq!(Route::from_path("/admin"), Route::Home);
    }
}
