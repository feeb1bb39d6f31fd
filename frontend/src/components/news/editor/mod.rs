//! Admin news editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! On first render an existing article is loaded when `news_id` is given;
//! otherwise the editor starts from an empty draft.

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::NewsEditorProps;
pub use state::NewsEditor;

use crate::api;

impl Component for NewsEditor {
    type Message = Msg;
    type Properties = NewsEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NewsEditor::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(id) = ctx.props().news_id {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_news(id).await {
                        Ok(news) => link.send_message(Msg::Loaded(news)),
                        Err(err) => {
                            tracing::error!("failed to load news {id} for editing: {err}");
                            link.send_message(Msg::LoadFailed);
                        }
                    }
                });
            }
        }
    }
}
