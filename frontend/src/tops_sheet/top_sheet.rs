use uuid::Uuid;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Class that slides a top sheet into view.
const SHOW_CLASS: &str = "show";

/// Delay before toggling the class, so the sheet is in the DOM when its CSS
/// transition starts.
const TOGGLE_DELAY_MS: u32 = 50;

/// Overlay panel that slides down from the top of the viewport.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_top_sheet(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_top_sheet(top_sheet_ref, false);
}

fn toggle_top_sheet(top_sheet_ref: NodeRef, show: bool) {
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOGGLE_DELAY_MS).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = top_sheet.class_list();
            let result = if show {
                classes.add_1(SHOW_CLASS)
            } else {
                classes.remove_1(SHOW_CLASS)
            };
            if let Err(err) = result {
                tracing::warn!("could not toggle top sheet {}: {:?}", top_sheet.id(), err);
            }
        }
    });
}
