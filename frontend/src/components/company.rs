//! Application-wide company profile.
//!
//! `CompanyProvider` is mounted once at the root and owns the only copy of the
//! profile. It fetches `GET /company` on first render and hands the result to
//! every consumer through a Yew context, so pages never fetch it themselves.
//! `CompanyContext::reload` is the explicit invalidation hook (e.g. after the
//! admin edits the profile).

use std::rc::Rc;

use common::model::company::CompanyInfo;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyContext {
    pub company: Rc<CompanyInfo>,
    pub loading: bool,
    pub reload: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct CompanyProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Fetch,
    Loaded(CompanyInfo),
    Failed,
}

pub struct CompanyProvider {
    company: Rc<CompanyInfo>,
    loading: bool,
    in_flight: bool,
    reload: Callback<()>,
}

impl Component for CompanyProvider {
    type Message = Msg;
    type Properties = CompanyProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            company: Rc::new(CompanyInfo::default()),
            loading: true,
            in_flight: false,
            reload: ctx.link().callback(|_| Msg::Fetch),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                if self.in_flight {
                    return false;
                }
                self.in_flight = true;
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_company().await {
                        Ok(company) => link.send_message(Msg::Loaded(company)),
                        Err(err) => {
                            tracing::error!("failed to load company profile: {err}");
                            link.send_message(Msg::Failed);
                        }
                    }
                });
                true
            }
            Msg::Loaded(company) => {
                tracing::debug!("company profile loaded, {} banner images", company.banner_images.len());
                self.company = Rc::new(company);
                self.in_flight = false;
                self.loading = false;
                true
            }
            Msg::Failed => {
                self.in_flight = false;
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let context = CompanyContext {
            company: self.company.clone(),
            loading: self.loading,
            reload: self.reload.clone(),
        };
        html! {
            <ContextProvider<CompanyContext> context={context}>
                { ctx.props().children.clone() }
            </ContextProvider<CompanyContext>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
