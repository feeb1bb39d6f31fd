use yew::context::ContextHandle;
use yew::prelude::*;

use crate::components::carousel::BannerCarousel;
use crate::components::company::CompanyContext;

pub enum Msg {
    CompanyChanged(CompanyContext),
}

/// Home page hero: company pitch next to the banner carousel.
pub struct HomeHero {
    company: Option<CompanyContext>,
    _listener: Option<ContextHandle<CompanyContext>>,
}

impl Component for HomeHero {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = ctx
            .link()
            .context::<CompanyContext>(ctx.link().callback(Msg::CompanyChanged));
        let (company, listener) = match subscription {
            Some((company, listener)) => (Some(company), Some(listener)),
            None => {
                tracing::warn!("HomeHero rendered outside of CompanyProvider");
                (None, None)
            }
        };
        Self {
            company,
            _listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CompanyChanged(company) => {
                self.company = Some(company);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(context) = &self.company else {
            return html! { <BannerCarousel images={Vec::<String>::new()} /> };
        };
        let company = &context.company;

        html! {
            <section class="home-hero" style="display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center;padding:48px 0;">
                <div>
                    <h1 style="font-size:2.5rem;font-weight:bold;">{ company.display_name() }</h1>
                    {
                        match &company.description {
                            Some(description) => html! { <p style="margin-top:16px;color:#6b7280;">{ description.clone() }</p> },
                            None => html! {},
                        }
                    }
                    <p style="margin-top:24px;font-weight:600;">{ format!("服务热线：{}", company.phone) }</p>
                </div>
                <BannerCarousel images={company.banner_images.clone()} />
            </section>
        }
    }
}
