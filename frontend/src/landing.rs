use gloo_timers::callback::Timeout;
use web_sys::{Element, File};
use yew::prelude::*;
use shared::{
    ContactField, Effect, LandingConfig, LandingState, LogoPreview,
    SocialPlatform, SubmissionTicket, SubmitError,
};
use crate::{
    contact_form::ContactSection,
    footer::Footer,
    logo::BrowserObjectUrls,
    nav::Navigation,
    sections::{CallToAction, Features, Hero, Pricing, Roadmap},
    social_settings::SocialSettings,
    styles::PAGE,
    submit::send_form,
};

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    #[prop_or_default]
    pub logo_src: AttrValue,
    /// Carried through configuration; no testimonials section is rendered.
    #[prop_or_default]
    pub show_testimonials: bool,
    #[prop_or_default]
    pub twitter_url: AttrValue,
    #[prop_or_default]
    pub linkedin_url: AttrValue,
    #[prop_or_default]
    pub instagram_url: AttrValue,
}

impl LandingProps {
    fn landing_config(&self) -> LandingConfig {
        LandingConfig {
            logo_src: self.logo_src.to_string(),
            show_testimonials: self.show_testimonials,
            twitter_url: self.twitter_url.to_string(),
            linkedin_url: self.linkedin_url.to_string(),
            instagram_url: self.instagram_url.to_string(),
        }
    }
}

pub enum Msg {
    ToggleMenu,
    CloseMenu,
    OpenSettings,
    CloseSettings,
    SaveSettings,
    UpdateSocial(SocialPlatform, String),
    UpdateField(ContactField, String),
    Submit(String),
    SubmitResult(SubmissionTicket, Result<(), SubmitError>),
    ResetElapsed(SubmissionTicket),
    LogoSelected(File),
    ScrollToContact,
}

pub struct Landing {
    state: LandingState,
    logo: LogoPreview<BrowserObjectUrls>,
    reset_timer: Option<Timeout>,
    contact_ref: NodeRef,
}

impl Component for Landing {
    type Message = Msg;
    type Properties = LandingProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: LandingState::new(ctx.props().landing_config()),
            logo: LogoPreview::new(BrowserObjectUrls),
            reset_timer: None,
            contact_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state.apply_config(ctx.props().landing_config());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.state.toggle_menu();
                true
            },
            Msg::CloseMenu => {
                let was_open = self.state.is_menu_open();
                self.state.close_menu();
                was_open
            },
            Msg::OpenSettings => {
                self.state.open_settings();
                true
            },
            Msg::CloseSettings => {
                self.state.close_settings();
                true
            },
            Msg::SaveSettings => {
                self.state.save_settings();
                true
            },
            Msg::UpdateSocial(platform, value) => {
                self.state.update_social(platform, value);
                true
            },
            Msg::UpdateField(field, value) => {
                self.state.update_field(field, value);
                true
            },
            Msg::Submit(honeypot) => {
                match self.state.begin_submit_with_honeypot(&honeypot) {
                    Ok(request) => {
                        ctx.link().send_future(async move {
                            let result = send_form(&request).await;
                            Msg::SubmitResult(request.ticket, result)
                        });
                    }
                    Err(error) => {
                        web_sys::console::log_1(&format!("Contact form not sent: {}", error).into());
                    }
                }
                false
            },
            Msg::SubmitResult(ticket, result) => {
                if let Err(error) = &result {
                    web_sys::console::log_1(&format!("Contact form submission failed: {}", error).into());
                }
                match self.state.complete_submit(ticket, result) {
                    Effect::ScheduleReset { ticket, delay_ms } => {
                        let on_elapsed = ctx.link().callback(move |_: ()| Msg::ResetElapsed(ticket));
                        self.reset_timer = Some(Timeout::new(delay_ms, move || on_elapsed.emit(())));
                        true
                    }
                    Effect::Alert(message) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(message);
                        }
                        false
                    }
                }
            },
            Msg::ResetElapsed(ticket) => {
                self.reset_timer = None;
                self.state.reset_elapsed(ticket)
            },
            Msg::LogoSelected(file) => {
                match self.logo.select(&file) {
                    Ok(_) => true,
                    Err(error) => {
                        web_sys::console::log_1(&error.to_string().into());
                        false
                    }
                }
            },
            Msg::ScrollToContact => {
                if let Some(section) = self.contact_ref.cast::<Element>() {
                    section.scroll_into_view();
                }
                false
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class={PAGE}>
                <Navigation
                    logo={self.state.logo_view(self.logo.current())}
                    menu_open={self.state.is_menu_open()}
                    on_toggle_menu={link.callback(|_| Msg::ToggleMenu)}
                    on_navigate={link.callback(|_| Msg::CloseMenu)}
                    on_logo_selected={link.callback(Msg::LogoSelected)}
                />

                if self.state.is_settings_open() {
                    <SocialSettings
                        links={self.state.social().clone()}
                        on_change={link.callback(|(platform, value): (SocialPlatform, String)| Msg::UpdateSocial(platform, value))}
                        on_close={link.callback(|_| Msg::CloseSettings)}
                        on_save={link.callback(|_| Msg::SaveSettings)}
                    />
                }

                <Hero />
                <Features />
                <Pricing />
                <Roadmap />
                <CallToAction on_schedule_demo={link.callback(|_| Msg::ScrollToContact)} />

                <ContactSection
                    section_ref={self.contact_ref.clone()}
                    contact={self.state.contact().clone()}
                    thank_you={self.state.thank_you_message()}
                    on_input={link.callback(|(field, value): (ContactField, String)| Msg::UpdateField(field, value))}
                    on_submit={link.callback(Msg::Submit)}
                />

                <Footer
                    links={self.state.footer_links()}
                    on_edit_links={link.callback(|_| Msg::OpenSettings)}
                />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.cancel_pending_reset();
        self.reset_timer = None;
        self.logo.clear();
    }
}
