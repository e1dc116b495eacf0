use thiserror::Error;
use crate::contact::{
    ContactField, ContactRequest, FormSubmission,
    FORM_CONTENT_TYPE, FORM_ENDPOINT, FORM_METHOD,
};
use crate::logo::{logo_view, LogoView};
use crate::social::{FooterLink, SocialLinks, SocialPlatform};
use crate::validation::{validate_required, ValidationError};

/// Delay between a successful submission and the form returning to empty.
pub const RESET_DELAY_MS: u32 = 5_000;
pub const SUBMIT_FAILURE_ALERT: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Parameters supplied by the embedding environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingConfig {
    pub logo_src: String,
    pub show_testimonials: bool,
    pub twitter_url: String,
    pub linkedin_url: String,
    pub instagram_url: String,
}

impl LandingConfig {
    pub fn social_links(&self) -> SocialLinks {
        SocialLinks::new(&*self.twitter_url, &*self.linkedin_url, &*self.instagram_url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub content_type: &'static str,
    pub body: String,
    pub ticket: SubmissionTicket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScheduleReset { ticket: SubmissionTicket, delay_ms: u32 },
    Alert(&'static str),
}

#[derive(Debug, Clone)]
pub struct LandingState {
    config: LandingConfig,
    contact: ContactRequest,
    social: SocialLinks,
    menu_open: bool,
    settings_open: bool,
    submitted: bool,
    next_ticket: u64,
    pending_reset: Option<SubmissionTicket>,
}

impl LandingState {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            social: config.social_links(),
            config,
            contact: ContactRequest::default(),
            menu_open: false,
            settings_open: false,
            submitted: false,
            next_ticket: 0,
            pending_reset: None,
        }
    }

    pub fn config(&self) -> &LandingConfig { &self.config }
    pub fn contact(&self) -> &ContactRequest { &self.contact }
    pub fn social(&self) -> &SocialLinks { &self.social }
    pub fn is_menu_open(&self) -> bool { self.menu_open }
    pub fn is_settings_open(&self) -> bool { self.settings_open }
    pub fn is_submitted(&self) -> bool { self.submitted }
    pub fn pending_reset(&self) -> Option<SubmissionTicket> { self.pending_reset }

    /// Adopts new configuration. Social links are re-seeded, discarding local edits,
    /// only when the configured URLs themselves change.
    pub fn apply_config(&mut self, config: LandingConfig) -> bool {
        if self.config == config {
            return false;
        }
        let links = config.social_links();
        if links != self.config.social_links() {
            self.social = links;
        }
        self.config = config;
        true
    }

    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value);
    }

    pub fn update_field_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match ContactField::from_name(name) {
            Some(field) => {
                self.update_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    /// Edits are live already; saving only dismisses the modal.
    pub fn save_settings(&mut self) {
        self.close_settings();
    }

    pub fn update_social(&mut self, platform: SocialPlatform, value: impl Into<String>) {
        self.social.set(platform, value);
    }

    /// Builds the outbound request for the current field values.
    /// Repeated calls are not deduplicated: each yields its own request.
    pub fn begin_submit(&mut self) -> Result<OutboundRequest, ValidationError> {
        self.begin_submit_with_honeypot("")
    }

    /// Same as [`begin_submit`](Self::begin_submit), carrying whatever the hidden honeypot input holds.
    pub fn begin_submit_with_honeypot(&mut self, honeypot: &str) -> Result<OutboundRequest, ValidationError> {
        validate_required(&self.contact)?;

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        Ok(OutboundRequest {
            method: FORM_METHOD,
            path: FORM_ENDPOINT,
            content_type: FORM_CONTENT_TYPE,
            body: FormSubmission::new(self.contact.clone())
                .with_honeypot(honeypot)
                .encode(),
            ticket,
        })
    }

    /// Success means the transport did not fail; the response status is not consulted.
    pub fn complete_submit(&mut self, ticket: SubmissionTicket, result: Result<(), SubmitError>) -> Effect {
        match result {
            Ok(()) => {
                self.submitted = true;
                self.pending_reset = Some(ticket);
                Effect::ScheduleReset { ticket, delay_ms: RESET_DELAY_MS }
            }
            Err(_) => Effect::Alert(SUBMIT_FAILURE_ALERT),
        }
    }

    /// Returns the form to its initial state if `ticket` is the latest scheduled reset.
    pub fn reset_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        if self.pending_reset != Some(ticket) {
            return false;
        }
        self.pending_reset = None;
        self.contact.clear();
        self.submitted = false;
        true
    }

    pub fn cancel_pending_reset(&mut self) -> Option<SubmissionTicket> {
        self.pending_reset.take()
    }

    pub fn thank_you_message(&self) -> Option<String> {
        self.submitted
            .then(|| format!("A confirmation email has been sent to {}", self.contact.email))
    }

    pub fn footer_links(&self) -> Vec<FooterLink> {
        self.social.footer_links()
    }

    pub fn logo_view(&self, preview: Option<&str>) -> LogoView {
        logo_view(preview, &self.config.logo_src)
    }
}

impl Default for LandingState {
    fn default() -> Self {
        Self::new(LandingConfig::default())
    }
}
