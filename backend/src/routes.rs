use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use rocket::{State, FromForm, get, post, form::Form, fs::NamedFile, http::Status, serde::json::Json};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use shared::{ContactRequest, FormSubmission, user_info::UserInfo, validate_contact_request};
use crate::{
    config::ServerConfig,
    error::ApiError,
    rate_limiter::RateLimiter,
    screening::flagged_field,
};

/// Fields posted by the landing page's contact form.
#[derive(Debug, FromForm)]
pub struct ContactForm {
    #[field(name = "form-name")]
    #[field(default = String::new())]
    pub form_name: String,
    #[field(name = "bot-field")]
    #[field(default = String::new())]
    pub bot_field: String,
    #[field(default = String::new())]
    pub name: String,
    #[field(default = String::new())]
    pub email: String,
    #[field(default = String::new())]
    pub company: String,
    #[field(default = String::new())]
    pub phone: String,
    #[field(name = "preferredDate")]
    #[field(default = String::new())]
    pub preferred_date: String,
    #[field(default = String::new())]
    pub message: String,
}

impl From<ContactForm> for FormSubmission {
    fn from(form: ContactForm) -> Self {
        FormSubmission {
            form_name: form.form_name,
            honeypot: form.bot_field,
            contact: ContactRequest {
                name: form.name,
                email: form.email,
                company: form.company,
                phone: form.phone,
                preferred_date: form.preferred_date,
                message: form.message,
            },
        }
    }
}

pub struct AppState {
    pub contact_limiter: Arc<RateLimiter>,
    accepted: AtomicU64,
    discarded: AtomicU64,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            contact_limiter: Arc::new(RateLimiter::new(config.max_submissions, config.window_minutes)),
            accepted: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
        }
    }

    pub fn accepted_leads(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    pub fn discarded_submissions(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    fn discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub accepted_leads: u64,
    pub discarded_submissions: u64,
}

/// Accepts a demo request. Bot and abusive submissions get the same 200 as real ones.
#[instrument(skip(state, form, user_info), fields(submission_id))]
#[post("/", data = "<form>")]
pub async fn submit_contact(
    state: &State<AppState>,
    form: Form<ContactForm>,
    user_info: UserInfo,
) -> Result<Status, ApiError> {
    let submission = FormSubmission::from(form.into_inner());
    let submission_id = Uuid::new_v4();
    tracing::Span::current().record("submission_id", tracing::field::display(submission_id));

    submission.ensure_contact_form()
        .map_err(|_| ApiError::UnknownForm(submission.form_name.clone()))?;

    if submission.is_bot() {
        warn!("Honeypot filled, discarding submission from {}", user_info.ip);
        state.discard();
        return Ok(Status::Ok);
    }

    let rate_limit_key = format!("contact:{}", user_info.user_fingerprint);
    state.contact_limiter.check_rate_limit(&rate_limit_key)?;

    debug!("Validating contact request: {} bytes of message", submission.contact.message.len());
    validate_contact_request(&submission.contact)?;

    if let Some(field) = flagged_field(&submission.contact) {
        warn!("Inappropriate content in {}, discarding submission", field.name());
        state.discard();
        return Ok(Status::Ok);
    }

    let contact = &submission.contact;
    info!(
        name = %contact.name,
        email = %contact.email,
        company = %contact.company,
        phone = %contact.phone,
        preferred_date = %contact.preferred_date,
        "📨 Demo request received"
    );
    state.accepted.fetch_add(1, Ordering::Relaxed);

    Ok(Status::Ok)
}

#[get("/health")]
pub async fn health(state: &State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        accepted_leads: state.accepted_leads(),
        discarded_submissions: state.discarded_submissions(),
    })
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[get("/<path..>", rank = 20)]
pub async fn spa_handler(path: PathBuf, static_dir: &State<PathBuf>) -> Option<NamedFile> {
    let file_path = static_dir.join(&path);
    if file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(static_dir.join("index.html")).await.ok()
    }
}
