use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(429)]
pub fn too_many_requests(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Rate limit exceeded. Please wait before trying again.".into(),
        status: 429
    })
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Invalid form submission.".into(),
        status: 400
    })
}

#[catch(413)]
pub fn payload_too_large(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Form submission is too large.".into(),
        status: 413
    })
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Form fields could not be read.".into(),
        status: 422
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "An internal server error occurred.".into(),
        status: 500
    })
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorMessage> {
    let error_msg = match req.method() {
        rocket::http::Method::Post => "Only the contact form accepts submissions.",
        _ => "The requested resource was not found.",
    };

    Json(ErrorMessage {
        error: error_msg.into(),
        status: 404
    })
}
