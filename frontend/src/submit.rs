use gloo_net::http::Request;
use shared::{OutboundRequest, SubmitError};

/// Posts the encoded contact form. Any response counts as delivered.
pub async fn send_form(request: &OutboundRequest) -> Result<(), SubmitError> {
    let response = Request::post(request.path)
        .header("Content-Type", request.content_type)
        .body(request.body.clone())
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    web_sys::console::log_1(&format!(
        "Contact form {} {} answered with status {}",
        request.method, request.path, response.status()
    ).into());
    Ok(())
}
