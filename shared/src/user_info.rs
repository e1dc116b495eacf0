use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub user_fingerprint: String,
    pub ip: String,
}

pub const UNKNOWN_IP: &str = "0.0.0.0";

pub fn generate_server_fingerprint(ip: &str, user_agent: Option<&str>) -> String {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use sha2::{Sha256, Digest};

    let mut hasher = Sha256::new();
    hasher.update(ip.as_bytes());
    if let Some(ua) = user_agent {
        hasher.update(ua.as_bytes());
    }
    URL_SAFE.encode(hasher.finalize())
}

/// Prefers the proxy-provided address; the first hop of `X-Forwarded-For` is the client.
pub fn client_ip(real_ip: Option<&str>, forwarded_for: Option<&str>) -> String {
    real_ip
        .or_else(|| forwarded_for.and_then(|list| list.split(',').next()))
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_IP)
        .to_string()
}

#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for UserInfo {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            let headers = req.headers();
            let ip = client_ip(headers.get_one("X-Real-IP"), headers.get_one("X-Forwarded-For"));

            let user_agent = headers.get_one("User-Agent");
            let fingerprint = super::generate_server_fingerprint(&ip, user_agent);

            Outcome::Success(UserInfo {
                id: Uuid::new_v4(),
                user_fingerprint: fingerprint,
                ip,
            })
        }
    }
}
