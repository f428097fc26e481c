// src/session/cookie.rs
use astra::Request;

pub const SESSION_COOKIE: &str = "housetracker_session";

/// The session token sent by the browser, if any.
pub fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

/// `Set-Cookie` value for a session token.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/")
}
