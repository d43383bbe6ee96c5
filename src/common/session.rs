use tower_cookies::{Cookie, Cookies};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session_id";

/// Returns the caller's session id, minting one and setting the HTTP-only
/// cookie when the request carries none. The pipeline itself never reads
/// the session; it only tags responses so the UI can correlate steps.
pub fn ensure_session(cookies: &Cookies) -> String {
    if let Some(existing) = cookies.get(SESSION_COOKIE) {
        return existing.value().to_string();
    }

    let session_id = Uuid::new_v4().to_string();

    let mut cookie = Cookie::new(SESSION_COOKIE, session_id.clone());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_secure(false); // Keep false for HTTP localhost
    cookie.set_max_age(Some(time::Duration::days(7)));
    cookies.add(cookie);

    session_id
}
