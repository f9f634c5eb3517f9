/**
 * Session Cookie
 *
 * Construction and removal of the HTTP-only session cookie. Attributes:
 * `SameSite=Strict`, `Path=/`, `Max-Age` equal to the token lifetime, and
 * `Secure` whenever the deployment is served over encrypted transport
 * (driven by config, not hard-coded off).
 */

use crate::backend::auth::sessions::TOKEN_TTL_SECS;
use tower_cookies::cookie::time::Duration;
use tower_cookies::cookie::SameSite;
use tower_cookies::Cookie;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Build the session cookie for a freshly issued token.
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::seconds(TOKEN_TTL_SECS as i64))
        .path("/")
        .build()
}

/// Build a removal cookie. The attributes must match the ones the cookie was
/// set with or the browser keeps the original.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok".to_string(), false);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let cookie = session_cookie("tok".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));
    }
}
