//! Login form handling for full-serving mode.

use url::form_urlencoded;

/// Decodes a URL-encoded form body and checks its `login` and `pass`
/// fields against the configured credentials. The first occurrence of each
/// field wins. Anything that does not decode into matching fields is a
/// failed login, not an error.
pub fn credentials_match(body: &[u8], username: &str, password: &str) -> bool {
    let mut login = None;
    let mut pass = None;

    for (name, value) in form_urlencoded::parse(body) {
        match name.as_ref() {
            "login" if login.is_none() => login = Some(value),
            "pass" if pass.is_none() => pass = Some(value),
            _ => {}
        }
    }

    login.as_deref() == Some(username) && pass.as_deref() == Some(password)
}
