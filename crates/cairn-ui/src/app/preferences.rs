//! Persistence and environment helpers for the app shell.

use crate::core::auth::{SessionState, SessionUser};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const LOCALE_KEY: &str = "cairn.locale";
pub(crate) const API_BASE_KEY: &str = "cairn.api_base";
pub(crate) const SESSION_URN_KEY: &str = "cairn.session.urn";
pub(crate) const SESSION_NAME_KEY: &str = "cairn.session.name";
pub(crate) const SESSION_TOKEN_KEY: &str = "cairn.session.token";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    LocalStorage::set(LOCALE_KEY, locale.code()).ok();
}

/// Session identity seeded by the SSO gateway into LocalStorage.
pub(crate) fn load_session() -> SessionState {
    let urn = LocalStorage::get::<String>(SESSION_URN_KEY).unwrap_or_default();
    if urn.trim().is_empty() {
        return SessionState::Anonymous;
    }
    let display_name = LocalStorage::get::<String>(SESSION_NAME_KEY).unwrap_or_else(|_| urn.clone());
    SessionState::SignedIn(SessionUser { urn, display_name })
}

pub(crate) fn load_session_token() -> Option<String> {
    let token = LocalStorage::get::<String>(SESSION_TOKEN_KEY).ok()?;
    if token.trim().is_empty() { None } else { Some(token) }
}

/// API origin: explicit override first, then same-origin with the dev-server
/// port mapped onto the API port.
pub(crate) fn api_base_url() -> String {
    if let Ok(base) = LocalStorage::get::<String>(API_BASE_KEY) {
        if !base.trim().is_empty() {
            return base.trim_end_matches('/').to_string();
        }
    }
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070".to_string()),
            other => Some(other.to_string()),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(&port);
        }
        base
    } else {
        "http://localhost:7070".to_string()
    }
}
