use crate::models::{NewNote, Note, NoteId};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

const NOTES_PATH: &str = "/api/notes";

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("Could not reach the note store: {0}")]
    Transport(String),

    #[error("Note store answered {status}: {body}")]
    Status { status: u16, body: String },

    /// The response arrived but its payload did not have the expected shape.
    #[error("Note store sent an unreadable response: {0}")]
    Validation(String),
}

impl ApiError {
    fn transport(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }

    fn validation(e: impl std::fmt::Display) -> Self {
        Self::Validation(e.to_string())
    }

    /// Worth one automatic retry: network trouble or a 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Validation(_) => false,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub log_level: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let window = web_sys::window();

        // Same-origin by default: the page and `/api/notes` are usually served together.
        let default_api_url = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();

        let env = window
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let read = |keys: &[&str]| -> Option<String> {
            let env = env.as_ref()?;
            keys.iter().find_map(|k| {
                js_sys::Reflect::get(env, &(*k).into())
                    .ok()
                    .and_then(|v| v.as_string())
            })
        };

        // Accept both `API_URL` and `api_url` spellings.
        let api_url = read(&["API_URL", "api_url"]).unwrap_or(default_api_url);
        let log_level = read(&["LOG_LEVEL", "log_level"]).unwrap_or_else(|| "info".to_string());

        Self {
            api_url: normalize_base_url(&api_url),
            log_level,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// The remote note collection.
///
/// Implemented over HTTP by [`ApiClient`]; tests substitute an in-memory store.
#[allow(async_fn_in_trait)]
pub(crate) trait NoteStore {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn save_note(&self, note: &NewNote) -> ApiResult<Note>;
    async fn delete_note(&self, id: &NoteId) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: normalize_base_url(&base_url),
        }
    }

    pub fn from_env(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub(crate) fn note_url(&self, id: &NoteId) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            NOTES_PATH,
            urlencoding::encode(id.as_str())
        )
    }

    pub(crate) fn notes_url(&self) -> String {
        format!("{}{}", self.base_url, NOTES_PATH)
    }

    /// Send a request and return the raw body of a 2xx response.
    async fn send(
        &self,
        method: Method,
        url: String,
        body: Option<&impl Serialize>,
    ) -> ApiResult<String> {
        let client = reqwest::Client::new();
        debug!(%method, %url, "note store request");

        let mut req = client
            .request(method, url)
            .header("Content-Type", "application/json");
        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::transport)?;
        let status = res.status();
        let text = res.text().await.map_err(ApiError::transport)?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            })
        }
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let text = self.send(method, url, body).await?;
        parse_body(&text)
    }
}

pub(crate) fn parse_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(ApiError::validation)
}

impl NoteStore for ApiClient {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let notes: Vec<Note> = self
            .request_json(Method::GET, self.notes_url(), None::<&()>)
            .await?;
        info!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    async fn save_note(&self, note: &NewNote) -> ApiResult<Note> {
        let created: Note = self
            .request_json(Method::POST, self.notes_url(), Some(note))
            .await?;
        info!(id = %created.id, "saved note");
        Ok(created)
    }

    async fn delete_note(&self, id: &NoteId) -> ApiResult<()> {
        // Response body is not part of the contract.
        self.send(Method::DELETE, self.note_url(id), None::<&()>)
            .await?;
        info!(%id, "deleted note");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:3001/".to_string());
        assert_eq!(client.base_url, "http://localhost:3001");
        assert_eq!(client.notes_url(), "http://localhost:3001/api/notes");
    }

    #[test]
    fn test_note_url_encodes_id() {
        let client = ApiClient::new("http://localhost:3001".to_string());
        assert_eq!(
            client.note_url(&NoteId::new("a b/c")),
            "http://localhost:3001/api/notes/a%20b%2Fc"
        );
        assert_eq!(
            client.note_url(&NoteId::new("17")),
            "http://localhost:3001/api/notes/17"
        );
    }

    #[test]
    fn test_list_response_contract_deserialize() {
        let json = r#"[
            {"id": "a1", "title": "Groceries", "text": "milk"},
            {"id": 2, "title": "Todo", "text": "write tests"}
        ]"#;
        let notes: Vec<Note> = parse_body(json).expect("list response should parse");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, NoteId::new("a1"));
        assert_eq!(notes[1].id, NoteId::new("2"));
    }

    #[test]
    fn test_malformed_payload_is_validation_error() {
        let err = parse_body::<Vec<Note>>(r#"{"notes": []}"#).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Transport("offline".into()).is_transient());
        assert!(ApiError::Status {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(!ApiError::Status {
            status: 404,
            body: "missing".into()
        }
        .is_transient());
    }

    #[test]
    fn test_error_display_includes_status() {
        let e = ApiError::Status {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(e.to_string(), "Note store answered 500: boom");
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_env_config_defaults_to_page_origin() {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let config = EnvConfig::new();
        assert_eq!(config.api_url, normalize_base_url(&origin));
        assert_eq!(config.log_level, "info");
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_window_env() {
        let window = web_sys::window().expect("browser window");
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://notes.test/".into())
            .expect("set API_URL");
        js_sys::Reflect::set(&window, &"ENV".into(), &env).expect("set ENV");

        let config = EnvConfig::new();
        assert_eq!(config.api_url, "http://notes.test");

        js_sys::Reflect::delete_property(&window, &"ENV".into()).expect("cleanup ENV");
    }
}
