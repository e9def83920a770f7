//! HTTP request gateway over the browser fetch API. One `Gateway` instance is
//! created at startup and cloned into every page; it owns the base address
//! and the current basic-auth credentials, so requests issued anywhere carry
//! the same authorization until it is explicitly replaced or cleared.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use serde::de::DeserializeOwned;
use tracker_core::error::RequestError;
use tracker_core::incident::{Incident, IncidentDraft};
use tracker_core::list::ListQuery;
use tracker_core::session::Credentials;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response, UrlSearchParams};

/// Build-time deployment switch: set `TRACKER_API_ORIGIN` to an absolute
/// origin (e.g. `http://localhost:8000`) when the backend runs elsewhere
/// during development, or leave it unset to issue same-origin relative
/// requests behind a production proxy.
pub const API_ORIGIN: Option<&str> = option_env!("TRACKER_API_ORIGIN");

#[derive(Clone)]
pub struct Gateway {
    base: String,
    credentials: Rc<RefCell<Option<Credentials>>>,
}

impl Gateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            credentials: Rc::new(RefCell::new(None)),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(API_ORIGIN.unwrap_or(""))
    }

    pub fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.borrow_mut() = Some(credentials);
    }

    pub fn clear_credentials(&self) {
        *self.credentials.borrow_mut() = None;
    }

    fn auth_header(&self) -> Result<Option<String>, RequestError> {
        let Some(credentials) = self.credentials.borrow().clone() else {
            return Ok(None);
        };
        let token = window()?
            .btoa(&format!(
                "{}:{}",
                credentials.username, credentials.password
            ))
            .map_err(js_error)?;
        Ok(Some(format!("Basic {token}")))
    }

    /// Issues one request and returns the response when it is 2xx; any other
    /// status becomes a `RequestError` carrying the status and body. No retry
    /// and no timeout; callers sequence their own follow-ups.
    async fn send(
        &self,
        method: &str,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<String>,
    ) -> Result<Response, RequestError> {
        let mut url = format!("{}{}", self.base, path);
        if !query.is_empty() {
            let params = UrlSearchParams::new().map_err(js_error)?;
            for (key, value) in query {
                params.append(key, value);
            }
            url = format!("{url}?{}", String::from(params.to_string()));
        }

        let headers = Headers::new().map_err(js_error)?;
        if let Some(auth) = self.auth_header()? {
            headers.set("Authorization", &auth).map_err(js_error)?;
        }
        if body.is_some() {
            headers
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let init = RequestInit::new();
        init.set_method(method);
        init.set_headers(&headers);
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        let response = JsFuture::from(window()?.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| RequestError::network("fetch did not return a Response"))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|value| value.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Err(RequestError::http(status, body))
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, RequestError> {
        let promise: Promise = response.json().map_err(js_error)?;
        let value = JsFuture::from(promise).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| RequestError::network(e.to_string()))
    }
}

/// Verifies the credentials currently held by the gateway. The response body
/// is ignored; any 2xx means the pair is valid.
pub async fn login(gateway: &Gateway) -> Result<(), RequestError> {
    gateway.send("GET", "/auth/login", &[], None).await.map(drop)
}

pub async fn list_incidents(
    gateway: &Gateway,
    query: &ListQuery,
) -> Result<Vec<Incident>, RequestError> {
    let response = gateway
        .send("GET", "/incidents/", &query.params(), None)
        .await?;
    Gateway::decode(response).await
}

pub async fn get_incident(gateway: &Gateway, id: i64) -> Result<Incident, RequestError> {
    let response = gateway
        .send("GET", &format!("/incidents/{id}"), &[], None)
        .await?;
    Gateway::decode(response).await
}

pub async fn create_incident(
    gateway: &Gateway,
    draft: &IncidentDraft,
) -> Result<Incident, RequestError> {
    let body = encode(draft)?;
    let response = gateway.send("POST", "/incidents/", &[], Some(body)).await?;
    Gateway::decode(response).await
}

pub async fn update_incident(
    gateway: &Gateway,
    id: i64,
    draft: &IncidentDraft,
) -> Result<Incident, RequestError> {
    let body = encode(draft)?;
    let response = gateway
        .send("PUT", &format!("/incidents/{id}"), &[], Some(body))
        .await?;
    Gateway::decode(response).await
}

pub async fn delete_incident(gateway: &Gateway, id: i64) -> Result<(), RequestError> {
    gateway
        .send("DELETE", &format!("/incidents/{id}"), &[], None)
        .await
        .map(drop)
}

fn encode(draft: &IncidentDraft) -> Result<String, RequestError> {
    serde_json::to_string(draft).map_err(|e| RequestError::network(e.to_string()))
}

fn window() -> Result<web_sys::Window, RequestError> {
    web_sys::window().ok_or_else(|| RequestError::network("window not available"))
}

fn js_error(err: JsValue) -> RequestError {
    RequestError::network(format!("{err:?}"))
}
