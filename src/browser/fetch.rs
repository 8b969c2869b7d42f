//! Synthesis transport over the browser's `fetch()`.

use super::js_message;
use crate::synthesis::{SynthesisRequest, SynthesisResult, SynthesisTransport};
use crate::{Error, Result};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Posts to an endpoint on the page's own origin.
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_err(value: JsValue) -> Error {
    Error::transport(js_message(&value))
}

#[async_trait(?Send)]
impl SynthesisTransport for FetchTransport {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisResult> {
        let body = serde_json::to_string(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::SameOrigin);
        opts.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(transport_err)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(transport_err)?;
        req.headers()
            .set("x-request-id", &uuid::Uuid::new_v4().to_string())
            .map_err(transport_err)?;

        let window = web_sys::window().ok_or_else(|| Error::transport("no window available"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport_err)?;
        let resp: Response = resp_value.dyn_into().map_err(transport_err)?;
        let status = resp.status();

        let buffer = JsFuture::from(resp.array_buffer().map_err(transport_err)?)
            .await
            .map_err(transport_err)?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        tracing::debug!(status, bytes = bytes.len(), "synthesis response received");

        SynthesisResult::from_response(status, &bytes)
    }
}
