//! Document Chat - Model (browser transport)
//!
//! Upload goes through `XMLHttpRequest` because fetch reports no upload progress;
//! chat and list use gloo-net.

use contracts::domain::a001_document_chat::request::{
    UPLOAD_FIELD_FILE, UPLOAD_FIELD_SESSION_ID,
};
use contracts::domain::a001_document_chat::{
    ChatRequest, ChatResponse, FileDescriptor, UploadFields, UploadResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, ProgressEvent, XmlHttpRequest};

use super::super::transport::{
    list_path, ApiError, FileBlob, ProgressFn, Transport, CHAT_PATH, UPLOAD_PATH,
};
use crate::shared::api_utils::api_url;

impl FileBlob for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> u64 {
        Blob::size(self) as u64
    }
}

fn js_err(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{e:?}"))
}

/// `(loaded, total)` of an upload progress event, or `None` when the browser
/// cannot size the body.
fn progress_tick(length_computable: bool, loaded: f64, total: f64) -> Option<(u64, u64)> {
    if !length_computable {
        log::debug!("upload tick without length: {} bytes sent", loaded);
        return None;
    }
    Some((loaded as u64, total as u64))
}

fn log_response(method: &str, url: &str, status: u16, started: f64) {
    let elapsed = js_sys::Date::now() - started;
    if (200..300).contains(&status) {
        log::debug!("← {} {} {} ({:.0}ms)", status, method, url, elapsed);
    } else {
        log::warn!("← {} {} {} ({:.0}ms)", status, method, url, elapsed);
    }
}

/// Map a finished response to the typed body or an [`ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Server {
            status,
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("{e}")))
}

/// `Transport` over the browser's networking, against [`api_url`]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type File = File;

    async fn upload(
        &self,
        file: &File,
        fields: UploadFields,
        on_progress: ProgressFn,
    ) -> Result<UploadResponse, ApiError> {
        let url = api_url(UPLOAD_PATH);
        let started = js_sys::Date::now();
        log::debug!(
            "→ POST {} [file={}, session_id={}]",
            url,
            File::name(file),
            fields.session_id
        );

        let form_data = FormData::new().map_err(js_err)?;
        form_data
            .append_with_blob(UPLOAD_FIELD_FILE, file)
            .map_err(js_err)?;
        form_data
            .append_with_str(UPLOAD_FIELD_SESSION_ID, &fields.session_id)
            .map_err(js_err)?;

        let xhr = XmlHttpRequest::new().map_err(js_err)?;
        xhr.open("POST", &url).map_err(js_err)?;

        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
            let tick = progress_tick(ev.length_computable(), ev.loaded(), ev.total());
            if let Some((loaded, total)) = tick {
                on_progress(loaded, total);
            }
        });
        xhr.upload()
            .map_err(js_err)?
            .set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let settled = js_sys::Promise::new(&mut |resolve, reject| {
            xhr.set_onload(Some(&resolve));
            xhr.set_onerror(Some(&reject));
            xhr.set_onabort(Some(&reject));
        });
        xhr.send_with_opt_form_data(Some(&form_data))
            .map_err(js_err)?;

        let done = JsFuture::from(settled).await;
        drop(progress);
        if done.is_err() {
            log::error!("← POST {} no response", url);
            return Err(ApiError::Transport(format!("POST {} got no response", url)));
        }

        let status = xhr.status().map_err(js_err)?;
        let body = xhr.response_text().map_err(js_err)?.unwrap_or_default();
        log_response("POST", &url, status, started);
        decode(status, &body)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = api_url(CHAT_PATH);
        let started = js_sys::Date::now();
        log::debug!("→ POST {} [{} messages]", url, request.messages.len());

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
        log_response("POST", &url, status, started);
        decode(status, &body)
    }

    async fn list_files(&self, session_id: &str) -> Result<Vec<FileDescriptor>, ApiError> {
        let url = api_url(&list_path(session_id));
        let started = js_sys::Date::now();
        log::debug!("→ GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
        log_response("GET", &url, status, started);
        decode(status, &body)
    }
}
