//! HTTP API client for the VideoBot backend
//!
//! `AdminApi` is the seam the controller talks to; `HttpApi` implements it
//! with `gloo-net` against the Flask backend.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::error::{ApiClientError, ApiResult};
use crate::types::*;

/// Multipart payload of the add-product form.
#[derive(Debug, Clone, Default)]
pub struct ProductUpload {
    pub form: ProductForm,
    pub file: Option<File>,
    pub thumbnail: Option<File>,
}

impl ProductUpload {
    pub fn new(form: ProductForm) -> Self {
        Self {
            form,
            file: None,
            thumbnail: None,
        }
    }
}

/// Endpoints the panel consumes.
///
/// Implementations return the parsed envelope; deciding what a non-success
/// status means is left to the controller.
#[async_trait(?Send)]
pub trait AdminApi {
    async fn stats(&self) -> ApiResult<Envelope<StatsBody>>;
    async fn products(&self) -> ApiResult<Envelope<ProductsBody>>;
    async fn create_product(&self, upload: &ProductUpload) -> ApiResult<Envelope<Ack>>;
    async fn update_product(&self, id: i64, patch: &ProductPatch) -> ApiResult<Envelope<Ack>>;
    async fn delete_product(&self, id: i64) -> ApiResult<Envelope<Ack>>;
    async fn delivery_stats(&self, days: u32) -> ApiResult<Envelope<DeliveryBody>>;
    async fn cleanup_expired(&self) -> ApiResult<Envelope<Ack>>;
    async fn send_expiry_warnings(&self) -> ApiResult<Envelope<Ack>>;
}

/// `fetch`-based client.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn build_request(&self, method: &str, path: &str) -> RequestBuilder {
        let url = self.url(path);
        match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => Request::get(&url),
        }
    }
}

/// Parse an envelope out of any response that carries one.
///
/// The backend answers validation failures with `400 {"error": ...}`, so a
/// non-2xx status is only an `Http` error when the body is not an envelope.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
    let status = response.status();
    let text = response.text().await?;
    decode_envelope(status, &text)
}

fn decode_envelope<T: DeserializeOwned>(status: u16, text: &str) -> ApiResult<Envelope<T>> {
    match serde_json::from_str::<Envelope<T>>(text) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(ApiClientError::Http {
            status,
            message: if text.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                text.to_string()
            },
        }),
        Err(e) => Err(e.into()),
    }
}

fn product_form_data(upload: &ProductUpload) -> ApiResult<FormData> {
    let js = |e: wasm_bindgen::JsValue| ApiClientError::Invalid(format!("{e:?}"));
    let form_data = FormData::new().map_err(js)?;
    form_data.append_with_str("name", &upload.form.name).map_err(js)?;
    form_data
        .append_with_str("price_stars", &upload.form.price_stars)
        .map_err(js)?;
    form_data
        .append_with_str("description", &upload.form.description)
        .map_err(js)?;
    if let Some(file) = &upload.file {
        form_data.append_with_blob("file", file).map_err(js)?;
    }
    if let Some(thumbnail) = &upload.thumbnail {
        form_data.append_with_blob("thumbnail", thumbnail).map_err(js)?;
    }
    Ok(form_data)
}

#[async_trait(?Send)]
impl AdminApi for HttpApi {
    async fn stats(&self) -> ApiResult<Envelope<StatsBody>> {
        let response = self.build_request("GET", "/stats").send().await?;
        read_envelope(response).await
    }

    async fn products(&self) -> ApiResult<Envelope<ProductsBody>> {
        let response = self.build_request("GET", "/products").send().await?;
        read_envelope(response).await
    }

    async fn create_product(&self, upload: &ProductUpload) -> ApiResult<Envelope<Ack>> {
        // No Content-Type header: the browser sets the multipart boundary.
        let request = self
            .build_request("POST", "/products")
            .body(product_form_data(upload)?)?;
        read_envelope(request.send().await?).await
    }

    async fn update_product(&self, id: i64, patch: &ProductPatch) -> ApiResult<Envelope<Ack>> {
        let request = self
            .build_request("PUT", &format!("/products/{id}"))
            .json(patch)?;
        read_envelope(request.send().await?).await
    }

    async fn delete_product(&self, id: i64) -> ApiResult<Envelope<Ack>> {
        let response = self
            .build_request("DELETE", &format!("/products/{id}"))
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn delivery_stats(&self, days: u32) -> ApiResult<Envelope<DeliveryBody>> {
        let response = self
            .build_request("GET", "/delivery/stats")
            .query([("days", days.to_string())])
            .send()
            .await?;
        read_envelope(response).await
    }

    async fn cleanup_expired(&self) -> ApiResult<Envelope<Ack>> {
        let response = self.build_request("POST", "/delivery/cleanup").send().await?;
        read_envelope(response).await
    }

    async fn send_expiry_warnings(&self) -> ApiResult<Envelope<Ack>> {
        let response = self.build_request("POST", "/delivery/warnings").send().await?;
        read_envelope(response).await
    }
}
