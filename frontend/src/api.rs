//! Thin client for the site's REST API.
//!
//! Only the calls the client components need are modeled: the company profile
//! and its banners, news articles (list, read, save, publish, delete) and image
//! upload. Admin calls carry the bearer token that the
//! login page left in local storage; token handling is a pass-through.

use common::model::company::{CompanyInfo, CompanyResponse};
use common::model::news::News;
use common::model::upload::UploadResponse;
use common::requests::{CompanyUpdate, NewsDraft, PublishUpdate};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_storage::{LocalStorage, Storage};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config::{API_ORIGIN, API_URL, TOKEN_STORAGE_KEY};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Browser(format!("{value:?}"))
    }
}

fn endpoint(path: &str) -> String {
    format!("{API_URL}{path}")
}

fn bearer_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match bearer_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => {
            tracing::warn!("no admin token in storage, sending request unauthenticated");
            builder
        }
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

/// `GET /company/`, merged over the built-in defaults.
pub async fn fetch_company() -> Result<CompanyInfo, ApiError> {
    let response = ensure_ok(Request::get(&endpoint("/company/")).send().await?).await?;
    let remote = response.json::<CompanyResponse>().await?;
    Ok(CompanyInfo::merged(remote))
}

/// `PUT /company/` with only the changed fields, merged like a fetch.
pub async fn update_company(update: &CompanyUpdate) -> Result<CompanyInfo, ApiError> {
    let request = authorized(Request::put(&endpoint("/company/"))).json(update)?;
    let response = ensure_ok(request.send().await?).await?;
    let remote = response.json::<CompanyResponse>().await?;
    Ok(CompanyInfo::merged(remote))
}

/// `GET /news/`, newest first. `published_only` hides drafts for the public
/// list; the admin list asks for everything.
pub async fn fetch_news_list(published_only: bool) -> Result<Vec<News>, ApiError> {
    let mut url = endpoint("/news/?skip=0&limit=100");
    if published_only {
        url.push_str("&published=true");
    }
    let response = ensure_ok(Request::get(&url).send().await?).await?;
    Ok(response.json::<Vec<News>>().await?)
}

/// `GET /news/{id}`.
pub async fn fetch_news(id: i64) -> Result<News, ApiError> {
    let response = ensure_ok(Request::get(&endpoint(&format!("/news/{id}"))).send().await?).await?;
    Ok(response.json::<News>().await?)
}

/// Creates the article when `id` is `None`, updates it otherwise.
pub async fn save_news(id: Option<i64>, draft: &NewsDraft) -> Result<News, ApiError> {
    let builder = match id {
        Some(id) => Request::put(&endpoint(&format!("/news/{id}"))),
        None => Request::post(&endpoint("/news/")),
    };
    let response = ensure_ok(authorized(builder).json(draft)?.send().await?).await?;
    Ok(response.json::<News>().await?)
}

/// `PUT /news/{id}` with only the visibility flag.
pub async fn set_published(id: i64, is_published: bool) -> Result<News, ApiError> {
    let request = authorized(Request::put(&endpoint(&format!("/news/{id}"))))
        .json(&PublishUpdate { is_published })?;
    let response = ensure_ok(request.send().await?).await?;
    Ok(response.json::<News>().await?)
}

/// `DELETE /news/{id}`.
pub async fn delete_news(id: i64) -> Result<(), ApiError> {
    let request = authorized(Request::delete(&endpoint(&format!("/news/{id}"))));
    ensure_ok(request.send().await?).await?;
    Ok(())
}

/// `POST /upload/image`. Returns the absolute url of the stored image.
pub async fn upload_image(file: web_sys::File) -> Result<String, ApiError> {
    let form = FormData::new()?;
    form.append_with_blob("file", &file)?;

    let request = authorized(Request::post(&endpoint("/upload/image"))).body(form)?;
    let response = ensure_ok(request.send().await?).await?;
    let uploaded = response.json::<UploadResponse>().await?;
    Ok(uploaded.absolute_url(API_ORIGIN))
}
