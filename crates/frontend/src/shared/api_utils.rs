//! API utilities for frontend-backend communication
//!
//! Базовый адрес backend-а и тонкие обертки над `gloo_net` для JSON.
//! Ошибки возвращаются строкой, готовой к показу пользователю.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Базовый адрес API: текущий хост, порт backend-а 3000
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Полный URL для пути вида "/api/..."
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(describe_failure(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match (status, body.trim()) {
        (401, _) => "Sesi berakhir, silakan masuk kembali".to_string(),
        (403, _) => "Akses ditolak untuk peran ini".to_string(),
        (_, "") => format!("HTTP {}", status),
        (_, text) => format!("HTTP {}: {}", status, text),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)), token)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// GET, где 404 означает "нет такой записи", а не ошибку
pub async fn get_optional<T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
) -> Result<Option<T>, String> {
    let response = authorized(Request::get(&api_url(path)), token)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, String> {
    let response = authorized(Request::post(&api_url(path)), token)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, String> {
    let response = authorized(Request::put(&api_url(path)), token)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// POST без тела и без ответа (logout)
pub async fn post_empty(path: &str, token: Option<&str>) -> Result<(), String> {
    let response = authorized(Request::post(&api_url(path)), token)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(describe_failure(response).await);
    }
    Ok(())
}
