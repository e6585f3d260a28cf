use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};

use contracts::shared::format::format_number;

/// Время в логе показывается по WIB (UTC+7)
const LOG_OFFSET_HOURS: i64 = 7;

/// Одна строка журнала: время | длительность | размер | статус метод путь
fn access_line(
    at: DateTime<Utc>,
    elapsed: Duration,
    size: Option<u64>,
    status: StatusCode,
    method: &Method,
    path: &str,
) -> String {
    // голубой для 2xx, коричневый для остальных
    let color = if status.is_success() && size.is_some() { "36" } else { "33" };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        (at + chrono::Duration::hours(LOG_OFFSET_HOURS)).format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method.as_str(),
        path
    )
}

/// Middleware для логирования HTTP запросов
///
/// Тело ответа буферизуется, чтобы узнать реальный размер.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let (bytes, size) = match to_bytes(body, usize::MAX).await {
        Ok(b) => {
            let size = b.len() as u64;
            (b, Some(size))
        }
        Err(_) => (Default::default(), None),
    };

    println!(
        "{}",
        access_line(Utc::now(), start.elapsed(), size, parts.status, &method, &path)
    );
    if !parts.status.is_success() {
        tracing::warn!("{} {} -> {}", method, path, parts.status.as_u16());
    }

    Response::from_parts(parts, Body::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_contains_grouped_size_and_local_time() {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 1, 2, 3).unwrap();
        let line = access_line(
            at,
            Duration::from_millis(12),
            Some(1_234_567),
            StatusCode::OK,
            &Method::GET,
            "/api/a001/asset",
        );
        assert!(line.contains("08:02:03"));
        assert!(line.contains("1.234.567"));
        assert!(line.contains("200    GET /api/a001/asset"));
        assert!(line.starts_with("\x1b[36m"));
    }

    #[test]
    fn failed_body_is_marked() {
        let line = access_line(
            Utc::now(),
            Duration::ZERO,
            None,
            StatusCode::OK,
            &Method::POST,
            "/x",
        );
        assert!(line.contains("error"));
        assert!(line.starts_with("\x1b[33m"));
    }
}
