use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use contracts::shared::number_format::format_number;

const CYAN: &str = "36";
const BROWN: &str = "33";

/// Одна строка журнала запроса
fn log_line(color: &str, millis: u128, size: &str, status: StatusCode, method: &str, path: &str) {
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        millis,
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль время, длительность, размер ответа,
/// статус, метод и путь. 200 голубым, остальное коричневым.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Размер ответа узнаём только прочитав тело
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(_) => {
            log_line(BROWN, start.elapsed().as_millis(), "error", parts.status, &method, &path);
            return Response::from_parts(parts, Body::default());
        }
    };

    let color = if parts.status == StatusCode::OK { CYAN } else { BROWN };
    log_line(
        color,
        start.elapsed().as_millis(),
        &format_number(bytes.len() as i64),
        parts.status,
        &method,
        &path,
    );

    Response::from_parts(parts, Body::from(bytes))
}
