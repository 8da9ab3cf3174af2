use axum::http::StatusCode;

pub(super) async fn get_home() -> StatusCode {
    StatusCode::OK
}
