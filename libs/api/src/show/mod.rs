use axum::{extract::State, Json};
use repository::Repository;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};

use self::request::CreateShowRequest;
use self::response::{CreateShowResponse, GetShowsResponse, ShowResponse};

/// List all shows with their venue and artist
#[utoipa::path(
    get,
    path = "/shows",
    responses(
        (status = 200, description = "List all shows with their venue and artist", body = GetShowsResponse)
    )
)]
pub async fn get_shows(
    State(repo): State<Repository>,
) -> ApiResponse<Json<GetShowsResponse>> {
    let shows = repo
        .show
        .find_all()
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(GetShowsResponse {
        shows: shows.into_iter().map(ShowResponse::from).collect(),
    }))
}

/// List a new show linking an artist to a venue
#[utoipa::path(
    post,
    path = "/shows/create",
    request_body = CreateShowRequest,
    responses(
        (status = 200, description = "The show was listed", body = CreateShowResponse)
    )
)]
pub async fn create_show(
    State(repo): State<Repository>,
    Json(body): Json<CreateShowRequest>,
) -> ApiResponse<Json<CreateShowResponse>> {
    repo.show
        .create(body.into())
        .await
        .into_response("something went wrong")?;

    Ok(Json(CreateShowResponse {
        success: true,
        message: "Show was successfully listed!".to_string(),
    }))
}
