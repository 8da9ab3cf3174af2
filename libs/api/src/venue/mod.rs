use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use entity::prelude::*;
use repository::Repository;

pub mod request;
pub mod response;

use crate::request::SearchRequest;
use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiError;

use self::request::VenueRequest;
use self::response::{
    CreateVenueResponse, DeleteVenueResponse, EditVenueResponse,
    GetVenueResponse, GetVenuesResponse, SearchVenuesResponse, VenueResponse,
};

/// List venues grouped by city and state
#[utoipa::path(
    get,
    path = "/venues",
    responses(
        (status = 200, description = "List venues grouped by city and state", body = GetVenuesResponse)
    )
)]
pub async fn get_venues(
    State(repo): State<Repository>,
) -> ApiResponse<Json<GetVenuesResponse>> {
    let areas = repo
        .venue
        .find_grouped_by_area()
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(GetVenuesResponse::from(areas)))
}

/// Search venues by name substring
#[utoipa::path(
    post,
    path = "/venues/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching venues with their count", body = SearchVenuesResponse)
    )
)]
pub async fn search_venues(
    State(repo): State<Repository>,
    Json(body): Json<SearchRequest>,
) -> ApiResponse<Json<SearchVenuesResponse>> {
    let venues = repo
        .venue
        .search_by_name(&body.search_term)
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(SearchVenuesResponse::from(venues)))
}

/// Show a venue with its past and upcoming shows
#[utoipa::path(
    get,
    path = "/venues/:id",
    responses(
        (status = 200, description = "The venue with its shows split into past and upcoming", body = GetVenueResponse),
        (status = 404, description = "No venue has the id")
    ),
    params(
        ("id", description = "venue id"),
    )
)]
pub async fn get_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetVenueResponse>> {
    let venue = repo
        .venue
        .find_by_id(id)
        .await
        .into_response("something went wrong at database")?;

    let Some(venue) = venue else {
        return Err(ApiError::NotFound);
    };

    let (past_shows, upcoming_shows) = repo
        .show
        .find_by_venue(id, Utc::now())
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(GetVenueResponse::new(venue, past_shows, upcoming_shows)))
}

/// List a new venue
#[utoipa::path(
    post,
    path = "/venues/create",
    request_body = VenueRequest,
    responses(
        (status = 200, description = "The venue was listed", body = CreateVenueResponse)
    )
)]
pub async fn create_venue(
    State(repo): State<Repository>,
    Json(body): Json<VenueRequest>,
) -> ApiResponse<Json<CreateVenueResponse>> {
    let venue = repo
        .venue
        .create(body.into())
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(CreateVenueResponse {
        success: true,
        message: format!("Venue {} was successfully listed!", venue.name),
    }))
}

/// Delete a venue and its shows
#[utoipa::path(
    delete,
    path = "/venues/:id",
    responses(
        (status = 200, description = "The venue was deleted", body = DeleteVenueResponse),
        (status = 404, description = "No venue has the id")
    ),
    params(
        ("id", description = "venue id"),
    )
)]
pub async fn delete_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<DeleteVenueResponse>> {
    let venue = repo
        .venue
        .delete(id)
        .await
        .into_response("something went wrong for delete venue")?;

    let Some(venue) = venue else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(DeleteVenueResponse {
        success: true,
        message: format!("Venue {} has been deleted", venue.name),
    }))
}

/// Show the current record backing the edit form
#[utoipa::path(
    get,
    path = "/venues/:id/edit",
    responses(
        (status = 200, description = "The venue as currently stored", body = VenueResponse),
        (status = 404, description = "No venue has the id")
    ),
    params(
        ("id", description = "venue id"),
    )
)]
pub async fn edit_venue(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<VenueResponse>> {
    let venue = repo
        .venue
        .find_by_id(id)
        .await
        .into_response("something went wrong at database")?;

    let Some(venue) = venue else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(VenueResponse::from(venue)))
}

/// Replace a venue's fields
#[utoipa::path(
    post,
    path = "/venues/:id/edit",
    request_body = VenueRequest,
    responses(
        (status = 200, description = "The venue was updated", body = EditVenueResponse)
    ),
    params(
        ("id", description = "venue id"),
    )
)]
pub async fn edit_venue_submission(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Json(body): Json<VenueRequest>,
) -> ApiResponse<Json<EditVenueResponse>> {
    let mut venue = VenueEntity::from(body);
    venue.id = id;

    let venue = repo
        .venue
        .update(venue)
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(EditVenueResponse {
        success: true,
        message: format!("Venue {} was successfully updated!", venue.name),
    }))
}
