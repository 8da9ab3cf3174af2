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

use self::request::ArtistRequest;
use self::response::{
    ArtistResponse, CreateArtistResponse, DeleteArtistResponse,
    EditArtistResponse, GetArtistResponse, GetArtistsResponse,
    SearchArtistsResponse,
};

/// List all artists
#[utoipa::path(
    get,
    path = "/artists",
    responses(
        (status = 200, description = "List all artists", body = GetArtistsResponse)
    )
)]
pub async fn get_artists(
    State(repo): State<Repository>,
) -> ApiResponse<Json<GetArtistsResponse>> {
    let artists = repo
        .artist
        .find_all()
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(GetArtistsResponse {
        artists: artists.into_iter().map(ArtistResponse::from).collect(),
    }))
}

/// Search artists by name substring
#[utoipa::path(
    post,
    path = "/artists/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching artists with their count", body = SearchArtistsResponse)
    )
)]
pub async fn search_artists(
    State(repo): State<Repository>,
    Json(body): Json<SearchRequest>,
) -> ApiResponse<Json<SearchArtistsResponse>> {
    let artists = repo
        .artist
        .search_by_name(&body.search_term)
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(SearchArtistsResponse::from(artists)))
}

/// Show an artist with its past and upcoming shows
#[utoipa::path(
    get,
    path = "/artists/:id",
    responses(
        (status = 200, description = "The artist with its shows split into past and upcoming", body = GetArtistResponse),
        (status = 404, description = "No artist has the id")
    ),
    params(
        ("id", description = "artist id"),
    )
)]
pub async fn get_artist(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<GetArtistResponse>> {
    let artist = repo
        .artist
        .find_by_id(id)
        .await
        .into_response("something went wrong at database")?;

    let Some(artist) = artist else {
        return Err(ApiError::NotFound);
    };

    let (past_shows, upcoming_shows) = repo
        .show
        .find_by_artist(id, Utc::now())
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(GetArtistResponse::new(
        artist,
        past_shows,
        upcoming_shows,
    )))
}

/// List a new artist
#[utoipa::path(
    post,
    path = "/artists/create",
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "The artist was listed", body = CreateArtistResponse)
    )
)]
pub async fn create_artist(
    State(repo): State<Repository>,
    Json(body): Json<ArtistRequest>,
) -> ApiResponse<Json<CreateArtistResponse>> {
    let artist = repo
        .artist
        .create(body.into())
        .await
        .into_response("something went wrong while adding artist")?;

    Ok(Json(CreateArtistResponse {
        success: true,
        message: format!("Artist {} was successfully listed!", artist.name),
    }))
}

/// Delete an artist and its shows
#[utoipa::path(
    delete,
    path = "/artists/:id",
    responses(
        (status = 200, description = "The artist was deleted", body = DeleteArtistResponse),
        (status = 404, description = "No artist has the id")
    ),
    params(
        ("id", description = "artist id"),
    )
)]
pub async fn delete_artist(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<DeleteArtistResponse>> {
    let artist = repo
        .artist
        .delete(id)
        .await
        .into_response("something went wrong for delete artist")?;

    let Some(artist) = artist else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(DeleteArtistResponse {
        success: true,
        message: format!("Artist {} has been deleted", artist.name),
    }))
}

/// Show the current record backing the edit form
#[utoipa::path(
    get,
    path = "/artists/:id/edit",
    responses(
        (status = 200, description = "The artist as currently stored", body = ArtistResponse),
        (status = 404, description = "No artist has the id")
    ),
    params(
        ("id", description = "artist id"),
    )
)]
pub async fn edit_artist(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<ArtistResponse>> {
    let artist = repo
        .artist
        .find_by_id(id)
        .await
        .into_response("something went wrong at database")?;

    let Some(artist) = artist else {
        return Err(ApiError::NotFound);
    };

    Ok(Json(ArtistResponse::from(artist)))
}

/// Replace an artist's fields
#[utoipa::path(
    post,
    path = "/artists/:id/edit",
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "The artist was updated", body = EditArtistResponse)
    ),
    params(
        ("id", description = "artist id"),
    )
)]
pub async fn edit_artist_submission(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Json(body): Json<ArtistRequest>,
) -> ApiResponse<Json<EditArtistResponse>> {
    let mut artist = ArtistEntity::from(body);
    artist.id = id;

    let artist = repo
        .artist
        .update(artist)
        .await
        .into_response("something went wrong at database")?;

    Ok(Json(EditArtistResponse {
        success: true,
        message: format!("Artist {} was successfully updated!", artist.name),
    }))
}
