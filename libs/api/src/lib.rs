use axum::{routing::get, routing::post, Json, Router};

use repository::Repository;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;

pub mod artist;
mod filters;
pub mod healthz;
pub mod home;
pub mod not_found;
mod request;
mod response;
pub mod show;
pub mod venue;

pub enum ApiError {
    NotFound,
    ServerError(String),
}

pub async fn serve(repository: Repository) -> anyhow::Result<Router> {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            venue::get_venues,
            venue::search_venues,
            venue::get_venue,
            venue::create_venue,
            venue::delete_venue,
            venue::edit_venue,
            venue::edit_venue_submission,
            artist::get_artists,
            artist::search_artists,
            artist::get_artist,
            artist::create_artist,
            artist::delete_artist,
            artist::edit_artist,
            artist::edit_artist_submission,
            show::get_shows,
            show::create_show,
        ),
        components(schemas(
            request::SearchRequest,
            venue::request::VenueRequest,
            venue::response::VenueResponse,
            venue::response::AreaResponse,
            venue::response::GetVenuesResponse,
            venue::response::SearchVenuesResponse,
            venue::response::GetVenueResponse,
            venue::response::VenueShowResponse,
            venue::response::CreateVenueResponse,
            venue::response::EditVenueResponse,
            venue::response::DeleteVenueResponse,
            artist::request::ArtistRequest,
            artist::response::ArtistResponse,
            artist::response::GetArtistsResponse,
            artist::response::SearchArtistsResponse,
            artist::response::GetArtistResponse,
            artist::response::ArtistShowResponse,
            artist::response::CreateArtistResponse,
            artist::response::EditArtistResponse,
            artist::response::DeleteArtistResponse,
            show::request::CreateShowRequest,
            show::response::ShowResponse,
            show::response::GetShowsResponse,
            show::response::CreateShowResponse,
        ))
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let origins = ["http://localhost:3000".parse().unwrap()];

    // venues
    let venue_router = Router::new()
        .route("/", get(venue::get_venues))
        .route("/search", post(venue::search_venues))
        .route("/create", post(venue::create_venue))
        .route(
            "/:id",
            get(venue::get_venue).delete(venue::delete_venue),
        )
        .route(
            "/:id/edit",
            get(venue::edit_venue).post(venue::edit_venue_submission),
        )
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    // artists
    let artist_router = Router::new()
        .route("/", get(artist::get_artists))
        .route("/search", post(artist::search_artists))
        .route("/create", post(artist::create_artist))
        .route(
            "/:id",
            get(artist::get_artist).delete(artist::delete_artist),
        )
        .route(
            "/:id/edit",
            get(artist::edit_artist).post(artist::edit_artist_submission),
        )
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    // shows
    let show_router = Router::new()
        .route("/", get(show::get_shows))
        .route("/create", post(show::create_show))
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    let router = Router::new()
        .route("/", get(home::get_home))
        .route("/healthz", get(healthz::get_health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/venues", venue_router)
        .nest("/artists", artist_router)
        .nest("/shows", show_router)
        .layer(CorsLayer::new().allow_origin(origins))
        .fallback(not_found::get_404);

    Ok(router)
}
