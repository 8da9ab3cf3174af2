use artist::ArtistRepository;
use migration::Migrator;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use show::ShowRepository;
use venue::VenueRepository;

mod active_models;
pub mod artist;
pub mod show;
pub mod venue;

#[derive(Clone, Debug)]
pub struct Repository {
    pub venue: VenueRepository,
    pub artist: ArtistRepository,
    pub show: ShowRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::InSeaOrmDbErr {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(db_url: &str) -> Response<Repository> {
    let db = init_db(db_url).await?;

    Ok(Repository::new(db))
}

impl Repository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            venue: VenueRepository::new(db.clone()),
            artist: ArtistRepository::new(db.clone()),
            show: ShowRepository::new(db),
        }
    }
}

async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}
