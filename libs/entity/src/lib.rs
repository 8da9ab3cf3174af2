pub mod artist;
pub mod show;
pub mod venue;

pub mod prelude {
    pub use crate::artist::Artist as ArtistEntity;
    pub use crate::show::Show as ShowEntity;
    pub use crate::venue::Venue as VenueEntity;
}
