pub use sea_orm_migration::prelude::*;

mod m20240610_091800_create_venue_table;
mod m20240610_091900_create_artist_table;
mod m20240610_092000_create_show_table;
mod m20240622_110500_create_index_at_show;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240610_091800_create_venue_table::Migration),
            Box::new(m20240610_091900_create_artist_table::Migration),
            Box::new(m20240610_092000_create_show_table::Migration),
            Box::new(m20240622_110500_create_index_at_show::Migration),
        ]
    }
}
