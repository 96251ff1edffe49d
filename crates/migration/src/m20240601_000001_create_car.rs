//! Create `car` table.
//!
//! Single vehicle listing table; `id` is generated by the service, never by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_car_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Car::Table).to_owned()).await
    }
}

/// Make and model are unbounded text; no length limit is enforced on either.
fn create_car_table() -> TableCreateStatement {
    Table::create()
        .table(Car::Table)
        .if_not_exists()
        .col(uuid(Car::Id).primary_key())
        .col(text(Car::Make).not_null())
        .col(text(Car::Model).not_null())
        .col(integer(Car::Year).not_null())
        .col(integer(Car::Price).not_null())
        .col(boolean(Car::IsUsed).not_null())
        .col(timestamp_with_time_zone(Car::CreatedAt).not_null())
        .col(timestamp_with_time_zone(Car::ModifiedAt).not_null())
        .to_owned()
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    Make,
    Model,
    Year,
    Price,
    IsUsed,
    CreatedAt,
    ModifiedAt,
}
