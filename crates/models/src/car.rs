//! `car` entity and the record-store primitives over it.
//!
//! The primitives never assign fields: ids and timestamps arrive fully populated.
use sea_orm::{entity::prelude::*, ActiveValue::{NotSet, Unchanged}, ConnectionTrait, DbErr, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: i32,
    pub is_used: bool,
    pub created_at: DateTimeWithTimeZone,
    pub modified_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a fully populated row and return it as stored.
pub async fn insert<C: ConnectionTrait>(db: &C, car: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(car.id),
        make: Set(car.make),
        model: Set(car.model),
        year: Set(car.year),
        price: Set(car.price),
        is_used: Set(car.is_used),
        created_at: Set(car.created_at),
        modified_at: Set(car.modified_at),
    };
    let stored = am.insert(db).await?;
    debug!(id = %stored.id, "car_row_inserted");
    Ok(stored)
}

pub async fn find_by_key<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Overwrite the mutable columns and `modified_at` of an existing row.
///
/// `created_at` is never written. Returns `None` when no row has `car.id`.
pub async fn update<C: ConnectionTrait>(db: &C, car: Model) -> Result<Option<Model>, ModelError> {
    let am = ActiveModel {
        id: Unchanged(car.id),
        make: Set(car.make),
        model: Set(car.model),
        year: Set(car.year),
        price: Set(car.price),
        is_used: Set(car.is_used),
        created_at: NotSet,
        modified_at: Set(car.modified_at),
    };
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remove a row and hand back its last value. Lookup and delete share one transaction.
pub async fn delete_by_key<C: TransactionTrait>(db: &C, id: Uuid) -> Result<Option<Model>, ModelError> {
    let txn = db.begin().await?;
    let Some(found) = Entity::find_by_id(id).one(&txn).await? else {
        txn.rollback().await?;
        return Ok(None);
    };
    let res = Entity::delete_by_id(id).exec(&txn).await?;
    if res.rows_affected == 0 {
        txn.rollback().await?;
        return Ok(None);
    }
    txn.commit().await?;
    debug!(id = %id, "car_row_deleted");
    Ok(Some(found))
}
