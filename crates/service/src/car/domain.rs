use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vehicle listing.
///
/// `id`, `created_at` and `modified_at` are owned by `CarService`; values supplied by callers
/// for those fields are ignored on create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: i32,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<models::car::Model> for Car {
    fn from(m: models::car::Model) -> Self {
        Self {
            id: m.id,
            make: m.make,
            model: m.model,
            year: m.year,
            price: m.price,
            is_used: m.is_used,
            created_at: m.created_at.with_timezone(&Utc),
            modified_at: m.modified_at.with_timezone(&Utc),
        }
    }
}

impl From<Car> for models::car::Model {
    fn from(c: Car) -> Self {
        Self {
            id: c.id,
            make: c.make,
            model: c.model,
            year: c.year,
            price: c.price,
            is_used: c.is_used,
            created_at: c.created_at.into(),
            modified_at: c.modified_at.into(),
        }
    }
}
