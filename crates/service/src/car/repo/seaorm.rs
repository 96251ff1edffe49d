use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::car::domain::Car;
use crate::car::repository::CarRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository; each call checks a connection out of the pool for its own unit of work.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCarRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn insert(&self, car: Car) -> Result<Car, ServiceError> {
        let stored = models::car::insert(&self.db, car.into()).await?;
        Ok(stored.into())
    }

    async fn find_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError> {
        let found = models::car::find_by_key(&self.db, id).await?;
        Ok(found.map(Car::from))
    }

    async fn update(&self, car: Car) -> Result<Option<Car>, ServiceError> {
        let updated = models::car::update(&self.db, car.into()).await?;
        Ok(updated.map(Car::from))
    }

    async fn delete_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError> {
        let removed = models::car::delete_by_key(&self.db, id).await?;
        Ok(removed.map(Car::from))
    }
}
