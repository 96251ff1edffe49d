use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::Car;
use super::repository::CarRepository;
use crate::errors::ServiceError;

/// Car business service independent of the storage engine.
///
/// Sole owner of identifier and timestamp assignment. Concurrent calls on the same id are
/// ordered by the store alone.
pub struct CarService<R: CarRepository> {
    repo: Arc<R>,
}

impl<R: CarRepository> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new car under a freshly generated id.
    ///
    /// Any `id`, `created_at` or `modified_at` on the input is discarded.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, Car, repository::mock::InMemoryCarRepository};
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(InMemoryCarRepository::default()));
    /// let car = Car { make: "TestBMW".into(), model: "X5".into(), year: 2022, price: 50000, ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(car)).unwrap();
    /// assert!(!created.id.is_nil());
    /// assert_eq!(created.created_at, created.modified_at);
    /// ```
    #[instrument(skip(self, car), fields(make = %car.make, model = %car.model))]
    pub async fn create(&self, car: Car) -> Result<Car, ServiceError> {
        let now = Utc::now();
        let new_car = Car { id: Uuid::new_v4(), created_at: now, modified_at: now, ..car };
        let stored = self.repo.insert(new_car).await?;
        info!(car_id = %stored.id, "car_created");
        Ok(stored)
    }

    /// Point lookup. Deleted ids report `NotFound` like ids that never existed.
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Car, ServiceError> {
        self.repo
            .find_by_key(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("car"))
    }

    /// Overwrite the mutable fields of an existing car and refresh `modified_at`.
    ///
    /// Fails with `NotFound` when `car.id` names no record; never inserts.
    ///
    /// # Examples
    /// ```
    /// use service::car::{CarService, Car, repository::mock::InMemoryCarRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = CarService::new(Arc::new(InMemoryCarRepository::default()));
    /// let created = tokio_test::block_on(svc.create(Car { make: "Toyota".into(), price: 5000, ..Default::default() })).unwrap();
    /// let updated = tokio_test::block_on(svc.update(Car { price: 6000, is_used: true, ..created.clone() })).unwrap();
    /// assert_eq!(updated.price, 6000);
    /// assert_eq!(updated.created_at, created.created_at);
    /// let missing = tokio_test::block_on(svc.update(Car::default()));
    /// assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    /// ```
    #[instrument(skip(self, car), fields(car_id = %car.id))]
    pub async fn update(&self, car: Car) -> Result<Car, ServiceError> {
        let existing = self.repo
            .find_by_key(car.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("car"))?;

        // Never let a backwards clock step put modified_at behind its previous value.
        let modified_at = Utc::now().max(existing.modified_at);
        let next = Car { created_at: existing.created_at, modified_at, ..car };

        let stored = self.repo
            .update(next)
            .await?
            // removed between lookup and write
            .ok_or_else(|| ServiceError::not_found("car"))?;
        debug!(previous_price = existing.price, price = stored.price, "car fields overwritten");
        info!(car_id = %stored.id, "car_updated");
        Ok(stored)
    }

    /// Hard delete; returns the record as it was just before removal.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<Car, ServiceError> {
        let removed = self.repo
            .delete_by_key(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("car"))?;
        info!(car_id = %removed.id, "car_deleted");
        Ok(removed)
    }
}
