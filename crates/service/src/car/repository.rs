use async_trait::async_trait;
use uuid::Uuid;

use super::domain::Car;
use crate::errors::ServiceError;

/// Record store for cars. Implementations assign no fields and apply no policy.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn insert(&self, car: Car) -> Result<Car, ServiceError>;
    async fn find_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError>;
    /// `None` when no record has `car.id`. The stored `created_at` is kept.
    async fn update(&self, car: Car) -> Result<Option<Car>, ServiceError>;
    /// Removes the record and returns its prior value, `None` when absent.
    async fn delete_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryCarRepository {
        cars: Mutex<HashMap<Uuid, Car>>,
        unavailable: AtomicBool,
    }

    impl InMemoryCarRepository {
        /// Make every subsequent call fail with `StoreUnavailable` (or recover).
        pub fn set_unavailable(&self, down: bool) {
            self.unavailable.store(down, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.cars.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::StoreUnavailable("in-memory store switched off".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CarRepository for InMemoryCarRepository {
        async fn insert(&self, car: Car) -> Result<Car, ServiceError> {
            self.check()?;
            let mut cars = self.cars.lock().unwrap();
            if cars.contains_key(&car.id) {
                return Err(ServiceError::StoreUnavailable(format!("duplicate key {}", car.id)));
            }
            cars.insert(car.id, car.clone());
            Ok(car)
        }

        async fn find_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError> {
            self.check()?;
            Ok(self.cars.lock().unwrap().get(&id).cloned())
        }

        async fn update(&self, car: Car) -> Result<Option<Car>, ServiceError> {
            self.check()?;
            let mut cars = self.cars.lock().unwrap();
            let Some(stored) = cars.get_mut(&car.id) else { return Ok(None) };
            stored.make = car.make;
            stored.model = car.model;
            stored.year = car.year;
            stored.price = car.price;
            stored.is_used = car.is_used;
            stored.modified_at = car.modified_at;
            Ok(Some(stored.clone()))
        }

        async fn delete_by_key(&self, id: Uuid) -> Result<Option<Car>, ServiceError> {
            self.check()?;
            Ok(self.cars.lock().unwrap().remove(&id))
        }
    }
}
