//! Service layer exposing Create/Get/Update/Delete for cars on top of `models`.
//! - `car::CarService` assigns ids and timestamps.
//! - `car::CarRepository` abstracts the record store (SeaORM or in-memory).

pub mod errors;
pub mod car;
#[cfg(test)]
pub mod test_support;
