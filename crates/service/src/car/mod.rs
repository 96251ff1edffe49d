//! Car module: three-layer architecture (domain, repository, service).
//!
//! `CarService` owns id and timestamp policy; repositories only move records in and out of a store.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;


pub use domain::Car;
pub use repository::CarRepository;
pub use service::CarService;
