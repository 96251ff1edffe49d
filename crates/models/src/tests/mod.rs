/// Connection helpers against in-memory SQLite
pub mod db_tests;
