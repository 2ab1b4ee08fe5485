//! Shared infrastructure for store-backed tests.


pub(crate) use db::TestDb;
