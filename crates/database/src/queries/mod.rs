//! Queries per table. Every function takes any Postgres executor, so they run
//! on the pool as well as inside a transaction. Errors of the store are passed
//! on unchanged.

pub mod coordinate;
pub mod day;
pub mod distance;
pub mod location;
pub mod task;
