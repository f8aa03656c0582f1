mod pool;
mod postgres;
mod store;

#[cfg(test)]
pub mod memory;

pub use pool::{create_pool, run_migrations};
pub use postgres::PgMoodStore;
pub use store::{MoodStore, StoreError};
