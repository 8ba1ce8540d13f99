pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
