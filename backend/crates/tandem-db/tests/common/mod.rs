#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_onboarding_profile, create_test_user};
pub use test_db::{count_users_with_email, create_test_pool};
