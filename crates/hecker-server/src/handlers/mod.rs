pub mod generate;
pub mod health;
pub mod home;
pub mod query;
