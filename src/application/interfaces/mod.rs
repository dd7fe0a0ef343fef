mod auth_provider;
mod completion_client;
mod message_repository;
mod profile_repository;
mod role_repository;
mod ticket_repository;

pub use auth_provider::*;
pub use completion_client::*;
pub use message_repository::*;
pub use profile_repository::*;
pub use role_repository::*;
pub use ticket_repository::*;
