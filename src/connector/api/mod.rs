pub mod container;
pub mod error;
pub mod handler;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use router::build_router;
