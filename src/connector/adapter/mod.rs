mod gateway_completion;
mod in_memory_store;
mod rest_auth;
mod rest_store;
mod static_auth;

pub use gateway_completion::*;
pub use in_memory_store::*;
pub use rest_auth::*;
pub use rest_store::*;
pub use static_auth::*;
