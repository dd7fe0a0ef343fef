mod admin;
mod chat;
mod extract;
mod suggest_plan;
mod tickets;

pub use admin::*;
pub use chat::*;
pub use extract::*;
pub use suggest_plan::*;
pub use tickets::*;
