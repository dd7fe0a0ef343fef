mod admin_overview;
mod chat_relay;
mod chat_session;
mod create_ticket;
mod list_tickets;
mod suggest_plan;
mod update_ticket;

pub use admin_overview::*;
pub use chat_relay::*;
pub use chat_session::*;
pub use create_ticket::*;
pub use list_tickets::*;
pub use suggest_plan::*;
pub use update_ticket::*;
