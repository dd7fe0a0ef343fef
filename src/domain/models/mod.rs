mod account;
mod chat_message;
mod plan;
mod ticket;

pub use account::*;
pub use chat_message::*;
pub use plan::*;
pub use ticket::*;
