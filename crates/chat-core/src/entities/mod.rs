//! Domain entities - row shapes returned by the persistence collaborator

mod channel;
mod message;
mod user;

pub use channel::{Channel, ChannelRole};
pub use message::{Attachment, Message};
pub use user::User;
