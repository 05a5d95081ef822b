mod chat;
mod health;
mod metrics;

pub use chat::{chat_handler, chat_ready_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
