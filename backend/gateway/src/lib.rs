pub mod relay;
pub mod server;
pub mod sse;

pub use server::{GatewayState, start_server};
pub use sse::SseDecoder;
