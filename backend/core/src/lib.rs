pub mod error;
pub mod relay;
pub mod turn;

pub use error::AriaError;
pub use relay::{FragmentStream, StreamRelay};
pub use turn::{ChatTurn, Role};
