use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::AriaError;
use crate::turn::ChatTurn;

/// Text fragments as they arrive from the backend, in order, terminated by
/// the end of the stream. Fragment boundaries carry no meaning: a fragment
/// may split words, markup tags, or multi-byte sequences arbitrarily.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, AriaError>> + Send>>;

/// Forwards an ordered list of role-tagged turns to the text-generation
/// backend and hands back the live response stream.
#[async_trait]
pub trait StreamRelay: Send + Sync {
    async fn stream_chat(&self, turns: &[ChatTurn]) -> Result<FragmentStream, AriaError>;
}
