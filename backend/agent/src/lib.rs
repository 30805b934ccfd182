pub mod history;
pub mod sanitizer;
pub mod session;
pub mod system_prompt;

pub use history::ConversationHistory;
pub use sanitizer::ResponseSanitizer;
pub use session::ChatSession;
pub use system_prompt::PromptBuilder;
