pub mod condition;
pub mod enums;
pub mod message;
pub mod remedy;

pub use condition::ConditionAssessment;
pub use enums::{MessageRole, Severity};
pub use message::Message;
pub use remedy::{NaturalRemedy, RemedySuggestion};
