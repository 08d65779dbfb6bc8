use serde_json::Value;

/// What the completion service handed back for a single request.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Refused(String),
    Content(CompletionContent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionContent {
    /// Free-form text, possibly wrapped in a markdown fence.
    Text(String),
    /// Content the service already returned as JSON.
    Structured(Value),
}
