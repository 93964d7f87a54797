//! Debate subdomain: responses, outcomes, placeholder templates.

pub mod outcome;
pub mod response;
pub mod templates;

/// Topics offered before a conversation starts.
pub const SUGGESTED_TOPICS: [&str; 5] = [
    "How can AI and humans collaborate to solve climate change?",
    "What is the future of education with AI?",
    "How can we ensure ethical AI development?",
    "What role should governments play in regulating AI?",
    "How will AI transform healthcare in the next decade?",
];
