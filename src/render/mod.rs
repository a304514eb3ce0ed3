//! Output rendering: the PR template and the assistant prompt.

pub mod prompt;
pub mod template;

pub use prompt::{render_prompt, PromptInput};
pub use template::{render_document, TemplateInput};
