mod core;

pub use core::{ChatCompletions, CompletionError, Message, Role, completion};
