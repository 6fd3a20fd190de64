pub mod api;
pub mod assistant;
pub mod brevo;
pub mod cli;
pub mod core;
pub mod openai;
