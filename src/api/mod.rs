pub mod discord;
pub mod openai;
