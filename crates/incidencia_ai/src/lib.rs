pub mod llm;
pub mod narrate;
pub mod ollama;
