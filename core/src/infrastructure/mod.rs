pub mod diagnosis;
pub mod llm;
