// Ideas: prompt construction, response parsing, assembly, and the generation pipeline.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
