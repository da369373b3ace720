use incidencia_core::error::AppError;

/// Prompt in, generated text out. Implementations must be shareable across request tasks.
pub trait Llm: Send + Sync {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;

    /// Cheap liveness probe of the backing service.
    fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub mod ollama_llm;
