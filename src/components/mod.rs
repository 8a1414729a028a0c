pub mod document_processing_card;
pub mod log_drawer;
pub mod model_selector;
pub mod ollama_config_card;
pub mod privacy_card;
