// Ollama service client used by the settings surface.
pub mod config;
pub mod ollama_client;

pub use config::Endpoint;
pub use ollama_client::OllamaClient;

use std::future::Future;
use std::pin::Pin;

use crate::error::ClientError;
use crate::models::InstalledModel;

pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T> + 'static>>;

/// What the settings surface needs from the inference service.
///
/// The store never sees this; the surface owns an injected instance.
pub trait ServiceClient {
    /// Assumed to always succeed.
    fn set_base_url(&self, url: &str);

    /// `Ok(true)` when the endpoint answered, `Ok(false)` when it answered
    /// with an error status, `Err` when no answer arrived at all.
    fn check_connection(&self) -> LocalBoxFuture<Result<bool, ClientError>>;

    /// Models installed on the endpoint.
    fn list_models(&self) -> LocalBoxFuture<Result<Vec<InstalledModel>, ClientError>>;
}
