//! Cancellable generation tasks.
//!
//! A superseded request (the user triggered a newer one) can be discarded
//! through its handle instead of racing with the replacement. Aborting a
//! handle never affects other in-flight calls.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::GatewayError;

/// Handle to a spawned generation call.
pub struct GenerationHandle<T> {
    handle: JoinHandle<Result<T, GatewayError>>,
}

/// Spawns a generation future as an abortable task.
///
/// ```ignore
/// let gw = gateway.clone();
/// let profile = profile.clone();
/// let handle = spawn_generation(async move { gw.generate_opportunities(&profile).await });
/// // a newer request supersedes this one:
/// handle.abort();
/// ```
pub fn spawn_generation<F, T>(future: F) -> GenerationHandle<T>
where
    F: Future<Output = Result<T, GatewayError>> + Send + 'static,
    T: Send + 'static,
{
    GenerationHandle {
        handle: tokio::spawn(future),
    }
}

impl<T> GenerationHandle<T> {
    /// Discards the task. The upstream HTTP request is dropped with it; a
    /// subsequent [`join`](Self::join) resolves to `Cancelled`.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Whether the task has completed (successfully, with an error, or by
    /// abort).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task's result.
    pub async fn join(self) -> Result<T, GatewayError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(GatewayError::Cancelled),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}
