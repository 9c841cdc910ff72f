use std::sync::Arc;

use crate::client::PhotonfireClient;

/// Implemented by every generated service type.
///
/// Generated types have a private constructor; this factory is the only way
/// to obtain one, usually through [`PhotonfireClient::create_service`].
pub trait PhotonfireService: Sized {
    /// Creates a service instance bound to `client`.
    fn create_instance(client: Arc<PhotonfireClient>) -> Self;
}
