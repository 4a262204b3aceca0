use std::fmt::{Debug, Display};
use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientResult, UserClientError};
use crate::transport::{HttpRequest, HttpResponse, Transport};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// A record exposed by a REST collection resource.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Id: Display + Debug + Clone + Send + Sync;

    /// The server-assigned id, if the record has been persisted.
    fn id(&self) -> Option<&Self::Id>;
}

// =============================================================================
// 2. THE GENERIC CLIENT
// =============================================================================

/// Typed access to one collection resource rooted at `base_url`.
///
/// URLs are formed by plain concatenation: `{base_url}{id}` for single records
/// and `{base_url}{suffix}` for listings, so `base_url` is expected to end
/// with `/`.
pub struct ResourceClient<T: Entity> {
    transport: Arc<dyn Transport>,
    base_url: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into(), _entity: PhantomData }
    }

    pub fn url_for(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url, suffix)
    }

    /// GET `{base}{suffix}` and decode a list.
    pub async fn list(&self, suffix: &str) -> ClientResult<Vec<T>> {
        let response = self.checked(HttpRequest::get(self.url_for(suffix)), suffix).await?;
        response.json()
    }

    /// GET `{base}{id}`.
    pub async fn get(&self, id: &T::Id) -> ClientResult<T> {
        self.get_as(id).await
    }

    /// GET `{base}{id}` decoded as an arbitrary shape.
    pub async fn get_as<R: DeserializeOwned>(&self, id: &T::Id) -> ClientResult<R> {
        let resource = id.to_string();
        let response = self.checked(HttpRequest::get(self.url_for(&resource)), &resource).await?;
        response.json()
    }

    /// POST the record to the collection and decode the created record.
    pub async fn create(&self, item: &T) -> ClientResult<T> {
        let response = self.write(Method::POST, "", item).await?;
        response.json()
    }

    /// PUT the record to `{base}{id}`.
    ///
    /// Yields the stored record echoed by the server, or `None` when the write
    /// succeeded without a body (e.g. 204).
    pub async fn replace(&self, id: &T::Id, item: &T) -> ClientResult<Option<T>> {
        let response = self.write(Method::PUT, &id.to_string(), item).await?;
        response.json_opt()
    }

    /// Send any JSON payload to `{base}{suffix}`; the raw response is returned
    /// once its status has been checked.
    pub async fn write<P: Serialize + ?Sized>(&self, method: Method, suffix: &str, payload: &P) -> ClientResult<HttpResponse> {
        let body = serde_json::to_string(payload).map_err(|e| UserClientError::InvalidRequest(e.to_string()))?;
        let request = HttpRequest::json(method, self.url_for(suffix), body);
        self.checked(request, suffix).await
    }

    async fn checked(&self, request: HttpRequest, resource: &str) -> ClientResult<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "Sending request");
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            debug!(status = %response.status, "Request failed");
            Err(UserClientError::from_status(response.status, resource, &response.body))
        }
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
