use shared_constants::{AUTHORIZATION_HEADER, BEARER_SCHEME, TOKEN_STORAGE_KEY};

use crate::{KeyValueStore, RequestConfig, RequestError};

/// A stage of the outgoing request pipeline.
///
/// `on_request` sees every prepared request before it is sent, `on_error` sees every
/// error raised while preparing one. Both return the outcome handed to the next stage.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, config: RequestConfig) -> Result<RequestConfig, RequestError>;

    fn on_error(&self, error: RequestError) -> Result<RequestConfig, RequestError> {
        Err(error)
    }
}

pub fn bearer_value(token: &str) -> String {
    format!("{} {}", BEARER_SCHEME, token)
}

/// Adds `Authorization: Bearer <token>` when a token is stored.
pub struct AuthInterceptor<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> AuthInterceptor<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, TOKEN_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> RequestInterceptor for AuthInterceptor<S> {
    fn on_request(&self, mut config: RequestConfig) -> Result<RequestConfig, RequestError> {
        // an empty token counts as absent
        if let Some(token) = self.store.get_item(&self.key).filter(|t| !t.is_empty()) {
            config.headers.set(AUTHORIZATION_HEADER, bearer_value(&token));
        }
        Ok(config)
    }

    fn on_error(&self, error: RequestError) -> Result<RequestConfig, RequestError> {
        Err(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(usize);

/// Ordered set of request interceptors.
///
/// Stages run most recently registered first, the way request interceptors stack in
/// the browser HTTP clients this mirrors.
#[derive(Default)]
pub struct InterceptorChain {
    next_id: usize,
    stages: Vec<(InterceptorId, Box<dyn RequestInterceptor>)>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_interceptor(
        &mut self,
        interceptor: impl RequestInterceptor + 'static,
    ) -> InterceptorId {
        let id = InterceptorId(self.next_id);
        self.next_id += 1;
        self.stages.push((id, Box::new(interceptor)));
        id
    }

    /// Removes the interceptor registered under `id`. Returns `false` if it was already gone.
    pub fn eject(&mut self, id: InterceptorId) -> bool {
        let before = self.stages.len();
        self.stages.retain(|(stage_id, _)| *stage_id != id);
        self.stages.len() != before
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn run(
        &self,
        prepared: Result<RequestConfig, RequestError>,
    ) -> Result<RequestConfig, RequestError> {
        self.stages
            .iter()
            .rev()
            .fold(prepared, |outcome, (_, stage)| match outcome {
                Ok(config) => stage.on_request(config),
                Err(error) => stage.on_error(error),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, MemoryStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample_request() -> RequestConfig {
        RequestConfig {
            query: vec![("page".to_string(), "2".to_string())],
            body: Some(r#"{"name":"x"}"#.to_string()),
            ..RequestConfig::new(Method::Post, "/api/items")
        }
        .with_header("Accept", "application/json")
    }

    #[test]
    fn test_token_present_sets_bearer_header() {
        let interceptor = AuthInterceptor::new(MemoryStore::new().with_item("token", "abc123"));
        let config = interceptor.on_request(sample_request()).unwrap();
        assert_eq!(config.headers.get("Authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn test_token_is_inserted_verbatim() {
        let interceptor =
            AuthInterceptor::new(MemoryStore::new().with_item("token", " a b+c/=\"quoted\" "));
        let config = interceptor.on_request(RequestConfig::get("/x")).unwrap();
        assert_eq!(
            config.headers.get("Authorization"),
            Some("Bearer  a b+c/=\"quoted\" ")
        );
    }

    #[test]
    fn test_token_absent_leaves_request_unchanged() {
        let interceptor = AuthInterceptor::new(MemoryStore::new());
        let request = sample_request();
        let config = interceptor.on_request(request.clone()).unwrap();
        assert_eq!(config.headers.get("Authorization"), None);
        assert_eq!(config, request);
    }

    #[test]
    fn test_empty_token_is_treated_as_absent() {
        let interceptor = AuthInterceptor::new(MemoryStore::new().with_item("token", ""));
        let request = sample_request();
        assert_eq!(interceptor.on_request(request.clone()).unwrap(), request);
    }

    #[test]
    fn test_token_absent_keeps_existing_authorization() {
        let interceptor = AuthInterceptor::new(MemoryStore::new());
        let request = RequestConfig::get("/x").with_header("Authorization", "Basic Zm9v");
        let config = interceptor.on_request(request).unwrap();
        assert_eq!(config.headers.get("authorization"), Some("Basic Zm9v"));
    }

    #[test]
    fn test_token_under_other_key_is_ignored() {
        let interceptor = AuthInterceptor::new(MemoryStore::new().with_item("access_token", "abc"));
        let config = interceptor.on_request(RequestConfig::get("/x")).unwrap();
        assert_eq!(config.headers.get("Authorization"), None);

        let custom = AuthInterceptor::with_key(
            MemoryStore::new().with_item("access_token", "abc"),
            "access_token",
        );
        let config = custom.on_request(RequestConfig::get("/x")).unwrap();
        assert_eq!(config.headers.get("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_error_is_forwarded_unchanged() {
        let interceptor = AuthInterceptor::new(MemoryStore::new().with_item("token", "abc123"));
        let error = RequestError::Preparation("synthetic".to_string());
        assert_eq!(interceptor.on_error(error.clone()), Err(error));
    }

    #[test]
    fn test_independent_requests_get_the_same_header() {
        let interceptor = AuthInterceptor::new(MemoryStore::new().with_item("token", "abc123"));

        let first = interceptor.on_request(RequestConfig::get("/a")).unwrap();
        let second = interceptor
            .on_request(RequestConfig::new(Method::Delete, "/b"))
            .unwrap();
        assert_eq!(first.headers.get("Authorization"), Some("Bearer abc123"));
        assert_eq!(
            first.headers.get("Authorization"),
            second.headers.get("Authorization")
        );
        assert_eq!(second.headers.iter().count(), 1);

        let anonymous = AuthInterceptor::new(MemoryStore::new())
            .on_request(RequestConfig::get("/a"))
            .unwrap();
        assert_eq!(anonymous.headers.get("Authorization"), None);
    }

    struct Tag(&'static str, Arc<AtomicUsize>);

    impl RequestInterceptor for Tag {
        fn on_request(&self, mut config: RequestConfig) -> Result<RequestConfig, RequestError> {
            let order = self.1.fetch_add(1, Ordering::SeqCst);
            config.headers.set(self.0, order.to_string());
            Ok(config)
        }
    }

    struct Reject;

    impl RequestInterceptor for Reject {
        fn on_request(&self, _: RequestConfig) -> Result<RequestConfig, RequestError> {
            Err(RequestError::Preparation("rejected".to_string()))
        }
    }

    struct Recover;

    impl RequestInterceptor for Recover {
        fn on_request(&self, config: RequestConfig) -> Result<RequestConfig, RequestError> {
            Ok(config)
        }

        fn on_error(&self, _: RequestError) -> Result<RequestConfig, RequestError> {
            Ok(RequestConfig::get("/recovered"))
        }
    }

    #[test]
    fn test_chain_runs_latest_registered_first() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut chain = InterceptorChain::new();
        chain.use_interceptor(Tag("X-First", counter.clone()));
        chain.use_interceptor(Tag("X-Second", counter.clone()));

        let config = chain.run(Ok(RequestConfig::get("/x"))).unwrap();
        assert_eq!(config.headers.get("X-Second"), Some("0"));
        assert_eq!(config.headers.get("X-First"), Some("1"));
    }

    #[test]
    fn test_chain_eject() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut chain = InterceptorChain::new();
        let first = chain.use_interceptor(Tag("X-First", counter.clone()));
        chain.use_interceptor(Tag("X-Second", counter));
        assert_eq!(chain.len(), 2);

        assert!(chain.eject(first));
        assert!(!chain.eject(first));
        assert_eq!(chain.len(), 1);

        let config = chain.run(Ok(RequestConfig::get("/x"))).unwrap();
        assert_eq!(config.headers.get("X-First"), None);
        assert!(config.headers.get("X-Second").is_some());
    }

    #[test]
    fn test_chain_forwards_errors_through_auth() {
        let mut chain = InterceptorChain::new();
        chain.use_interceptor(AuthInterceptor::new(
            MemoryStore::new().with_item("token", "abc123"),
        ));
        let error = RequestError::Preparation("the url is empty".to_string());
        assert_eq!(chain.run(Err(error.clone())), Err(error));
    }

    #[test]
    fn test_chain_error_from_stage_reaches_next_error_handler() {
        let mut chain = InterceptorChain::new();
        chain.use_interceptor(Recover);
        chain.use_interceptor(Reject);
        let config = chain.run(Ok(RequestConfig::get("/x"))).unwrap();
        assert_eq!(config.url, "/recovered");
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = InterceptorChain::new();
        assert!(chain.is_empty());
        let request = sample_request();
        assert_eq!(chain.run(Ok(request.clone())), Ok(request));
    }
}
