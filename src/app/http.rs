use std::sync::Arc;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use models::{resolve_url, InterceptorChain, Method, RequestConfig, RequestError};

use crate::log_call;

/// HTTP client whose every request passes through an interceptor chain.
pub struct HttpClient {
    base_url: Option<String>,
    interceptors: InterceptorChain,
}

#[derive(Clone)]
pub struct HttpClientInjection(pub Arc<HttpClient>);

impl HttpClientInjection {
    #[track_caller]
    pub fn expect_context() -> Arc<HttpClient> {
        expect_context::<Self>().0
    }
}

impl HttpClient {
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            base_url: base_url.map(str::to_string),
            interceptors: InterceptorChain::new(),
        }
    }

    pub fn interceptors_mut(&mut self) -> &mut InterceptorChain {
        &mut self.interceptors
    }

    /// Validates and resolves `config`, then hands the outcome to the interceptors.
    ///
    /// A validation failure enters the chain as an error, so interceptors see it on their
    /// error path.
    pub fn prepare(&self, config: RequestConfig) -> Result<RequestConfig, RequestError> {
        let prepared = config.validate().map(|_| RequestConfig {
            url: resolve_url(self.base_url.as_deref(), &config.url),
            ..config
        });
        self.interceptors.run(prepared)
    }

    pub async fn send(&self, config: RequestConfig) -> Result<Response, RequestError> {
        let name = format!("send(`{} {}`)", config.method, config.url);
        log_call!(name, self.dispatch(config).await)
    }

    pub async fn get(&self, url: &str) -> Result<Response, RequestError> {
        self.send(RequestConfig::get(url)).await
    }

    async fn dispatch(&self, config: RequestConfig) -> Result<Response, RequestError> {
        let config = self.prepare(config)?;
        build_request(&config)?
            .send()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))
    }
}

fn to_http_method(method: Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as HttpMethod;
    match method {
        Method::Get => HttpMethod::GET,
        Method::Head => HttpMethod::HEAD,
        Method::Post => HttpMethod::POST,
        Method::Put => HttpMethod::PUT,
        Method::Patch => HttpMethod::PATCH,
        Method::Delete => HttpMethod::DELETE,
        Method::Options => HttpMethod::OPTIONS,
    }
}

/// Builds the browser request. Headers added by interceptors are checked again here, since
/// the browser throws instead of failing on a value it refuses.
fn build_request(config: &RequestConfig) -> Result<Request, RequestError> {
    config.check_headers()?;
    let mut builder = RequestBuilder::new(&config.url).method(to_http_method(config.method));
    for (name, value) in config.headers.iter() {
        builder = builder.header(name, value);
    }
    if !config.query.is_empty() {
        builder = builder.query(
            config
                .query
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
    }
    let request = match &config.body {
        Some(body) => builder.body(body.as_str()),
        None => builder.build(),
    };
    request.map_err(|err| RequestError::Preparation(err.to_string()))
}
