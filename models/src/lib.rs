mod interceptor;
mod registry;
mod request;
mod storage;

pub use interceptor::{
    bearer_value, AuthInterceptor, InterceptorChain, InterceptorId, RequestInterceptor,
};
pub use registry::ComponentRegistry;
pub use request::{resolve_url, Headers, Method, RequestConfig, RequestError};
pub use storage::{KeyValueStore, MemoryStore};
