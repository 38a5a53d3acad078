// Copyright 2024-2025 hrzlgnm
// SPDX-License-Identifier: MIT-0

use std::sync::Arc;

use icondata_core::Icon as IconData;
use js_sys::wasm_bindgen::JsCast;
use leptos::{mount::mount_to, prelude::*};
use models::{ComponentRegistry, InterceptorId, RequestInterceptor};
use web_sys::HtmlElement;

use super::{
    http::{HttpClient, HttpClientInjection},
    icons::IconRegistry,
};

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("No document to mount into")]
    NoDocument,
    #[error("The selector `{selector}` is invalid: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("No element matches `{0}`")]
    AnchorNotFound(String),
    #[error("The element matching `{0}` is not an HTML element")]
    NotAnHtmlElement(String),
}

/// The application being bootstrapped: a root view plus everything its views share.
pub struct Application<F> {
    root: F,
    icons: ComponentRegistry<IconData>,
    client: HttpClient,
}

impl<F, V> Application<F>
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    pub fn new(root: F, base_url: Option<&str>) -> Self {
        Self {
            root,
            icons: ComponentRegistry::new(),
            client: HttpClient::new(base_url),
        }
    }

    /// Registers every named icon so views can reference it without importing it.
    pub fn register_icons<'a>(
        &mut self,
        icons: impl IntoIterator<Item = &'a (&'a str, IconData)>,
    ) -> &mut Self {
        let overwritten = self
            .icons
            .register_all(icons.into_iter().map(|(name, icon)| (*name, *icon)));
        for name in overwritten {
            log::debug!("Icon `{name}` registered more than once, keeping the last");
        }
        log::debug!("Registered {} icons", self.icons.len());
        self
    }

    pub fn use_interceptor(
        &mut self,
        interceptor: impl RequestInterceptor + 'static,
    ) -> InterceptorId {
        self.client.interceptors_mut().use_interceptor(interceptor)
    }

    /// Mounts the root view under the element matching `selector`.
    ///
    /// The icon registry and the HTTP client are provided as context to every view.
    pub fn mount(self, selector: &str) -> Result<(), MountError> {
        let anchor = find_anchor(selector)?;
        let Self {
            root,
            icons,
            client,
        } = self;
        let icons = IconRegistry(Arc::new(icons));
        let client = HttpClientInjection(Arc::new(client));
        mount_to(anchor, move || {
            provide_context(icons);
            provide_context(client);
            root()
        })
        .forget();
        log::info!("Mounted on `{selector}`");
        Ok(())
    }
}

fn find_anchor(selector: &str) -> Result<HtmlElement, MountError> {
    let document = window().document().ok_or(MountError::NoDocument)?;
    document
        .query_selector(selector)
        .map_err(|err| MountError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:?}"),
        })?
        .ok_or_else(|| MountError::AnchorNotFound(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotAnHtmlElement(selector.to_string()))
}
