use std::{fmt::Display, sync::Arc};

use leptos::prelude::*;
use shared_constants::API_HEALTH_ENDPOINT;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, BadgeSize, Toast, ToastBody, ToastTitle, ToasterInjection,
};

use super::http::{HttpClient, HttpClientInjection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ApiStatus {
    Checking,
    Reachable,
    Rejected(u16),
    Unreachable,
}

impl Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiStatus::Checking => write!(f, "API: checking"),
            ApiStatus::Reachable => write!(f, "API: reachable"),
            ApiStatus::Rejected(status) => write!(f, "API: responded {status}"),
            ApiStatus::Unreachable => write!(f, "API: unreachable"),
        }
    }
}

impl ApiStatus {
    fn color(&self) -> BadgeColor {
        match self {
            ApiStatus::Checking => BadgeColor::Subtle,
            ApiStatus::Reachable => BadgeColor::Success,
            ApiStatus::Rejected(_) => BadgeColor::Warning,
            ApiStatus::Unreachable => BadgeColor::Danger,
        }
    }
}

fn create_unreachable_toast(reason: &str) -> impl IntoView {
    let reason = reason.to_string();
    view! {
        <Toast>
            <ToastTitle>"API unreachable"</ToastTitle>
            <ToastBody>{reason}</ToastBody>
        </Toast>
    }
}

async fn probe_api(
    client: Arc<HttpClient>,
    toaster: ToasterInjection,
    writer: WriteSignal<ApiStatus>,
) {
    let status = match client.get(API_HEALTH_ENDPOINT).await {
        Ok(response) if response.ok() => ApiStatus::Reachable,
        Ok(response) => ApiStatus::Rejected(response.status()),
        Err(err) => {
            let reason = err.to_string();
            toaster.dispatch_toast(
                move || create_unreachable_toast(reason.as_str()),
                Default::default(),
            );
            ApiStatus::Unreachable
        }
    };
    log::debug!("Got api status {status:?}");
    writer.set(status);
}

/// Badge showing whether the API answered an authorized request.
#[component]
pub fn ApiStatusBadge() -> impl IntoView {
    let client = HttpClientInjection::expect_context();
    let toaster = ToasterInjection::expect_context();
    let (status, set_status) = signal(ApiStatus::Checking);
    LocalResource::new(move || probe_api(client.clone(), toaster.clone(), set_status));
    view! {
        <Badge
            appearance=BadgeAppearance::Tint
            size=BadgeSize::Large
            color=Signal::derive(move || status.get().color())
        >
            {move || status.get().to_string()}
        </Badge>
    }
}
