use leptos::prelude::*;
use thaw::{
    ConfigProvider, Flex, FlexAlign, FlexJustify, Layout, LayoutHeader, Text, Theme,
    ToasterProvider,
};

use super::{api_status::ApiStatusBadge, theme_switcher::ThemeSwitcher};

/// Root view: installs the component library and renders the shell.
#[component]
pub fn App() -> impl IntoView {
    let theme = RwSignal::new(Theme::dark());
    let set_body_background_color = move |color: &String| {
        if let Some(document) = window().document() {
            if let Some(body) = document.body() {
                let _ = body
                    .style()
                    .set_property("background-color", color.as_str());
            }
        }
    };
    Effect::new(move |_| {
        set_body_background_color(theme.get().color.color_neutral_background_1());
    });
    view! {
        <ConfigProvider theme>
            <ToasterProvider>
                <Main theme />
            </ToasterProvider>
        </ConfigProvider>
    }
}

#[component]
fn Main(theme: RwSignal<Theme>) -> impl IntoView {
    view! {
        <Layout class="outer-layout">
            <LayoutHeader class="header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <Text>"Portal"</Text>
                    <Flex align=FlexAlign::Center>
                        <ApiStatusBadge />
                        <ThemeSwitcher theme />
                    </Flex>
                </Flex>
            </LayoutHeader>
        </Layout>
    }
}
