use leptos::prelude::*;
use thaw::Theme;

use super::icons::NamedIcon;

#[component]
pub fn ThemeSwitcher(theme: RwSignal<Theme>) -> impl IntoView {
    let dark = Memo::new(move |_| theme.get().name.eq("dark"));
    let on_switch_click = move |_| {
        if dark.get() {
            theme.set(Theme::light());
        } else {
            theme.set(Theme::dark());
        }
    };

    let icon_name = Signal::derive(move || {
        if dark.get() { "BsSun" } else { "BsMoonStars" }.to_string()
    });

    view! {
        <span class="theme-switcher" on:click=on_switch_click>
            <NamedIcon name=icon_name height="2em" width="2em" />
        </span>
    }
}
