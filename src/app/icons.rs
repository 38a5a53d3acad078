use std::sync::Arc;

use icondata_core::Icon as IconData;
use leptos::prelude::*;
use models::ComponentRegistry;
use thaw::Icon;

macro_rules! icon_table {
    ($($name:ident),* $(,)?) => {
        &[$((stringify!($name), icondata::$name)),*]
    };
}

/// Every icon views can reference by name.
pub static ICONS: &[(&str, IconData)] = icon_table![
    BsMoonStars,
    BsSun,
    MdiAccount,
    MdiCheckAll,
    MdiCheckCircleOutline,
    MdiClipboardText,
    MdiClose,
    MdiCog,
    MdiDelete,
    MdiDownloadCircleOutline,
    MdiFormatVerticalAlignTop,
    MdiGithub,
    MdiHelpCircleOutline,
    MdiHome,
    MdiInboxArrowDown,
    MdiListBox,
    MdiMagnify,
    MdiOpenInNew,
    MdiPencil,
    MdiPlus,
    MdiRefresh,
];

const FALLBACK_ICON: IconData = icondata::MdiHelpCircleOutline;

#[derive(Clone)]
pub struct IconRegistry(pub Arc<ComponentRegistry<IconData>>);

impl IconRegistry {
    #[track_caller]
    pub fn expect_context() -> Self {
        expect_context::<Self>()
    }

    /// Looks `name` up, falling back to a placeholder icon for unknown names.
    pub fn resolve(&self, name: &str) -> IconData {
        if let Some(icon) = self.0.get(name) {
            return *icon;
        }
        match self.0.suggest(name) {
            Some(suggestion) => {
                log::warn!("Unknown icon `{name}`, did you mean `{suggestion}`?")
            }
            None => log::warn!("Unknown icon `{name}`"),
        }
        FALLBACK_ICON
    }
}

/// Renders a registered icon by name.
#[component]
pub fn NamedIcon(
    #[prop(into)] name: Signal<String>,
    #[prop(default = "1em".into(), into)] width: MaybeProp<String>,
    #[prop(default = "1em".into(), into)] height: MaybeProp<String>,
) -> impl IntoView {
    let registry = IconRegistry::expect_context();
    let icon = Memo::new(move |_| name.with(|name| registry.resolve(name)));
    view! { <Icon icon width height /> }
}
