use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::config;

/// Sets `document.title` to `<page> · Portfolio`, or just the site title.
#[hook]
pub fn use_document_title(page: Option<String>) {
    use_effect_with_deps(
        move |page| {
            let title = config::page_title(page.as_deref());
            if let Some(document) = window().and_then(|w| w.document()) {
                debug!("Title: {}", title);
                document.set_title(&title);
            }
            || ()
        },
        page,
    );
}
