use crate::constants::{HINT_ARROW_SELECTOR, HINT_ICON_SELECTOR, HINT_ID, PROGRESS_SELECTOR};
use crate::dom;
use elastic_core::{HintStyle, HintView};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Progress bar and scroll hint elements; any of them may be absent from the page.
pub struct Overlay {
    progress: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    icon: Option<web::HtmlElement>,
    arrow: Option<web::HtmlElement>,
}

impl Overlay {
    pub fn find(document: &web::Document) -> Self {
        let hint = document
            .get_element_by_id(HINT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        let child = |selector: &str| {
            hint.as_ref()
                .and_then(|h| h.query_selector(selector).ok().flatten())
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        };
        let icon = child(HINT_ICON_SELECTOR);
        let arrow = child(HINT_ARROW_SELECTOR);
        Self {
            progress: dom::query(document, PROGRESS_SELECTOR),
            hint,
            icon,
            arrow,
        }
    }

    /// Icon and arrow elements, for click wiring.
    pub fn hint_targets(&self) -> Vec<web::HtmlElement> {
        self.icon.iter().chain(self.arrow.iter()).cloned().collect()
    }

    pub fn set_progress(&self, percent: f32) {
        if let Some(el) = &self.progress {
            dom::set_style(el, "width", &format!("{percent}%"));
        }
    }

    pub fn set_hint_color(&self, css: &str) {
        for el in self.icon.iter().chain(self.arrow.iter()) {
            dom::set_style(el, "color", css);
        }
    }

    pub fn show_hint(&self, view: HintView) {
        if view != HintView::Hidden {
            if let Some(h) = &self.hint {
                dom::set_style(h, "opacity", "1");
            }
        }
        set_visible(self.icon.as_ref(), view == HintView::Icon);
        set_visible(self.arrow.as_ref(), view == HintView::Arrow);
    }

    pub fn set_hint_style(&self, style: HintStyle) {
        if let Some(arrow) = &self.arrow {
            arrow.set_text_content(Some(style.label()));
        }
        if let (HintStyle::Swipe, Some(icon)) = (style, &self.icon) {
            // swiping runs the icon animation upward
            dom::set_style(icon, "--initialTranslate", "12px");
            dom::set_style(icon, "--finalTranslate", "-12px");
        }
    }
}

fn set_visible(el: Option<&web::HtmlElement>, visible: bool) {
    if let Some(el) = el {
        dom::set_style(el, "opacity", if visible { "1" } else { "0" });
        dom::set_style(el, "pointer-events", if visible { "auto" } else { "none" });
    }
}
