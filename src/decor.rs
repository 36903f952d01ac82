use crate::constants::{ABOUT_TILT_ID, FLOATING_ELEMENTS, HERO_TILT_ID};
use crate::dom::html_element_by_id;
use crate::transform::{tilt_css, translate_css};
use field_core::{MotionChange, MotionRig};
use web_sys as web;

/// Page elements that follow the smoothed input. Missing ones are skipped.
pub struct Decor {
    floating: Vec<(web::HtmlElement, f32)>,
    hero: Option<web::HtmlElement>,
    about: Option<web::HtmlElement>,
}

impl Decor {
    pub fn discover(document: &web::Document) -> Self {
        let floating = FLOATING_ELEMENTS
            .iter()
            .filter_map(|(id, factor)| html_element_by_id(document, id).map(|el| (el, *factor)))
            .collect::<Vec<_>>();
        let hero = html_element_by_id(document, HERO_TILT_ID);
        let about = html_element_by_id(document, ABOUT_TILT_ID);
        for el in hero.iter().chain(about.iter()) {
            _ = el.style().set_property("transform-style", "preserve-3d");
        }
        log::info!(
            "[field] decor floating={} hero={} about={}",
            floating.len(),
            hero.is_some(),
            about.is_some()
        );
        Self {
            floating,
            hero,
            about,
        }
    }

    /// Write transforms for the layers that moved; settled layers keep the
    /// style written on their last moving frame.
    pub fn apply(&self, rig: &MotionRig, change: MotionChange) {
        if change.floating {
            for (el, factor) in &self.floating {
                _ = el
                    .style()
                    .set_property("transform", &translate_css(rig.floating_offset(*factor)));
            }
        }
        if let (true, Some(el)) = (change.hero, &self.hero) {
            _ = el.style().set_property("transform", &tilt_css(rig.hero.tilt()));
        }
        if let (true, Some(el)) = (change.about, &self.about) {
            _ = el.style().set_property("transform", &tilt_css(rig.about.tilt()));
        }
    }

    /// Drop the inline transforms so the page returns to its static layout.
    pub fn reset(&self) {
        let all = self
            .floating
            .iter()
            .map(|(el, _)| el)
            .chain(self.hero.iter())
            .chain(self.about.iter());
        for el in all {
            _ = el.style().remove_property("transform");
        }
    }
}
