//! DOM glue: score text and overlay screens
//!
//! Elements are located by data attributes so the page layout stays free to
//! change. Screens are hidden with a `hidden` class.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Handles to the HUD elements
pub struct Hud {
    score: Element,
    high_score: Element,
    final_score: Element,
    start_screen: Element,
    game_over_screen: Element,
    pause_screen: Element,
}

fn find(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element {}", selector)))
}

fn set_visible(el: &Element, visible: bool) {
    if let Err(e) = el.class_list().toggle_with_force("hidden", !visible) {
        log::warn!("Could not toggle visibility: {:?}", e);
    }
}

impl Hud {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            score: find(document, "[data-score]")?,
            high_score: find(document, "[data-highscore]")?,
            final_score: find(document, "[data-final-score]")?,
            start_screen: find(document, "[data-start-screen]")?,
            game_over_screen: find(document, "[data-game-over-screen]")?,
            pause_screen: find(document, "[data-pause-screen]")?,
        })
    }

    pub fn set_score(&self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    pub fn set_high_score(&self, high_score: u32) {
        self.high_score.set_text_content(Some(&high_score.to_string()));
    }

    pub fn show_start(&self) {
        set_visible(&self.start_screen, true);
        set_visible(&self.game_over_screen, false);
    }

    pub fn show_game_over(&self, final_score: u32) {
        self.final_score.set_text_content(Some(&final_score.to_string()));
        set_visible(&self.game_over_screen, true);
    }

    pub fn set_paused(&self, paused: bool) {
        set_visible(&self.pause_screen, paused);
    }

    pub fn hide_screens(&self) {
        set_visible(&self.start_screen, false);
        set_visible(&self.game_over_screen, false);
        set_visible(&self.pause_screen, false);
    }
}
