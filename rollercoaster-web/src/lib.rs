#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod badges;
pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod fit_text;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod pages;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    crate::config::apply_document_meta(crate::config::site_config());
    // <html lang> follows the saved locale from the first paint
    crate::i18n::set_lang(&crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}
