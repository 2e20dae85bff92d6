use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        // Unsupported codes leave the bundle untouched.
        current_language.set(crate::i18n::current_lang());
    })
}

pub fn build_go_home(navigator: Option<Navigator>) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Home);
        }
    })
}
