use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        current_language: use_state(crate::i18n::current_lang),
    }
}
