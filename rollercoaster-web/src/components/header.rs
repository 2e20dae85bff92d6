use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let site = crate::config::site_config();

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("nav.skip_to_content") }</a>
            <div class="header-content">
                <a class="brand" href={site.url.clone()}>{ site.name.clone() }</a>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|meta| html! {
                            <option value={meta.code} selected={meta.code == p.current_lang}>
                                { meta.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
