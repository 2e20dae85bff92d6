use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo">
            <p>{ t("footer.copyright") }</p>
            <p class="tagline">{ t("app.tagline") }</p>
        </footer>
    }
}
