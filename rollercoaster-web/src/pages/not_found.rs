use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
    /// Path that failed to match, echoed back to the visitor.
    #[prop_or_default]
    pub path: Option<AttrValue>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let back = props.on_go_home.reform(|_: MouseEvent| ());

    html! {
        <section class="not-found" aria-labelledby="not-found-title">
            <h1 id="not-found-title">{ t("not_found.title") }</h1>
            <p>
                { t("not_found.message") }
                if let Some(path) = props.path.clone() {
                    { " " }<code>{ path }</code>
                }
            </p>
            <button type="button" class="back-btn" onclick={back}>{ t("not_found.back") }</button>
        </section>
    }
}
