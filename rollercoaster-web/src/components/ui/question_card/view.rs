use crate::content::badge_name;
use crate::i18n;
use rollercoaster_core::{BadgeKey, Question};
use std::collections::BTreeMap;
use web_sys::InputEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub question: Question,
    /// Answer currently stored for this question's badge.
    #[prop_or_default]
    pub saved: Option<AttrValue>,
    pub on_save: Callback<(BadgeKey, String)>,
    pub on_clear: Callback<BadgeKey>,
}

/// Whether a draft answer is worth saving.
#[must_use]
pub fn is_savable(draft: &str) -> bool {
    !draft.trim().is_empty()
}

#[function_component(QuestionCard)]
pub fn question_card(p: &Props) -> Html {
    let key = p.question.badge_key;
    let draft = use_state(|| p.saved.clone().unwrap_or_default());

    let on_input = {
        #[cfg(target_arch = "wasm32")]
        {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                    draft.set(input.value().into());
                }
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Callback::from(|_e: InputEvent| {})
        }
    };
    let save = {
        let cb = p.on_save.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            if is_savable(&draft) {
                cb.emit((key, draft.trim().to_string()));
            }
        })
    };
    let clear = {
        let cb = p.on_clear.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(AttrValue::default());
            cb.emit(key);
        })
    };

    let class = classes!(
        "question-card",
        p.question.accent.class(),
        format!("slide-from-{}", p.question.slide_from.as_str())
    );
    let style = format!("margin-left: {}", p.question.margin_left);
    let answer_id = format!("answer-{key}");
    let name = badge_name(key);
    let saved_label = {
        let mut args = BTreeMap::new();
        args.insert("badge", name.as_str());
        i18n::tr("questions.saved_label", Some(&args))
    };

    html! {
        <article {class} {style} id={format!("question-{key}")}>
            <label for={answer_id.clone()} class="question-text">{ p.question.text.clone() }</label>
            <textarea
                id={answer_id}
                value={(*draft).clone()}
                oninput={on_input}
                placeholder={i18n::t("questions.placeholder")}
                rows="3"
            />
            <div class="question-actions">
                <button type="button" class="save-btn" onclick={save} disabled={!is_savable(&draft)}>
                    { i18n::t("questions.save") }
                </button>
            </div>
            if let Some(saved) = p.saved.clone() {
                <div class="saved-answer" data-badge={key.as_str()}>
                    <p class="saved-label">{ saved_label }</p>
                    <blockquote>{ saved }</blockquote>
                    <button type="button" class="clear-btn" onclick={clear}>
                        { i18n::t("questions.clear") }
                    </button>
                </div>
            }
        </article>
    }
}
