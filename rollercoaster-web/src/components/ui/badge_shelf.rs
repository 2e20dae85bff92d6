use crate::content::stored_badge_name;
use crate::i18n::t;
use rollercoaster_core::BadgeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BadgeShelfProps {
    pub badges: Rc<BadgeMap>,
    /// False when answers only live for this page view.
    #[prop_or(true)]
    pub persistent: bool,
}

/// Every saved badge, in key order.
#[function_component(BadgeShelf)]
pub fn badge_shelf(props: &BadgeShelfProps) -> Html {
    html! {
        <section class="badge-shelf" aria-labelledby="badge-shelf-title">
            <h2 id="badge-shelf-title">{ t("badges.heading") }</h2>
            if !props.persistent {
                <p class="notice" role="note">{ t("badges.not_persistent") }</p>
            }
            if props.badges.is_empty() {
                <p class="empty">{ t("badges.empty") }</p>
            } else {
                <ul class="badge-list">
                    { for props.badges.iter().map(|(key, value)| html! {
                        <li class="badge" key={key.clone()}>
                            <span class="badge-name">{ stored_badge_name(key) }</span>
                            <span class="badge-answer">{ value.clone() }</span>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
