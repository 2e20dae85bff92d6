//! The one real page: hero, stories, questions and the badge shelf.

use crate::badges::{build_remove, build_save, use_badges};
use crate::components::ui::badge_shelf::BadgeShelf;
use crate::components::ui::fit_headline::FitHeadline;
use crate::components::ui::question_card::QuestionCard;
use crate::components::ui::story_card::StoryCard;
use crate::content;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    /// Active locale; a change re-reads all translated content.
    pub lang: AttrValue,
}

#[function_component(LandingPage)]
pub fn landing_page(_props: &LandingPageProps) -> Html {
    let badges = use_badges();
    let on_save = build_save(&badges);
    let on_clear = build_remove(&badges);
    let fit_config = crate::config::site_config().fit_text;

    html! {
        <div class="landing">
            <FitHeadline
                lines={content::hero_lines()}
                config={fit_config}
                subtitle={AttrValue::from(t("hero.subtitle"))}
            />
            <section class="stories" aria-labelledby="stories-title">
                <h2 id="stories-title">{ t("stories.heading") }</h2>
                { for content::stories().into_iter().map(|story| html! {
                    <StoryCard story={story} />
                }) }
            </section>
            <section class="questions" aria-labelledby="questions-title">
                <h2 id="questions-title">{ t("questions.heading") }</h2>
                { for content::questions().into_iter().map(|question| {
                    let saved = badges.load(question.badge_key).map(|v| AttrValue::from(v.to_string()));
                    html! {
                        <QuestionCard
                            key={question.badge_key.as_str()}
                            question={question}
                            saved={saved}
                            on_save={on_save.clone()}
                            on_clear={on_clear.clone()}
                        />
                    }
                }) }
            </section>
            <BadgeShelf badges={badges.badges()} persistent={badges.is_persistent()} />
        </div>
    }
}
