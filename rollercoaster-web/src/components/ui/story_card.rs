use rollercoaster_core::{Story, TextSegment};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StoryCardProps {
    pub story: Story,
}

#[function_component(StoryCard)]
pub fn story_card(props: &StoryCardProps) -> Html {
    let story = &props.story;
    let class = classes!("story-card", story.accent.class());
    let style = format!("margin-left: {}", story.margin_left);

    html! {
        <article {class} {style}>
            <header class="story-card-header">
                <h3 class="story-name">{ story.name.clone() }</h3>
                <p class="story-title">{ story.title.clone() }</p>
            </header>
            <p class="story-text">
                { for story.segments().into_iter().map(|segment| match segment {
                    TextSegment::Plain(text) => html! { { text } },
                    TextSegment::Strong(text) => html! { <strong>{ text }</strong> },
                }) }
            </p>
        </article>
    }
}
