use crate::fit_text::use_fit_text;
use rollercoaster_core::FitTextConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FitHeadlineProps {
    pub lines: Vec<String>,
    #[prop_or_default]
    pub config: FitTextConfig,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Hero headline whose lines shrink independently to fit the container.
#[function_component(FitHeadline)]
pub fn fit_headline(props: &FitHeadlineProps) -> Html {
    let fit = use_fit_text(&props.lines, props.config);

    html! {
        <section class="hero" aria-labelledby="hero-title">
            <h1 id="hero-title" class="hero-title" ref={fit.container_ref.clone()}>
                { for props.lines.iter().enumerate().map(|(idx, line)| html! {
                    <span class="hero-line" ref={fit.line_ref(idx)} style={fit.line_style(idx)}>
                        { line.clone() }
                    </span>
                }) }
            </h1>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="hero-subtitle">{ subtitle }</p>
            }
        </section>
    }
}
