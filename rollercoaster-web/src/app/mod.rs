use crate::badges::BadgeProvider;
use crate::components::{footer::Footer, header::Header};
use crate::pages::{landing::LandingPage, not_found::NotFound};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod handlers;
pub mod state;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::config::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let path = use_location().map(|loc| AttrValue::from(loc.path().to_string()));
    let lang = (*app_state.current_language).clone();

    html! {
        <BadgeProvider>
            <Shell
                lang={lang}
                on_lang_change={handlers::build_lang_change(&app_state)}
                on_go_home={handlers::build_go_home(navigator)}
                route={route.unwrap_or(Route::NotFound)}
                path={path}
            />
        </BadgeProvider>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub lang: String,
    pub on_lang_change: Callback<String>,
    pub on_go_home: Callback<()>,
    pub route: Route,
    /// Location the router saw, shown when nothing matched it.
    #[prop_or_default]
    pub path: Option<AttrValue>,
}

/// Page chrome around the routed view, free of router hooks so it renders anywhere.
#[function_component(Shell)]
pub fn shell(p: &ShellProps) -> Html {
    let main_view = match p.route {
        Route::Home => html! { <LandingPage lang={AttrValue::from(p.lang.clone())} /> },
        Route::NotFound => html! {
            <NotFound on_go_home={p.on_go_home.clone()} path={p.path.clone()} />
        },
    };

    html! {
        <>
            <Header on_lang_change={p.on_lang_change.clone()} current_lang={p.lang.clone()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                { main_view }
            </main>
            <p id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></p>
            <Footer />
        </>
    }
}
