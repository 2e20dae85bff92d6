//! Reactive binding of the badge store for Yew views.
//!
//! The provider owns the one store for the page. Views read the published
//! snapshot and dispatch actions; a new state is produced only when the
//! store swapped in a new mapping, so equality is snapshot identity.

use crate::storage::{WebStorage, create_web_badge_store};
use rollercoaster_core::{BadgeKey, BadgeMap, BadgeStore, KeyValueStorage};
use std::rc::Rc;
use yew::prelude::*;

pub type SharedBadgeStore<S = WebStorage> = Rc<BadgeStore<S>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeAction {
    Save { key: String, value: String },
    Remove { key: String },
}

/// What the last successful action did to the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeChange {
    Saved,
    Removed,
}

impl BadgeChange {
    /// Translation key of the status line read out for this change.
    #[must_use]
    pub const fn status_key(self) -> &'static str {
        match self {
            Self::Saved => "badges.saved_status",
            Self::Removed => "badges.removed_status",
        }
    }
}

pub struct BadgeState<S = WebStorage> {
    store: SharedBadgeStore<S>,
    badges: Rc<BadgeMap>,
    last_change: Option<BadgeChange>,
}

impl<S> Clone for BadgeState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            badges: Rc::clone(&self.badges),
            last_change: self.last_change,
        }
    }
}

impl<S: KeyValueStorage> BadgeState<S> {
    #[must_use]
    pub fn new(store: SharedBadgeStore<S>) -> Self {
        let badges = store.badges();
        Self {
            store,
            badges,
            last_change: None,
        }
    }

    /// State over a store that never persists anything.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Rc::new(BadgeStore::null()))
    }

    #[must_use]
    pub fn badges(&self) -> Rc<BadgeMap> {
        Rc::clone(&self.badges)
    }

    #[must_use]
    pub fn load(&self, key: BadgeKey) -> Option<&str> {
        self.badges.get(key.as_str()).map(String::as_str)
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.store.is_live()
    }

    /// Set only on states produced by an action that replaced the mapping.
    #[must_use]
    pub const fn last_change(&self) -> Option<BadgeChange> {
        self.last_change
    }
}

impl BadgeState {
    /// State over this environment's store (live in a browser).
    #[must_use]
    pub fn for_environment() -> Self {
        Self::new(Rc::new(create_web_badge_store()))
    }
}

impl<S> PartialEq for BadgeState<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.badges, &other.badges)
    }
}

impl<S: KeyValueStorage> Reducible for BadgeState<S> {
    type Action = BadgeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (result, change) = match &action {
            BadgeAction::Save { key, value } => (self.store.save(key, value), BadgeChange::Saved),
            BadgeAction::Remove { key } => (self.store.remove(key), BadgeChange::Removed),
        };
        if let Err(err) = result {
            log::error!("badge update {action:?} failed: {err}");
            return self;
        }

        let badges = self.store.badges();
        if Rc::ptr_eq(&badges, &self.badges) {
            self
        } else {
            Rc::new(Self {
                store: Rc::clone(&self.store),
                badges,
                last_change: Some(change),
            })
        }
    }
}

pub type BadgeContext = UseReducerHandle<BadgeState>;

#[derive(Properties, PartialEq)]
pub struct BadgeProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(BadgeProvider)]
pub fn badge_provider(props: &BadgeProviderProps) -> Html {
    let state = use_reducer(BadgeState::for_environment);

    // A new state exists only when the mapping changed, so each successful
    // action is announced once and failed or no-op actions stay silent.
    use_effect_with((*state).clone(), |current| {
        if let Some(change) = current.last_change() {
            crate::a11y::announce(&crate::i18n::t(change.status_key()));
        }
    });

    html! {
        <ContextProvider<BadgeContext> context={state}>
            { props.children.clone() }
        </ContextProvider<BadgeContext>>
    }
}

/// Badge state from the nearest [`BadgeProvider`], or a detached state that
/// forgets everything when rendered outside one.
#[hook]
pub fn use_badges() -> BadgeContext {
    let provided = use_context::<BadgeContext>();
    let detached = use_reducer(BadgeState::detached);
    provided.unwrap_or(detached)
}

pub fn build_save(badges: &BadgeContext) -> Callback<(BadgeKey, String)> {
    let badges = badges.clone();
    Callback::from(move |(key, value): (BadgeKey, String)| {
        badges.dispatch(BadgeAction::Save {
            key: key.as_str().to_string(),
            value,
        });
    })
}

pub fn build_remove(badges: &BadgeContext) -> Callback<BadgeKey> {
    let badges = badges.clone();
    Callback::from(move |key: BadgeKey| {
        badges.dispatch(BadgeAction::Remove {
            key: key.as_str().to_string(),
        });
    })
}
