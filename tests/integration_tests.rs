//! End-to-end scenarios: a store driving the page's component tree.

use std::sync::{Arc, Mutex};
use tally::core::{AppState, AuthAction, CounterAction};
use tally::view::{Component, ComponentTree, Event, Rendered};
use tally::{Checkpoint, Store, StoreBuilder, StoreConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn counter_walkthrough() {
    init_tracing();
    let mut store: Store<AppState> = Store::default();

    assert_eq!(store.state().counter.counter, 0);
    assert!(store.state().counter.show_counter);
    assert!(!store.state().auth.is_authenticated);

    store.dispatch(CounterAction::Increment);
    assert_eq!(store.state().counter.counter, 1);

    store.dispatch(CounterAction::Increase { amount: 5 });
    assert_eq!(store.state().counter.counter, 6);

    store.dispatch(CounterAction::Toggle);
    assert!(!store.state().counter.show_counter);

    store.dispatch(CounterAction::Toggle);
    assert!(store.state().counter.show_counter);
    assert_eq!(store.state().counter.counter, 6);
}

#[test]
fn profile_renders_only_when_authenticated() {
    init_tracing();
    let mut store: Store<AppState> = Store::default();
    let tree = ComponentTree::new();

    assert!(!tree.is_rendered(Component::UserProfile, store.state()));

    store.dispatch(AuthAction::Login);
    assert!(tree.is_rendered(Component::UserProfile, store.state()));

    store.dispatch(AuthAction::Logout);
    assert!(!tree.is_rendered(Component::UserProfile, store.state()));
}

#[test]
fn subscribed_view_rerenders_after_each_event() {
    init_tracing();
    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = frames.clone();
    let tree = ComponentTree::new();

    let mut store = StoreBuilder::new()
        .initial(AppState::default())
        .subscribe(move |state: &AppState| sink.lock().unwrap().push(tree.render(state)))
        .build()
        .unwrap();

    for event in [
        Event::IncrementClicked,
        Event::LoginClicked,
        Event::ToggleClicked,
    ] {
        store.dispatch(event);
    }

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 3);
    assert!(frames[0].contains(&Rendered::Counter { value: Some(1) }));
    assert!(!frames[0].contains(&Rendered::UserProfile));
    assert_eq!(frames[1][0], Rendered::UserProfile);
    assert!(frames[2].contains(&Rendered::Counter { value: None }));
}

#[test]
fn selector_subscription_tracks_auth_only() {
    init_tracing();
    let mut store: Store<AppState> = Store::default();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();

    let id = store.subscribe_to(
        |s: &AppState| s.auth.is_authenticated,
        move |signed_in| sink.lock().unwrap().push(*signed_in),
    );

    store.dispatch(Event::IncrementClicked);
    store.dispatch(Event::LoginClicked);
    store.dispatch(Event::DecrementClicked);
    store.dispatch(Event::LogoutClicked);
    assert!(store.unsubscribe(id));
    store.dispatch(Event::LoginClicked);

    assert_eq!(*changes.lock().unwrap(), vec![true, false]);
}

#[test]
fn checkpoint_survives_json_and_resumes_sequence() {
    init_tracing();
    let config = StoreConfig::from_json(r#"{ "history_limit": 10 }"#).unwrap();
    let mut store = StoreBuilder::new()
        .initial(AppState::default())
        .config(config)
        .build()
        .unwrap();

    store.dispatch(CounterAction::Increase { amount: 3 });
    store.dispatch(AuthAction::Login);

    let json = store.checkpoint().to_json_pretty().unwrap();
    let checkpoint: Checkpoint<AppState> = Checkpoint::from_json(&json).unwrap();
    assert!(json.contains("\"showCounter\""));
    assert!(json.contains("\"isAuthenticated\""));

    let mut resumed: Store<AppState> = Store::default();
    resumed.restore(checkpoint).unwrap();
    resumed.dispatch(CounterAction::Decrement);

    assert_eq!(resumed.state().counter.counter, 2);
    assert!(resumed.state().auth.is_authenticated);
    assert_eq!(resumed.history().last().unwrap().sequence, 3);
    assert_eq!(resumed.metadata().dispatches_of("counter/decrement"), 1);
}
