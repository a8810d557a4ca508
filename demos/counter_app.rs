//! Counter Page
//!
//! Drives the counter page's component tree from a store, the way a UI
//! event loop would.
//!
//! Run with: cargo run --example counter_app
//! Set RUST_LOG=tally=debug to see each dispatch.

use tally::core::AppState;
use tally::view::{ComponentTree, Event, Rendered};
use tally::StoreBuilder;
use tracing_subscriber::EnvFilter;

fn describe(frame: &[Rendered]) -> String {
    frame
        .iter()
        .map(|rendered| match rendered {
            Rendered::UserProfile => "[profile]".to_string(),
            Rendered::Header { show_navigation } => {
                format!("[header nav={}]", if *show_navigation { "on" } else { "off" })
            }
            Rendered::Auth { show_login } => {
                format!("[auth {}]", if *show_login { "login" } else { "-" })
            }
            Rendered::Counter { value: Some(n) } => format!("[counter {n}]"),
            Rendered::Counter { value: None } => "[counter hidden]".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counter Page ===\n");

    let tree = ComponentTree::new();
    println!("Initial:  {}", describe(&tree.render(&AppState::default())));

    let mut store = StoreBuilder::new()
        .initial(AppState::default())
        .history_limit(16)
        .subscribe(move |state: &AppState| println!("Render:   {}", describe(&tree.render(state))))
        .build()?;

    for event in [
        Event::IncrementClicked,
        Event::IncreaseClicked { amount: 5 },
        Event::DecrementClicked,
        Event::ToggleClicked,
        Event::ToggleClicked,
        Event::LoginClicked,
        Event::LogoutClicked,
    ] {
        println!("\nEvent:    {event:?}");
        store.dispatch(event);
    }

    println!("\nActions:  {:?}", store.history().action_names());
    println!("Checkpoint:\n{}", store.checkpoint().to_json_pretty()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
