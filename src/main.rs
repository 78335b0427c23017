use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use halfsheet::app::persistence;
use halfsheet::app::{keymap::KeyConfig, r#loop::run_loop, state::AppState};
use halfsheet::codec;
use halfsheet::store::FormStore;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Resolve the initial sheet before touching the terminal: an explicit
    // link argument wins, else the saved session link, else a blank form.
    // Malformed links silently degrade to a blank form.
    let link = std::env::args().nth(1).or_else(persistence::load_session_link);
    let initial = link.as_deref().map(codec::decode).unwrap_or_default();
    let base = link
        .as_deref()
        .and_then(|l| l.split_once('?'))
        .map(|(base, _)| base.to_string())
        .unwrap_or_default();

    let mut store = FormStore::new(initial);
    // The address-bar analogue: every update rewrites the session link.
    let sub_base = base.clone();
    store.subscribe(move |state| {
        let link = format!("{}?{}", sub_base, codec::encode_query(state));
        persistence::save_session_link(&link);
    });

    let key_config = KeyConfig::load();
    let mut app_state = AppState::new(store, key_config);
    app_state.base = base;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
