use super::*;
use crate::app::keymap::KeyConfig;
use crate::codec;
use crate::schema::FieldKey;
use crate::store::FormStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

fn key_event(code: KeyCode) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::empty())))
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn typing_a_name_flows_into_the_session_link() {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    let last_link: Rc<RefCell<String>> = Rc::default();
    let link_sink = Rc::clone(&last_link);

    let mut store = FormStore::new(Default::default());
    store.subscribe(move |state| {
        *link_sink.borrow_mut() = format!("?{}", codec::encode_query(state));
    });
    let app_state = AppState::new(store, KeyConfig::default());

    let (tx, rx) = mpsc::channel(100);
    tx.send(key_event(KeyCode::Char('i'))).await.unwrap();
    for c in "Jane Doe".chars() {
        tx.send(key_event(KeyCode::Char(c))).await.unwrap();
    }
    tx.send(key_event(KeyCode::Esc)).await.unwrap();
    tx.send(key_event(KeyCode::Char('q'))).await.unwrap();

    run_loop_with_events(&mut terminal, app_state, rx)
        .await
        .unwrap();

    // Relaunching with the produced link reproduces the sheet.
    let restored = codec::decode(&last_link.borrow());
    assert_eq!(restored.get(FieldKey::Name), Some("Jane Doe"));
}

#[tokio::test]
async fn shortcut_toggles_update_the_link_both_ways() {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    let last_link: Rc<RefCell<String>> = Rc::default();
    let link_sink = Rc::clone(&last_link);

    let mut store = FormStore::new(Default::default());
    store.subscribe(move |state| {
        *link_sink.borrow_mut() = format!("?{}", codec::encode_query(state));
    });
    let app_state = AppState::new(store, KeyConfig::default());

    let (tx, rx) = mpsc::channel(100);
    // Move to Gender (third row) and press its second shortcut twice.
    tx.send(key_event(KeyCode::Char('j'))).await.unwrap();
    tx.send(key_event(KeyCode::Char('j'))).await.unwrap();
    tx.send(key_event(KeyCode::Char('2'))).await.unwrap();
    tx.send(key_event(KeyCode::Char('2'))).await.unwrap();
    tx.send(key_event(KeyCode::Char('q'))).await.unwrap();

    run_loop_with_events(&mut terminal, app_state, rx)
        .await
        .unwrap();

    let restored = codec::decode(&last_link.borrow());
    // Second press cleared the field; the key survives as present-but-empty.
    assert_eq!(restored.get(FieldKey::Gender), Some(""));
}

#[tokio::test]
async fn restored_link_prepopulates_the_sheet() {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    let initial = codec::decode("?data=%7B%22age%22%3A%2230%22%7D");
    let mut app_state = AppState::new(FormStore::new(initial), KeyConfig::default());

    terminal.draw(|f| ui::draw(f, &mut app_state)).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Demographics"));
    assert!(text.contains("Risk Assessment"));
    assert_eq!(app_state.store.value_of(FieldKey::Age), "30");
    assert!(app_state.store.state().get(FieldKey::Name).is_none());
}

#[tokio::test]
async fn keystroke_fuzzing_never_panics() {
    let backend = TestBackend::new(60, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    let app_state = AppState::default();

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let pool = [
        KeyCode::Tab,
        KeyCode::BackTab,
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::Delete,
        KeyCode::Backspace,
        KeyCode::Char('j'),
        KeyCode::Char('k'),
        KeyCode::Char('i'),
        KeyCode::Char('x'),
        KeyCode::Char('y'),
        KeyCode::Char('s'),
        KeyCode::Char('?'),
        KeyCode::Char('1'),
        KeyCode::Char('5'),
        KeyCode::Char('9'),
        KeyCode::Char('a'),
        KeyCode::Char('Z'),
        KeyCode::Char(' '),
    ];

    let (tx, rx) = mpsc::channel(600);
    for _ in 0..500 {
        let code = pool[rng.gen_range(0..pool.len())];
        tx.send(key_event(code)).await.unwrap();
    }
    // Guaranteed exit from any mode.
    tx.send(Ok(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    ))))
    .await
    .unwrap();

    run_loop_with_events(&mut terminal, app_state, rx)
        .await
        .unwrap();
}
