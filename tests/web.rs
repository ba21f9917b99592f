// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use find_the_stars::{GameConfig, GameError};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_element(tag: &str, id: &str) {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported() {
    let config = GameConfig {
        canvas_id: "no-such-canvas".into(),
        ..GameConfig::default()
    };
    let err = find_the_stars::web::start(config).unwrap_err();
    assert_eq!(err, GameError::MissingElement("no-such-canvas".into()));
}

#[wasm_bindgen_test]
fn wrong_element_type_is_reported() {
    add_element("div", "not-a-canvas");
    let config = GameConfig {
        canvas_id: "not-a-canvas".into(),
        ..GameConfig::default()
    };
    let err = find_the_stars::web::start(config).unwrap_err();
    assert!(matches!(err, GameError::WrongElementType { .. }));
}

#[wasm_bindgen_test]
fn starts_once_and_ignores_early_restart() {
    // A start that fails part way leaves no game behind.
    add_element("canvas", "half-canvas");
    add_element("span", "half-count");
    let partial = GameConfig {
        canvas_id: "half-canvas".into(),
        counter_id: "half-count".into(),
        win_panel_id: "half-panel".into(),
        ..GameConfig::default()
    };
    assert_eq!(
        find_the_stars::web::start(partial),
        Err(GameError::MissingElement("half-panel".into()))
    );
    assert!(!find_the_stars::restart_game());

    add_element("canvas", "main-canvas");
    add_element("span", "star-count");
    add_element("div", "win-panel");
    find_the_stars::web::start(GameConfig::default()).unwrap();
    assert_eq!(
        find_the_stars::web::start(GameConfig::default()),
        Err(GameError::AlreadyStarted)
    );
    assert!(!find_the_stars::restart_game());
    let doc = web_sys::window().unwrap().document().unwrap();
    let counter = doc.get_element_by_id("star-count").unwrap();
    assert_eq!(counter.text_content().as_deref(), Some("??"));

    // Element lookups are still reported while a game is running.
    let missing = GameConfig {
        canvas_id: "gone-canvas".into(),
        ..GameConfig::default()
    };
    assert_eq!(
        find_the_stars::web::start(missing),
        Err(GameError::MissingElement("gone-canvas".into()))
    );
}
