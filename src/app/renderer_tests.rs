// src/app/renderer_tests.rs
// ブラウザ上で DOM を使って renderer を確かめるテスト。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use super::*;
use crate::components::{PanelId, Position, Size};

wasm_bindgen_test_configure!(run_in_browser);

fn stage(document: &Document) -> HtmlElement {
    let stage = document.create_element("div").unwrap().dyn_into::<HtmlElement>().unwrap();
    document.body().unwrap().append_child(&stage).unwrap();
    stage
}

fn panel() -> Panel {
    Panel {
        id: PanelId::Left,
        src: "missing/left.png".to_string(),
        initial_position: Position::new(40.0, 80.0),
        size: Size::new(360.0, 240.0),
        hotspot: None,
        link: None,
    }
}

#[wasm_bindgen_test]
fn failed_wiring_removes_the_half_mounted_panel() {
    let document = web_sys::window().unwrap().document().unwrap();
    let stage = stage(&document);
    let element = create_panel_element(&document, &stage, &panel()).unwrap();
    assert_eq!(stage.child_element_count(), 1);

    let result: Result<(), JsValue> = remove_on_error(&element, Err(JsValue::from_str("listener failed")));
    assert!(result.is_err());
    assert_eq!(stage.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn successful_wiring_keeps_the_panel() {
    let document = web_sys::window().unwrap().document().unwrap();
    let stage = stage(&document);
    let element = create_panel_element(&document, &stage, &panel()).unwrap();

    assert_eq!(remove_on_error(&element, Ok(7)).unwrap(), 7);
    assert_eq!(stage.child_element_count(), 1);
    assert_eq!(element.get_attribute("data-panel").as_deref(), Some("left"));
}
