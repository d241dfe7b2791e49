// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;

pub use app::layout_calculator::LayoutResult;
pub use app::panel_app::PanelApp;

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // log の info! などを console に流す。2 回目以降の登録エラーは無視
    let _ = console_log::init_with_level(log::Level::Info);
    log("panel_board: panic hook and logger set!");
}
