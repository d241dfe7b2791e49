// src/app/mod.rs
pub mod browser_event_manager;
pub mod drag_handler;
pub mod frame_scheduler;
pub mod hotspot;
pub mod image_probe;
pub mod init_handler;
pub mod layout_calculator;
pub mod panel;
pub mod panel_app;
pub mod renderer;
