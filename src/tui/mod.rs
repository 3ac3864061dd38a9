//! Terminal dashboard that draws meters with ratatui.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;
pub use state::{AppState, MeterRow};
pub use style::{Styles, Theme, to_line};
