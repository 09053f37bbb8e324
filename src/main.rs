#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::run;
use ggez::ContextBuilder;

use crate::app::prefs::Prefs;
use crate::app::App;
use crate::error::{ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod error;
mod rendering;
mod snake;

fn main() -> Result {
    pretty_env_logger::try_init()?;

    let prefs = Prefs::default();
    let board_dim = prefs.board_dim;

    let wm = WindowMode::default()
        .dimensions(board_dim.width as f32, board_dim.height as f32)
        .resizable(false);
    let ws = WindowSetup::default().title("Snake").vsync(true);

    let res: Result<_> = ContextBuilder::new("snake", "author")
        .window_mode(wm)
        .window_setup(ws)
        .build()
        .map_err(Into::into);
    let (ctx, event_loop) = res.with_trace_step("main")?;

    log::info!(
        "starting {}x{} board ({}px cells) at {} ticks/s",
        board_dim.grid_width(),
        board_dim.grid_height(),
        board_dim.cell,
        prefs.ticks_per_second,
    );

    let app = App::new(prefs);
    run(ctx, event_loop, app)
}
