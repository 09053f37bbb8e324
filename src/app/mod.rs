use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use rand::rngs::ThreadRng;

use crate::app::game::Game;
use crate::app::keyboard_control::Controls;
use crate::app::prefs::Prefs;
use crate::error::{Error, ErrorConversion, Result};
use crate::rendering::{self, Frame};

pub mod game;
pub mod keyboard_control;
pub mod palette;
pub mod prefs;
pub mod stats;

pub struct App {
    game: Game<ThreadRng>,
    prefs: Prefs,
    controls: Controls,
    /// Captured by the last tick, redrawn until the next one
    frame: Frame,
}

impl App {
    pub fn new(prefs: Prefs) -> Self {
        let game = Game::new(prefs.board_dim, rand::thread_rng());
        let frame = game.frame();
        Self {
            game,
            prefs,
            controls: Controls::default(),
            frame,
        }
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        while ctx.time.check_update_time(self.prefs.ticks_per_second) {
            self.frame = self.game.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let palette = &self.prefs.palette;
        let mut canvas = Canvas::from_frame(ctx, palette.background_color);

        let mesh = rendering::frame_mesh(&self.frame, self.prefs.board_dim, palette, ctx)
            .with_trace_step("App::draw")?;
        canvas.draw(&mesh, DrawParam::default());

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        if let Some(dir) = input.keycode.and_then(|key| self.controls.dir_for(key)) {
            self.game.steer(dir);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        log::info!("quitting ({})", self.game.stats.summary());
        // false lets the event loop shut down
        Ok(false)
    }
}
