use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::palette::Palette;
use crate::basic::{BoardDim, Cell};
use crate::error::{ErrorConversion, Result};
use crate::rendering::{DrawOp, Frame};

fn cell_rect(cell: Cell, board_dim: BoardDim) -> Rect {
    let side = board_dim.cell as f32;
    Rect::new(cell.x as f32, cell.y as f32, side, side)
}

fn bordered_cell(builder: &mut MeshBuilder, cell: Cell, color: Color, board_dim: BoardDim, palette: &Palette) -> Result {
    let rect = cell_rect(cell, board_dim);
    builder.rectangle(DrawMode::fill(), rect, color)?;
    builder.rectangle(DrawMode::stroke(palette.border_thickness), rect, palette.border_color)?;
    Ok(())
}

pub fn frame_mesh(frame: &Frame, board_dim: BoardDim, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();

    let res: Result = frame.draw_ops().into_iter().try_for_each(|op| {
        match op {
            DrawOp::Clear => {
                let board = Rect::new(0., 0., board_dim.width as f32, board_dim.height as f32);
                builder.rectangle(DrawMode::fill(), board, palette.background_color)?;
            }
            DrawOp::Erase(cell) => {
                builder.rectangle(DrawMode::fill(), cell_rect(cell, board_dim), palette.background_color)?;
            }
            DrawOp::Apple(cell) => bordered_cell(&mut builder, cell, palette.apple_color, board_dim, palette)?,
            DrawOp::Snake(cell) => bordered_cell(&mut builder, cell, palette.snake_color, board_dim, palette)?,
        }
        Ok(())
    });
    res.with_trace_step("frame_mesh")?;

    Ok(Mesh::from_data(&ctx.gfx, builder.build()))
}

#[test]
fn test_cell_rect() {
    let rect = cell_rect(Cell { x: 620, y: 40 }, BoardDim::DEFAULT);
    assert_eq!(rect, Rect::new(620., 40., 20., 20.));
}
