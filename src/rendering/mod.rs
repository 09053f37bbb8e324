pub use frame::{DrawOp, Frame};
pub use frame_mesh::frame_mesh;

mod frame;
mod frame_mesh;
