pub mod font;
mod renderer;
mod ui;

pub use renderer::Renderer;
pub use font::PixelFont;
