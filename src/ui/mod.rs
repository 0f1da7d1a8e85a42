pub mod renderer;
pub mod status;

pub use renderer::ui;
