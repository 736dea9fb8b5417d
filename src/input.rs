mod filter_input;
pub mod input_render;
pub mod loader;

pub use filter_input::FilterInputs;
pub use loader::{FileLoader, InputSource, LoadingState};
