pub mod options;
pub mod render;
pub mod summary;

pub use options::options;
pub use render::render;
pub use summary::summary;
