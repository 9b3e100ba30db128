pub mod colors;
pub mod repo;
pub mod settings;

pub use colors::{load_color_overrides, LabelColorTable};
pub use repo::RepoRef;
pub use settings::Settings;
