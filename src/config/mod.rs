mod settings;

pub use settings::{ComposerConfig, DirectoryConfig, DraftConfig, Settings};
