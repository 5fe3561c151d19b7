/// Platform-specific functionality — privilege checks for the imaging tool.
pub mod permissions;

pub use permissions::is_elevated;
