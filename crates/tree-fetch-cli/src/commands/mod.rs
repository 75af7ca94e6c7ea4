pub mod fetch;
pub mod format;
