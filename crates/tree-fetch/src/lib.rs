pub mod api;
pub mod coordinates;
pub mod decode;
pub mod entry;
pub mod error;
pub mod feedback;
pub mod fetch;

pub use api::ContentsApi;
pub use coordinates::{RepoCoordinates, normalize_path};
pub use entry::{ContentSource, Entry};
pub use error::FetchError;
pub use feedback::Feedback;
pub use fetch::{TreeSnapshot, fetch_tree, try_fetch_tree};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
