pub mod feed;
pub mod resume;
