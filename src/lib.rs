pub mod arguments;
pub mod headers;
pub mod version;
