//! Demo resources served by `restshimd`.

pub mod contents_write;
pub mod hello;

pub use contents_write::ContentsWriteResource;
pub use hello::HelloResource;
