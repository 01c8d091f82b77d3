mod format;

pub use format::{format_path, short_id};
