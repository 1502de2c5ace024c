pub mod registry;

pub use registry::tab_label_for_key;
