pub mod tab;
#[allow(clippy::module_inception)]
pub mod tabs;

pub use tabs::Tabs;
