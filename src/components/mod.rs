pub mod icon;

pub use icon::Icon;
