pub mod console;
pub mod footer;

pub use console::ConsolePage;
pub use footer::{Footer, FooterView};
