//! Native rendition of the TomCoin single-page site: a scrolling section
//! stack with a nav header and a decorative particle field drifting behind
//! the page.

pub mod content;
pub mod field;
pub mod nav;
pub mod page;
pub mod theme;

pub use field::FieldPlugin;
pub use nav::{AppScreen, NavPlugin, ViewportClass};
pub use page::PagePlugin;
