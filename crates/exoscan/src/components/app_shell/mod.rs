//! App shell components: AppBar, Footer, Starfield backdrop
//!
//! These components form the persistent UI framework around the main
//! content area.

mod appbar;
mod footer;
mod starfield;

pub use appbar::{AppBar, View};
pub use footer::Footer;
pub use starfield::Starfield;
