//! Browser-side enhancements for the bilingual neon blog/toolbox site.
//!
//! [`boot::start`] runs once the DOM is ready and wires every behavior via
//! [`init_page`]. The routines are public so they can be driven on their own
//! with fake capabilities.

pub mod boot;
pub mod browser;
pub mod code_copy;
pub mod config;
pub mod keyboard;
pub mod language;
pub mod lazy_images;
pub mod motion;
pub mod nav;
pub mod observer;
pub mod page;
pub mod reveal;
pub mod service_worker;
pub mod smooth_scroll;
pub mod tilt;

pub use neonpage_core::{Capabilities, Lang, SiteConfig};
pub use page::{init_page, PageBehaviors};
