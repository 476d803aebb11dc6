pub mod capability;
pub mod config;
pub mod copy;
pub mod lang;
pub mod route;
pub mod tilt;

pub use capability::{Capabilities, Clipboard, ClipboardError, Location, Timer};
pub use config::{CopyConfig, MotionConfig, RevealConfig, SiteConfig, TiltConfig};
pub use copy::{copy_with_feedback, LabelSink};
pub use lang::{Lang, LangError, SUPPORTED_LANGS};
pub use route::{
    current_lang, nav_link_is_active, shortcut_route, shortcut_target, switch_language_path, Route,
};
pub use tilt::{reset_transform, Bounds, Tilt};
