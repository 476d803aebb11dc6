//! Seams standing in for browser globals, so routines can run against fakes.

use std::fmt;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;

pub trait Location {
    fn pathname(&self) -> String;
    fn navigate(&self, href: &str);
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;
}

pub trait Timer {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

#[derive(Clone)]
pub struct Capabilities {
    pub location: Rc<dyn Location>,
    pub clipboard: Rc<dyn Clipboard>,
    pub timer: Rc<dyn Timer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => f.write_str("clipboard unavailable"),
            ClipboardError::Rejected(reason) => write!(f, "clipboard write rejected: {reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}
