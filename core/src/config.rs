use serde::Deserialize;

use crate::lang::Lang;

pub const DEFAULT_REVEAL_SELECTORS: &[&str] =
    &[".post-card", ".feature-card", ".tool-card", ".project-card"];

/// Page-level settings. Every field falls back to the site's stock behavior
/// when absent from the embedded JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_lang: Lang,
    pub tilt: TiltConfig,
    pub reveal: RevealConfig,
    pub copy: CopyConfig,
    pub motion: MotionConfig,
    /// Worker script to register on load. `None` keeps registration off.
    pub service_worker: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    pub divisor: f64,
    pub perspective_px: u32,
    pub hover_scale: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: 10.0,
            perspective_px: 1000,
            hover_scale: 1.02,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    pub class_name: String,
}

impl RevealConfig {
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_REVEAL_SELECTORS
                .iter()
                .map(|selector| selector.to_string())
                .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            class_name: "visible".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub label: String,
    pub copied_label: String,
    pub reset_ms: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            label: "Copy".to_string(),
            copied_label: "Copied!".to_string(),
            reset_ms: 2000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub variable: String,
    pub reduced_value: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            variable: "--transition".to_string(),
            reduced_value: "none".to_string(),
        }
    }
}
