use crate::capability::{Clipboard, ClipboardError, Timer};
use crate::config::CopyConfig;

pub trait LabelSink {
    fn set_label(&self, text: &str);
}

/// Writes `text` and drives the button label through copied -> idle.
///
/// On failure the label is left untouched and the error is returned for
/// the caller to log.
pub async fn copy_with_feedback(
    clipboard: &dyn Clipboard,
    timer: &dyn Timer,
    label: &dyn LabelSink,
    text: &str,
    config: &CopyConfig,
) -> Result<(), ClipboardError> {
    clipboard.write_text(text).await?;
    label.set_label(&config.copied_label);
    timer.sleep(config.reset_ms).await;
    label.set_label(&config.label);
    Ok(())
}
