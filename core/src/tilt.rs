use crate::config::TiltConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees for one pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64, divisor: f64) -> Self {
        let divisor = if divisor.abs() > f64::EPSILON { divisor } else { 1.0 };
        let x = client_x - bounds.left;
        let y = client_y - bounds.top;
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0;
        // `+ 0.0` folds -0.0 so the centre renders as `0deg`.
        Self {
            rotate_x: (y - center_y) / divisor + 0.0,
            rotate_y: (center_x - x) / divisor + 0.0,
        }
    }

    pub fn transform(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            config.perspective_px, self.rotate_x, self.rotate_y, config.hover_scale
        )
    }
}

pub fn reset_transform(config: &TiltConfig) -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) scale(1)",
        config.perspective_px
    )
}
