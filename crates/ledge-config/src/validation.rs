//! Config normalization.
//!
//! Configuration defects are never fatal: out-of-range values are clamped
//! and logged, empty pages stay (they render toolbar-only). The normalized
//! config is what the rest of the system consumes.

use tracing::warn;

use crate::schema::DockConfig;

/// Clamp out-of-range values in place, logging each adjustment.
pub fn normalize(config: &mut DockConfig) {
    if !(1.0..=100.0).contains(&config.width) {
        warn!(width = config.width, "width percent out of range, clamping");
        config.width = config.width.clamp(1.0, 100.0);
    }
    if !(1.0..=100.0).contains(&config.height) {
        warn!(
            height = config.height,
            "height percent out of range, clamping"
        );
        config.height = config.height.clamp(1.0, 100.0);
    }
    if config.trigger_distance < 1 {
        warn!(
            trigger_distance = config.trigger_distance,
            "trigger distance below 1px, clamping"
        );
        config.trigger_distance = 1;
    }
    if config.display_id.is_empty() {
        warn!("empty display id, falling back to primary");
        config.display_id = "primary".into();
    }
}
