//! Full configuration validation.
//!
//! Every section is checked and all errors are collected into a single
//! `ConfigError`.

mod helpers;


use tabdeck_common::ConfigError;

use crate::schema::TabdeckConfig;
use helpers::{validate_max_len, validate_range};

/// Most widgets a config may open at startup.
pub const MAX_INITIAL_WIDGETS: usize = 16;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabdeckConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_layout(&mut errors, config);
    validate_widgets(&mut errors, config);
    validate_counter(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_layout(errors: &mut Vec<String>, config: &TabdeckConfig) {
    let l = &config.layout;
    validate_range(errors, "layout.width", l.width, 200, 7680);
    validate_range(errors, "layout.height", l.height, 100, 4320);
    validate_range(errors, "layout.tab_bar_height", l.tab_bar_height, 12, 64);
    validate_range(errors, "layout.tab_width", l.tab_width, 48, 400);
}

fn validate_widgets(errors: &mut Vec<String>, config: &TabdeckConfig) {
    validate_max_len(
        errors,
        "widgets.initial",
        config.widgets.initial.len(),
        MAX_INITIAL_WIDGETS,
    );
}

fn validate_counter(errors: &mut Vec<String>, config: &TabdeckConfig) {
    validate_range(
        errors,
        "counter.async_delay_ms",
        config.counter.async_delay_ms,
        0,
        60_000,
    );
}
