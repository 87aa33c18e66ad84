//! Default TOML config template.

/// The default config file, every value commented out.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# tabdeck configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[logging]
# level = "info"          # trace | debug | info | warn | error
# log_actions = true      # log each store action with prev/next state

[layout]
# width = 960             # 200-7680
# height = 640            # 100-4320
# tab_bar_height = 24     # 12-64
# tab_width = 120         # 48-400

[widgets]
# initial = ["watcher"]   # incrementor | decrementor | watcher, at most 16
# closable = true

[counter]
# async_amount = 1
# async_delay_ms = 1000   # 0-60000
"##
}
