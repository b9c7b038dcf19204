//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# appwm configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[transitions]
# continuous = false     # animate keyboard dismissal before a switch
# slow = false           # slow down every transition

[suspending]
# enabled = false        # turning this off kills suspended windows

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
# filter = "appwm=info"  # full tracing directive, overrides level

[debug]
# dump_windows = false   # log all window chains before each switch
"##
    .to_string()
}
