//! Shared validation helpers.

use tracing_subscriber::filter::Directive;

/// Push an error for every entry of `filter` that `tracing` would refuse.
///
/// Entries are split the same way `EnvFilter` splits them.
pub(crate) fn validate_directive(errors: &mut Vec<String>, name: &str, filter: &str) {
    if filter.trim().is_empty() {
        errors.push(format!("{name} is empty"));
        return;
    }

    for part in filter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if let Err(e) = part.parse::<Directive>() {
            errors.push(format!("{name} entry '{part}' is invalid: {e}"));
        }
    }
}
