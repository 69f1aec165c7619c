mod manifest;
mod matcher;

pub use manifest::{
    DIRECTIVE_PREFIX, StripOutcome, append_directives, format_directive, is_directive,
    render_directives, strip_content, strip_directives,
};
pub use matcher::{find_matches, scan_manifest};
