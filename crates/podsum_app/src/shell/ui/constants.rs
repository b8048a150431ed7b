pub const APP_TITLE: &str = "Podcast Summarizer";

pub const NAV_NEW_PODCAST: &str = "New Podcast";
pub const NAV_HISTORY: &str = "History";

pub const BULLET: &str = "• ";
pub const NESTED_BULLET: &str = "    ◦ ";
pub const RULE_WIDTH: usize = 60;

pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_DIM: &str = "\x1b[2m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Server timestamps arrive without an offset.
pub const SERVER_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %H:%M";
