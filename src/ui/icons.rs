//! Inline SVG icons, tinted at the call site via `svg::Style`
//!
//! 24x24 stroke icons in the Feather style; kept as string constants so the
//! binary needs no asset directory.

macro_rules! icon {
    ($body:expr) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" "#,
            r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" "#,
            r#"stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

/// App logo sparkle
pub const SPARK: &str =
    icon!(r#"<path d="M12 2l2.4 7.6L22 12l-7.6 2.4L12 22l-2.4-7.6L2 12l7.6-2.4z"/>"#);

pub const HOME: &str = icon!(
    r#"<path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
);

pub const ACTIVITY: &str = icon!(r#"<polyline points="22 12 18 12 15 21 9 3 6 12 2 12"/>"#);

pub const TAG: &str = icon!(
    r#"<path d="M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/><line x1="7" y1="7" x2="7.01" y2="7"/>"#
);

pub const BOOKMARK: &str =
    icon!(r#"<path d="M19 21l-7-5-7 5V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2z"/>"#);

pub const SETTINGS: &str = icon!(
    r#"<line x1="4" y1="21" x2="4" y2="14"/><line x1="4" y1="10" x2="4" y2="3"/><line x1="12" y1="21" x2="12" y2="12"/><line x1="12" y1="8" x2="12" y2="3"/><line x1="20" y1="21" x2="20" y2="16"/><line x1="20" y1="12" x2="20" y2="3"/><line x1="1" y1="14" x2="7" y2="14"/><line x1="9" y1="8" x2="15" y2="8"/><line x1="17" y1="16" x2="23" y2="16"/>"#
);

pub const SEARCH: &str =
    icon!(r#"<circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#);

pub const CLOSE: &str =
    icon!(r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#);

pub const CHEVRON_DOWN: &str = icon!(r#"<polyline points="6 9 12 15 18 9"/>"#);

pub const CHEVRON_UP: &str = icon!(r#"<polyline points="18 15 12 9 6 15"/>"#);
