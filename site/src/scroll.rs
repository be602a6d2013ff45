// in-page anchor navigation

// the element id an in-page link points at, if any
//
// the bare "#" placeholder link is left alone
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

// where to scroll so the target sits just below the fixed header
pub fn scroll_top(target_offset: f64, header_height: f64) -> f64 {
    target_offset - header_height
}
