//! Text measurement and truncation for axis labels.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Shorten `text` to fit `max_px`, ending with a single ellipsis when cut.
/// Labels that already fit are returned unchanged.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    if out.is_empty() {
        // not even one glyph fits; keep the first one so the tick is not anonymous
        return text.chars().take(1).collect();
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_kept() {
        assert_eq!(truncate_to_width("Mon", 10, 100), "Mon");
    }

    #[test]
    fn long_labels_get_ellipsis() {
        let s = truncate_to_width("PROJECT-12345 refactor billing", 10, 60);
        assert!(s.ends_with('…'));
        assert!(estimate_text_width_px(&s, 10) <= 60);
    }

    #[test]
    fn tiny_slot_keeps_first_char() {
        assert_eq!(truncate_to_width("Wednesday", 10, 4), "W");
    }
}
