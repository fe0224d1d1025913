pub const FALLBACK_COLOR: &str = "#A5A5A5";

const CLASS_COLORS: &[(&str, &str)] = &[
    ("Positive Control", "#70AD47"),
    ("Mixed Materials", "#48646A"),
    ("Fiber", "#298FC2"),
    ("Biopolymer", "#FFB600"),
];

const CLASS_ORDER: &[&str] = &["Fiber", "Biopolymer", "Mixed Materials", "Positive Control"];

pub fn class_color(material_class_i: &str) -> &'static str {
    CLASS_COLORS
        .iter()
        .find(|(name, _)| *name == material_class_i)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Position of a Material Class I in the display order. Classes outside the
/// list rank as -1, ahead of every listed class.
pub fn class_rank(material_class_i: &str) -> i32 {
    CLASS_ORDER
        .iter()
        .position(|name| *name == material_class_i)
        .map(|idx| idx as i32)
        .unwrap_or(-1)
}
