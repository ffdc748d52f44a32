use serde::Serialize;

/// Color used for podium codes that cannot be mapped to a make.
pub const NEUTRAL_COLOR: &str = "#ccc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Make {
    Ford,
    Holden,
    Chevrolet,
    Nissan,
    Mercedes,
    Volvo,
}

impl Make {
    pub fn name(&self) -> &'static str {
        match self {
            Make::Ford => "Ford",
            Make::Holden => "Holden",
            Make::Chevrolet => "Chevrolet",
            Make::Nissan => "Nissan",
            Make::Mercedes => "Mercedes",
            Make::Volvo => "Volvo",
        }
    }

    /// color returns the brand color of the make.
    pub fn color(&self) -> &'static str {
        match self {
            Make::Ford => "#1C3F95",
            Make::Holden => "#C8102E",
            Make::Chevrolet => "#FFB612",
            Make::Nissan => "#FFE01A",
            Make::Mercedes => "#C0C0C0",
            Make::Volvo => "#00B7EB",
        }
    }

    /// from_letter decodes the single-letter podium code. Only H, F, N and C are in use; every
    /// other code results in None and is displayed with the neutral color and its raw letter.
    pub fn from_letter(letter: &str) -> Option<Make> {
        match letter {
            "H" => Some(Make::Holden),
            "F" => Some(Make::Ford),
            "N" => Some(Make::Nissan),
            "C" => Some(Make::Chevrolet),
            _ => None,
        }
    }

    /// has_light_color is true for the yellow brand colors, which need dark label text.
    pub fn has_light_color(&self) -> bool {
        matches!(self, Make::Chevrolet | Make::Nissan)
    }
}

/// color_of returns the make color or the neutral color for unmapped codes.
pub fn color_of(make: Option<Make>) -> &'static str {
    make.map_or(NEUTRAL_COLOR, |m| m.color())
}

/// MODEL_CATALOGUE lists every model that raced at Bathurst in the covered seasons, grouped by make.
/// The order determines the row order of the model usage heatmap.
pub const MODEL_CATALOGUE: &[(Make, &[&str])] = &[
    (
        Make::Holden,
        &["VL", "VP", "VR", "VS", "VT", "VX", "VY", "VZ", "VE", "VF", "ZB"],
    ),
    (Make::Chevrolet, &["Mk6", "ZL1"]),
    (
        Make::Ford,
        &["EB", "EF", "EL", "AU", "BA", "BF", "FG", "FG X", "GT", "S550", "S650"],
    ),
    (Make::Nissan, &["L33"]),
    (Make::Mercedes, &["E63"]),
    (Make::Volvo, &["S60"]),
];
