//! Fixed direction glyphs for links without an image of their own.

use serde::{Deserialize, Serialize};

use crate::record::LinkDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionGlyph {
    With,
    Against,
    Both,
    None,
}

const WITH_SVG: &str = r#"<path d="M1.5 10a3.5 3.5 0 105 5 3.5 3.5 0 00-5-5zm3.9 4a2 2 0 11-2.8-3 2 2 0 012.8 3z"/><rect x="6.8" y="12" width="15.4" height=".8"/><polygon points="23.5 12.4 19.2 16.7 18.5 16 22.1 12.4 18.5 8.9 19.2 8.2"/>"#;
const AGAINST_SVG: &str = r#"<path d="M22.4 14.9a3.5 3.5 0 10-4.9-5 3.5 3.5 0 005 5zM18.6 11a2 2 0 112.7 2.8 2 2 0 01-2.7-2.8z"/><rect x="1.8" y="12" width="15.4" height=".8"/><polygon points=".5 12.4 4.7 8.2 5.5 8.9 1.9 12.4 5.5 16 4.7 16.7"/>"#;
const BOTH_SVG: &str = r#"<rect x="1.8" y="10.9" width="20" height="1"/><polygon points="1 11.4 5.3 7.2 6 7.9 2.4 11.4 6 15 5.3 15.7"/><polygon points="23 11.4 18.7 15.7 18 15 21.6 11.4 18 7.9 18.7 7.2"/>"#;
const NONE_SVG: &str = r#"<rect x="2" y="11" width="20" height="2"/>"#;

impl DirectionGlyph {
    pub fn for_direction(direction: LinkDirection) -> Self {
        match direction {
            LinkDirection::With => DirectionGlyph::With,
            LinkDirection::Against => DirectionGlyph::Against,
            LinkDirection::Both => DirectionGlyph::Both,
            LinkDirection::None => DirectionGlyph::None,
        }
    }

    /// Inner markup of the glyph's 24x24 SVG.
    pub fn svg_body(&self) -> &'static str {
        match self {
            DirectionGlyph::With => WITH_SVG,
            DirectionGlyph::Against => AGAINST_SVG,
            DirectionGlyph::Both => BOTH_SVG,
            DirectionGlyph::None => NONE_SVG,
        }
    }

    pub fn svg(&self) -> String {
        format!(
            r#"<svg version="1.1" x="0" y="0" viewBox="0 0 24 24">{}</svg>"#,
            self.svg_body()
        )
    }

    /// Single character used when rendering to a terminal.
    pub fn symbol(&self) -> char {
        match self {
            DirectionGlyph::With => '→',
            DirectionGlyph::Against => '←',
            DirectionGlyph::Both => '↔',
            DirectionGlyph::None => '─',
        }
    }
}
