//! # Group Categories
//!
//! Maps a group name to the category the renderer picks materials by.

use std::fmt;

/// Semantic category of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Roof,
    WallPenetration,
    Wall,
}

impl Category {
    /// Every category, in classification order
    pub const ALL: [Category; 3] = [Category::Roof, Category::WallPenetration, Category::Wall];

    /// Classify a group by name.
    ///
    /// Case-sensitive substring checks, first match wins:
    /// `"Roof"` then `"WallPen"`; anything else is a [`Category::Wall`].
    ///
    /// ```
    /// use objscan::gfx::scene::Category;
    ///
    /// assert_eq!(Category::from_group_name("RoofWallPen"), Category::Roof);
    /// assert_eq!(Category::from_group_name("roof"), Category::Wall);
    /// ```
    pub fn from_group_name(name: &str) -> Self {
        if name.contains("Roof") {
            Category::Roof
        } else if name.contains("WallPen") {
            Category::WallPenetration
        } else {
            Category::Wall
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Roof => "roof",
            Category::WallPenetration => "wall penetration",
            Category::Wall => "wall",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shorthand for [`Category::from_group_name`]
pub fn classify(name: &str) -> Category {
    Category::from_group_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(classify("RoofNorth"), Category::Roof);
        assert_eq!(classify("WallPen_1"), Category::WallPenetration);
        assert_eq!(classify("Wall_12"), Category::Wall);
        assert_eq!(classify("RoofWallPen"), Category::Roof);
    }

    #[test]
    fn test_substring_anywhere() {
        assert_eq!(classify("SouthRoof_2"), Category::Roof);
        assert_eq!(classify("East_WallPenetration"), Category::WallPenetration);
        assert_eq!(classify("WallPe"), Category::Wall);
        assert_eq!(classify(""), Category::Wall);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("ROOF"), Category::Wall);
        assert_eq!(classify("wallpen_3"), Category::Wall);
    }
}
