//! Instructor color palette.
//!
//! Colors are a static table keyed by instructor; holidays, vacant
//! slots and guest instructors get fixed fallbacks.

use std::collections::HashMap;

use crate::grid::CellContent;
use crate::models::Instructor;

/// An sRGB color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Lowercase `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Background colors for timetable cells.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Color per regular instructor.
    pub instructors: HashMap<Instructor, Rgb>,
    /// Holiday cell color.
    pub holiday: Rgb,
    /// Vacant slot color.
    pub vacant: Rgb,
    /// Color for instructors missing from `instructors`.
    pub guest: Rgb,
}

impl Palette {
    /// The studio's published colors.
    pub fn studio() -> Self {
        let instructors = HashMap::from([
            (Instructor::Gota, Rgb(0xbf, 0xdb, 0xfe)),
            (Instructor::Kayo, Rgb(0xfe, 0xcd, 0xd3)),
            (Instructor::Emi, Rgb(0xbb, 0xf7, 0xd0)),
            (Instructor::Sosa, Rgb(0xfd, 0xe6, 0x8a)),
        ]);
        Self {
            instructors,
            holiday: Rgb(0xe5, 0xe7, 0xeb),
            vacant: Rgb(0xff, 0xff, 0xff),
            guest: Rgb(0xe9, 0xd5, 0xff),
        }
    }

    /// Background color for a cell's content.
    pub fn color_for(&self, content: &CellContent) -> Rgb {
        match content {
            CellContent::Vacant => self.vacant,
            CellContent::Holiday => self.holiday,
            CellContent::Assigned(instructor) => self
                .instructors
                .get(instructor)
                .copied()
                .unwrap_or(self.guest),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::studio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb(0xbf, 0xdb, 0xfe).hex(), "#bfdbfe");
        assert_eq!(Rgb(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn test_color_for() {
        let palette = Palette::studio();
        assert_eq!(
            palette.color_for(&CellContent::Assigned(Instructor::Emi)),
            Rgb(0xbb, 0xf7, 0xd0)
        );
        assert_eq!(palette.color_for(&CellContent::Holiday), palette.holiday);
        assert_eq!(palette.color_for(&CellContent::Vacant), palette.vacant);
        assert_eq!(
            palette.color_for(&CellContent::Assigned(Instructor::custom("Mika"))),
            palette.guest
        );
    }

    #[test]
    fn test_roster_has_distinct_colors() {
        let palette = Palette::studio();
        let mut colors: Vec<_> = Instructor::ROSTER
            .iter()
            .map(|i| palette.instructors[i].hex())
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Instructor::ROSTER.len());
    }
}
