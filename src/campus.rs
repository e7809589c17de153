/// Which part of campus a delivery point lies in.
///
/// The medical campus occupies the open third quadrant. Its boundary with the main campus
/// runs along the non-positive halves of both axes, which count as [Zone::Border].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    MainCampus,
    MedicalCampus,
    Border,
}

impl Zone {
    pub fn classify([x, y]: [i64; 2]) -> Self {
        if x < 0 && y < 0 {
            Self::MedicalCampus
        } else if (y == 0 && x <= 0) || (x == 0 && y <= 0) {
            Self::Border
        } else {
            Self::MainCampus
        }
    }

    /// Cabling can't be run directly between the two campuses, only through the border.
    pub fn is_separated_from(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::MainCampus, Self::MedicalCampus) | (Self::MedicalCampus, Self::MainCampus)
        )
    }
}
