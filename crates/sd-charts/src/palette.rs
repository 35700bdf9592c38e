//! Fixed chart colors.

pub type Rgb = (u8, u8, u8);

/// Pie slice colors. The cycle is shorter than a year, so colors repeat.
pub const PALETTE: [Rgb; 6] = [
    (136, 132, 216), // violet
    (130, 202, 157), // green
    (255, 198, 88),  // yellow
    (255, 128, 66),  // orange
    (175, 25, 255),  // purple
    (255, 187, 40),  // amber
];

/// Bar fill for months below the sales threshold.
pub const BASE_BAR: Rgb = (136, 132, 216);

/// Bar fill for months at or above the sales threshold.
pub const EMPHASIS_BAR: Rgb = (79, 70, 229);

/// Line stroke color.
pub const LINE_STROKE: Rgb = (130, 202, 157);

/// Slice color by month position, cycling through the palette.
pub fn slice_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_colors_cycle() {
        assert_eq!(slice_color(0), PALETTE[0]);
        assert_eq!(slice_color(5), PALETTE[5]);
        assert_eq!(slice_color(6), PALETTE[0]);
        assert_eq!(slice_color(11), PALETTE[5]);
    }
}
