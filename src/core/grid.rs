//! Block grid geometry of the simulation box.
//!
//! The box is divided into blocks whose edge is at least one smoothing
//! length. Block counts and block sizes are distinct types; degenerate inputs
//! leave the target value untouched instead of producing `inf`/`NaN`.

use super::constants::{BOX_MAX, BOX_MIN, DIM, SMALL_NUMBER};

/// Closed interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn extent(&self) -> f32 {
        self.max - self.min
    }
}

/// Axis-aligned box, one `Bounds` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub axes: [Bounds; DIM],
}

/// The fixed simulation box.
pub const SIM_BOX: Domain = Domain::new(BOX_MIN, BOX_MAX);

impl Domain {
    pub const fn new(min: [f32; DIM], max: [f32; DIM]) -> Self {
        Self {
            axes: [
                Bounds::new(min[0], max[0]),
                Bounds::new(min[1], max[1]),
                Bounds::new(min[2], max[2]),
            ],
        }
    }
}

/// Number of blocks per axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockCount {
    pub n: [i32; DIM],
}

impl BlockCount {
    pub const fn new(nx: i32, ny: i32, nz: i32) -> Self {
        Self { n: [nx, ny, nz] }
    }

    /// Blocks per axis for the simulation box: `floor(extent / h)`.
    ///
    /// A smoothing length below `SMALL_NUMBER` yields the all-zero count.
    pub fn for_smoothing_length(h: f32) -> Self {
        let mut blocks = Self::default();
        blocks.recompute(h, &SIM_BOX);
        blocks
    }

    /// Recompute the counts in place for a candidate height `h` over `domain`.
    ///
    /// Leaves `self` unchanged when `h` is degenerate.
    pub fn recompute(&mut self, h: f32, domain: &Domain) {
        if h.is_nan() || h < SMALL_NUMBER {
            return;
        }
        for (n, axis) in self.n.iter_mut().zip(&domain.axes) {
            *n = (axis.extent() / h).floor() as i32;
        }
    }

    /// Total number of blocks in the grid.
    pub fn total(&self) -> i64 {
        self.n.iter().map(|&n| i64::from(n)).product()
    }

    /// True when any axis has no blocks.
    pub fn is_degenerate(&self) -> bool {
        self.n.iter().any(|&n| n <= 0)
    }
}

/// Edge length of a block along each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockExtent {
    pub s: [f32; DIM],
}

impl BlockExtent {
    pub const fn new(sx: f32, sy: f32, sz: f32) -> Self {
        Self { s: [sx, sy, sz] }
    }

    /// Block size per axis for the simulation box: `extent / count`.
    ///
    /// A degenerate count yields the all-zero extent.
    pub fn from_counts(blocks: &BlockCount) -> Self {
        let mut extent = Self::default();
        extent.recompute(blocks, &SIM_BOX);
        extent
    }

    /// Recompute the block size in place from `blocks` over `domain`.
    ///
    /// Leaves `self` unchanged when any count is zero.
    pub fn recompute(&mut self, blocks: &BlockCount, domain: &Domain) {
        if blocks.is_degenerate() {
            return;
        }
        for ((s, &n), axis) in self.s.iter_mut().zip(&blocks.n).zip(&domain.axes) {
            *s = axis.extent() / n as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_counts_for_known_heights() {
        assert_eq!(BlockCount::for_smoothing_length(0.025), BlockCount::new(5, 7, 5));
        // 0.13 / 0.013 evaluates just below 10 in single precision
        assert_eq!(BlockCount::for_smoothing_length(0.013), BlockCount::new(9, 13, 9));
    }

    #[test]
    fn zero_height_keeps_default() {
        assert_eq!(BlockCount::for_smoothing_length(0.0), BlockCount::default());
        assert_eq!(BlockCount::for_smoothing_length(1e-12), BlockCount::default());
        assert_eq!(BlockCount::for_smoothing_length(f32::NAN), BlockCount::default());
    }

    #[test]
    fn recompute_leaves_prior_value_on_degenerate_height() {
        let mut blocks = BlockCount::new(3, 4, 5);
        blocks.recompute(0.0, &SIM_BOX);
        assert_eq!(blocks, BlockCount::new(3, 4, 5));
    }

    #[test]
    fn recompute_matches_constructor() {
        for h in [0.004_f32, 0.00830882, 0.013, 0.025, 0.05] {
            let mut blocks = BlockCount::new(1, 1, 1);
            blocks.recompute(h, &SIM_BOX);
            assert_eq!(blocks, BlockCount::for_smoothing_length(h));

            let mut extent = BlockExtent::new(1.0, 1.0, 1.0);
            extent.recompute(&blocks, &SIM_BOX);
            assert_eq!(extent, BlockExtent::from_counts(&blocks));
        }
    }

    #[test]
    fn block_extent_over_custom_domain() {
        let domain = Domain::new([0.0; DIM], [100.0; DIM]);
        let mut blocks = BlockCount::default();
        blocks.recompute(10.0, &domain);
        assert_eq!(blocks, BlockCount::new(10, 10, 10));

        let mut extent = BlockExtent::default();
        extent.recompute(&blocks, &domain);
        assert_eq!(extent, BlockExtent::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn block_extent_covers_at_least_one_height() {
        let h = 0.025_f32;
        let extent = BlockExtent::from_counts(&BlockCount::for_smoothing_length(h));
        for s in extent.s {
            assert!(s >= h, "block size {s} smaller than smoothing length {h}");
            assert!((s - h).abs() < 0.002);
        }
    }

    #[test]
    fn zero_count_keeps_extent() {
        assert_eq!(
            BlockExtent::from_counts(&BlockCount::new(0, 7, 5)),
            BlockExtent::default()
        );
        let mut extent = BlockExtent::new(0.5, 0.5, 0.5);
        extent.recompute(&BlockCount::new(5, 0, 5), &SIM_BOX);
        assert_eq!(extent, BlockExtent::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn total_blocks() {
        assert_eq!(BlockCount::new(15, 21, 15).total(), 4725);
    }
}
