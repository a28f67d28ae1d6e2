//! Pyramid level planning.
//!
//! Deep Zoom numbers levels from 0 (1x1 pixel) up to `max_level` (full
//! resolution). Each level is derived from the one above it by halving both
//! dimensions and rounding up, so `max_level` is the number of halving steps
//! needed to shrink the larger dimension to a single pixel.

/// Calculate the maximum pyramid level for given image dimensions.
///
/// Returns the smallest `L` such that `2^L >= max(width, height)`, i.e.
/// `ceil(log2(max(width, height)))`. Degenerate inputs where both dimensions
/// are 0 or 1 yield level 0.
pub fn max_level(width: u32, height: u32) -> u32 {
    let max_dim = width.max(height);
    if max_dim <= 1 {
        return 0;
    }
    (max_dim - 1).ilog2() + 1
}

/// Calculate dimensions at a specific pyramid level.
///
/// At level `L`, the dimensions are the original dimensions divided by
/// `2^(max_level - L)`, rounded up, with a floor of 1 pixel per axis.
/// Levels above `max_level` return `(0, 0)`.
pub fn level_dimensions(width: u32, height: u32, level: u32, max_level: u32) -> (u32, u32) {
    if level > max_level {
        return (0, 0);
    }

    let scale = 1u64 << (max_level - level);
    let level_width = (width as u64).div_ceil(scale).max(1);
    let level_height = (height as u64).div_ceil(scale).max(1);

    (level_width as u32, level_height as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        // 1x1 image -> level 0, no logarithm domain issues
        assert_eq!(max_level(1, 1), 0);
        assert_eq!(max_level(0, 0), 0);
        assert_eq!(max_level(0, 1), 0);

        // 2x2 image -> level 1 (log2(2) = 1)
        assert_eq!(max_level(2, 2), 1);

        // 256x256 -> level 8 (log2(256) = 8)
        assert_eq!(max_level(256, 256), 8);

        // Non-power-of-two: 1000x800 -> level 10 (2^10 = 1024 >= 1000)
        assert_eq!(max_level(1000, 800), 10);

        // 512x512 -> level 9
        assert_eq!(max_level(512, 512), 9);

        // The larger dimension dominates
        assert_eq!(max_level(3, 1024), 10);
    }

    #[test]
    fn test_max_level_power_of_two_boundaries() {
        // Exact powers of two do not need an extra level
        assert_eq!(max_level(1024, 1), 10);
        // One past a power of two does
        assert_eq!(max_level(1025, 1), 11);
    }

    #[test]
    fn test_level_dimensions() {
        let width = 1024u32;
        let height = 768u32;
        let max = max_level(width, height); // 10

        // Max level = full resolution
        assert_eq!(level_dimensions(width, height, 10, max), (1024, 768));

        // One level down = half resolution
        assert_eq!(level_dimensions(width, height, 9, max), (512, 384));

        // Level 0 = a single pixel on the dominant axis
        assert_eq!(level_dimensions(width, height, 0, max), (1, 1));
    }

    #[test]
    fn test_level_dimensions_round_up() {
        // 100x50, max_level = 7
        let max = max_level(100, 50);
        assert_eq!(max, 7);

        assert_eq!(level_dimensions(100, 50, 7, max), (100, 50));
        assert_eq!(level_dimensions(100, 50, 6, max), (50, 25));
        // 25 halves to 13, rounded up
        assert_eq!(level_dimensions(100, 50, 5, max), (25, 13));
        assert_eq!(level_dimensions(100, 50, 0, max), (1, 1));
    }

    #[test]
    fn test_level_dimensions_out_of_bounds() {
        let max = max_level(1024, 768);
        assert_eq!(level_dimensions(1024, 768, max + 1, max), (0, 0));
        assert_eq!(level_dimensions(1024, 768, 100, max), (0, 0));
    }

    #[test]
    fn test_level_dimensions_match_repeated_halving() {
        // ceil-halving k times equals dividing by 2^k and rounding up
        let (mut w, mut h) = (1000u32, 800u32);
        let max = max_level(w, h);
        for level in (0..=max).rev() {
            assert_eq!(level_dimensions(1000, 800, level, max), (w, h));
            w = w.div_ceil(2).max(1);
            h = h.div_ceil(2).max(1);
        }
    }
}
