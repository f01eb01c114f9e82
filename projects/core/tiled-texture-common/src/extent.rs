//! Two and three dimensional sizes.

/// A width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    /// Horizontal magnitude.
    pub width: u32,
    /// Vertical magnitude.
    pub height: u32,
}

/// A width, height and depth triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3D {
    /// Horizontal magnitude.
    pub width: u32,
    /// Vertical magnitude.
    pub height: u32,
    /// Number of slices.
    pub depth: u32,
}

impl Extent2D {
    /// Creates a new [`Extent2D`].
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Extent3D {
    /// Creates a new [`Extent3D`].
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Product of all three axes, widened so it cannot overflow.
    #[inline]
    pub const fn volume(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }
}
