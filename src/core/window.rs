use winit::dpi::PhysicalSize;

/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Minimised windows report a zero extent; nothing can be rendered then
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, 1.0 for an empty window
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl From<PhysicalSize<u32>> for WindowDimensions {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
        assert!(!dims.is_empty());
    }

    #[test]
    fn test_aspect_ratio() {
        assert!((WindowDimensions::new(800, 600).aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(WindowDimensions::new(0, 600).aspect_ratio(), 1.0);
        assert_eq!(WindowDimensions::new(800, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_zero_sizes_are_empty() {
        let test_cases = [(0, 0), (0, 480), (640, 0)];

        for (width, height) in test_cases {
            assert!(WindowDimensions::new(width, height).is_empty());
        }
    }

    #[test]
    fn test_from_physical_size() {
        let dims: WindowDimensions = PhysicalSize::new(1024, 768).into();
        assert_eq!(dims, WindowDimensions::new(1024, 768));
    }
}
