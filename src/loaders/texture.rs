use anyhow::{ensure, Context, Result};
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;

/// RGBA8 pixels, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let texture = Self {
            width,
            height,
            pixels,
        };
        ensure!(
            texture.is_valid(),
            "texture {}x{} needs {} bytes, got {}",
            width,
            height,
            texture.expected_len(),
            texture.pixels.len()
        );
        Ok(texture)
    }

    /// 1x1 texture of a single colour
    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }

    /// `size` x `size` texture split into `cells` x `cells` squares
    pub fn checkerboard(size: u32, cells: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let size = size.max(1);
        let cell = (size / cells.max(1)).max(1);
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                pixels.extend_from_slice(&color);
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
        }
    }

    fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0 && self.pixels.len() == self.expected_len()
    }

    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// Full mip chain down to 1x1, level 0 first
    pub fn mip_chain(&self) -> Vec<TextureData> {
        let mut levels = vec![self.clone()];
        let Some(base) = RgbaImage::from_raw(self.width, self.height, self.pixels.clone()) else {
            return levels;
        };

        let (mut width, mut height) = (self.width, self.height);
        while width > 1 || height > 1 {
            width = (width / 2).max(1);
            height = (height / 2).max(1);
            let scaled = image::imageops::resize(&base, width, height, FilterType::Triangle);
            levels.push(TextureData {
                width,
                height,
                pixels: scaled.into_raw(),
            });
        }

        levels
    }
}

/// Decode any image the `image` crate understands into RGBA8
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureData> {
    let path = path.as_ref();
    let img = image::open(path).with_context(|| format!("Failed to load texture: {:?}", path))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("Loaded texture {:?} ({}x{})", path, width, height);

    TextureData::new(width, height, rgba.into_raw())
}

/// Missing or undecodable textures are not fatal: warn and use `fallback`
pub fn load_texture_or_fallback(path: Option<&Path>, fallback: TextureData) -> TextureData {
    let Some(path) = path else {
        return fallback;
    };

    match load_texture(path) {
        Ok(texture) => texture,
        Err(err) => {
            log::warn!("{:#}; using a generated texture instead", err);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("stairwell-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_solid_is_one_pixel() {
        let tex = TextureData::solid([1, 2, 3, 4]);
        assert!(tex.is_valid());
        assert_eq!(tex.pixels, vec![1, 2, 3, 4]);
        assert_eq!(tex.mip_level_count(), 1);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let a = [255, 255, 255, 255];
        let b = [0, 0, 0, 255];
        let tex = TextureData::checkerboard(4, 2, a, b);

        assert!(tex.is_valid());
        let px = |x: usize, y: usize| &tex.pixels[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(px(0, 0), a);
        assert_eq!(px(1, 1), a);
        assert_eq!(px(2, 0), b);
        assert_eq!(px(0, 2), b);
        assert_eq!(px(3, 3), a);
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        assert!(TextureData::new(2, 2, vec![0; 15]).is_err());
        assert!(TextureData::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_mip_chain_halves_to_one() {
        let tex = TextureData::checkerboard(8, 2, [255; 4], [0, 0, 0, 255]);
        let chain = tex.mip_chain();

        assert_eq!(chain.len() as u32, tex.mip_level_count());
        let sizes: Vec<_> = chain.iter().map(|t| (t.width, t.height)).collect();
        assert_eq!(sizes, vec![(8, 8), (4, 4), (2, 2), (1, 1)]);
        assert!(chain.iter().all(TextureData::is_valid));
    }

    #[test]
    fn test_mip_chain_non_square() {
        let tex = TextureData::new(4, 1, vec![128; 16]).unwrap();
        let sizes: Vec<_> = tex.mip_chain().iter().map(|t| (t.width, t.height)).collect();
        assert_eq!(sizes, vec![(4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_load_png_round_trip() {
        let path = temp_path("load.png");
        let img = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let tex = load_texture(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(&tex.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_file_uses_fallback() {
        let fallback = TextureData::solid([9, 9, 9, 255]);
        let path = temp_path("missing.jpg");

        let tex = load_texture_or_fallback(Some(path.as_path()), fallback.clone());
        assert_eq!(tex, fallback);

        let tex = load_texture_or_fallback(None, fallback.clone());
        assert_eq!(tex, fallback);
    }

    #[test]
    fn test_load_error_names_path() {
        let err = load_texture("no/such/wall.jpg").unwrap_err();
        assert!(format!("{:#}", err).contains("wall.jpg"));
    }
}
