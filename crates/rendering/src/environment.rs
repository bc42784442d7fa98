//! Equirectangular HDR image to cubemap conversion for image based lighting.
//!
//! Bevy's `EnvironmentMapLight` wants a cube texture, while the environment
//! asset is a single latitude/longitude panorama. The conversion runs once on
//! the CPU after the panorama finishes loading: every texel of every face is
//! turned into a direction and the panorama is sampled bilinearly along it.
//! Output is RGBA16F, which is filterable everywhere including WebGL2.

use std::f32::consts::{PI, TAU};
use std::fmt;

use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureFormat, TextureViewDescriptor, TextureViewDimension,
};
use half::f16;

/// Edge length of each generated cube face, in texels.
pub const CUBEMAP_FACE_SIZE: u32 = 512;

const CUBE_FACES: u32 = 6;
/// Bytes per output texel: four f16 channels.
const OUTPUT_TEXEL_BYTES: usize = 8;

// =============================================================================
// Errors
// =============================================================================

/// Why a panorama could not be turned into a cubemap.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentMapError {
    /// Only `Rgba32Float` and `Rgba16Float` panoramas are read.
    UnsupportedFormat(TextureFormat),
    /// Zero width or height.
    EmptyImage,
    /// Fewer bytes than `width * height * texel size`.
    TruncatedData { expected: usize, actual: usize },
}

impl fmt::Display for EnvironmentMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentMapError::UnsupportedFormat(format) => {
                write!(f, "unsupported environment map format {format:?}")
            }
            EnvironmentMapError::EmptyImage => write!(f, "environment map has no pixels"),
            EnvironmentMapError::TruncatedData { expected, actual } => write!(
                f,
                "environment map data truncated: expected {expected} bytes, got {actual}"
            ),
        }
    }
}

impl std::error::Error for EnvironmentMapError {}

// =============================================================================
// Source panorama
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TexelLayout {
    Rgba32Float,
    Rgba16Float,
}

impl TexelLayout {
    fn from_format(format: TextureFormat) -> Result<Self, EnvironmentMapError> {
        match format {
            TextureFormat::Rgba32Float => Ok(TexelLayout::Rgba32Float),
            TextureFormat::Rgba16Float => Ok(TexelLayout::Rgba16Float),
            other => Err(EnvironmentMapError::UnsupportedFormat(other)),
        }
    }

    fn bytes(self) -> usize {
        match self {
            TexelLayout::Rgba32Float => 16,
            TexelLayout::Rgba16Float => 8,
        }
    }
}

/// Read-only view over panorama bytes. Borrows the image data, no copy.
#[derive(Debug, Clone, Copy)]
pub struct Equirect<'a> {
    width: u32,
    height: u32,
    layout: TexelLayout,
    data: &'a [u8],
}

impl<'a> Equirect<'a> {
    pub fn new(
        width: u32,
        height: u32,
        format: TextureFormat,
        data: &'a [u8],
    ) -> Result<Self, EnvironmentMapError> {
        let layout = TexelLayout::from_format(format)?;
        if width == 0 || height == 0 {
            return Err(EnvironmentMapError::EmptyImage);
        }
        let expected = width as usize * height as usize * layout.bytes();
        if data.len() < expected {
            return Err(EnvironmentMapError::TruncatedData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    pub fn from_image(image: &'a Image) -> Result<Self, EnvironmentMapError> {
        Self::new(
            image.width(),
            image.height(),
            image.texture_descriptor.format,
            &image.data,
        )
    }

    fn texel(&self, x: u32, y: u32) -> Vec4 {
        let offset = (y as usize * self.width as usize + x as usize) * self.layout.bytes();
        let bytes = &self.data[offset..offset + self.layout.bytes()];
        match self.layout {
            TexelLayout::Rgba32Float => {
                let c = |i: usize| {
                    f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
                };
                Vec4::new(c(0), c(4), c(8), c(12))
            }
            TexelLayout::Rgba16Float => {
                let c = |i: usize| f16::from_le_bytes([bytes[i], bytes[i + 1]]).to_f32();
                Vec4::new(c(0), c(2), c(4), c(6))
            }
        }
    }

    /// Bilinear sample at normalized `(u, v)`, with `v = 1` at the top row.
    /// Wraps horizontally, clamps vertically.
    pub fn sample_uv(&self, u: f32, v: f32) -> Vec4 {
        let px = u * self.width as f32 - 0.5;
        let py = (1.0 - v) * self.height as f32 - 0.5;
        let x0 = px.floor();
        let y0 = py.floor();
        let fx = px - x0;
        let fy = py - y0;

        let w = self.width as i64;
        let h = self.height as i64;
        let wrap_x = |x: i64| x.rem_euclid(w) as u32;
        let clamp_y = |y: i64| y.clamp(0, h - 1) as u32;

        let (xa, xb) = (wrap_x(x0 as i64), wrap_x(x0 as i64 + 1));
        let (ya, yb) = (clamp_y(y0 as i64), clamp_y(y0 as i64 + 1));

        let top = self.texel(xa, ya).lerp(self.texel(xb, ya), fx);
        let bottom = self.texel(xa, yb).lerp(self.texel(xb, yb), fx);
        top.lerp(bottom, fy)
    }

    /// Sample along a world direction (need not be normalized).
    pub fn sample_direction(&self, direction: Vec3) -> Vec4 {
        let (u, v) = direction_to_equirect_uv(direction);
        self.sample_uv(u, v)
    }
}

/// Longitude/latitude of a direction as panorama coordinates in `[0, 1]`.
pub fn direction_to_equirect_uv(direction: Vec3) -> (f32, f32) {
    let d = direction.normalize_or(Vec3::Z);
    let u = d.z.atan2(d.x) / TAU + 0.5;
    let v = d.y.clamp(-1.0, 1.0).asin() / PI + 0.5;
    (u, v)
}

// =============================================================================
// Cube faces
// =============================================================================

/// World direction through face texel coordinates `(s, t)` in `[-1, 1]`,
/// `t` growing downward. Faces in layer order +X, -X, +Y, -Y, +Z, -Z.
pub fn cube_face_direction(face: u32, s: f32, t: f32) -> Vec3 {
    let d = match face {
        0 => Vec3::new(1.0, -t, -s),
        1 => Vec3::new(-1.0, -t, s),
        2 => Vec3::new(s, 1.0, t),
        3 => Vec3::new(s, -1.0, -t),
        4 => Vec3::new(s, -t, 1.0),
        _ => Vec3::new(-s, -t, -1.0),
    };
    d.normalize()
}

/// Raw RGBA16F bytes for all six faces, layer after layer, rows top to bottom.
pub fn cubemap_face_data(source: &Equirect, face_size: u32) -> Vec<u8> {
    let size = face_size as usize;
    let mut data = Vec::with_capacity(CUBE_FACES as usize * size * size * OUTPUT_TEXEL_BYTES);
    let inv = 2.0 / face_size as f32;

    for face in 0..CUBE_FACES {
        for y in 0..face_size {
            let t = (y as f32 + 0.5) * inv - 1.0;
            for x in 0..face_size {
                let s = (x as f32 + 0.5) * inv - 1.0;
                let color = source.sample_direction(cube_face_direction(face, s, t));
                for channel in [color.x, color.y, color.z, 1.0] {
                    data.extend_from_slice(&f16::from_f32(channel).to_le_bytes());
                }
            }
        }
    }
    data
}

/// Build a cube `Image` ready to be used as an `EnvironmentMapLight` map.
pub fn equirect_to_cubemap(source: &Image, face_size: u32) -> Result<Image, EnvironmentMapError> {
    let equirect = Equirect::from_image(source)?;
    let face_size = face_size.max(1);
    let data = cubemap_face_data(&equirect, face_size);

    let mut image = Image::new(
        Extent3d {
            width: face_size,
            height: face_size,
            depth_or_array_layers: CUBE_FACES,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba16Float,
        RenderAssetUsages::RENDER_WORLD,
    );
    image.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    image.sampler = ImageSampler::linear();
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba32_bytes(pixels: &[[f32; 4]]) -> Vec<u8> {
        pixels
            .iter()
            .flat_map(|p| p.iter().flat_map(|c| c.to_le_bytes()))
            .collect()
    }

    fn uniform_image(width: u32, height: u32, rgb: [f32; 3]) -> Image {
        let pixels = vec![[rgb[0], rgb[1], rgb[2], 1.0]; (width * height) as usize];
        Image::new(
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            rgba32_bytes(&pixels),
            TextureFormat::Rgba32Float,
            RenderAssetUsages::MAIN_WORLD,
        )
    }

    #[test]
    fn test_rejects_unsupported_format() {
        let err = Equirect::new(2, 2, TextureFormat::Rgba8UnormSrgb, &[0; 16]).unwrap_err();
        assert_eq!(
            err,
            EnvironmentMapError::UnsupportedFormat(TextureFormat::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn test_rejects_empty_and_truncated() {
        assert_eq!(
            Equirect::new(0, 4, TextureFormat::Rgba32Float, &[]).unwrap_err(),
            EnvironmentMapError::EmptyImage
        );
        assert_eq!(
            Equirect::new(2, 2, TextureFormat::Rgba32Float, &[0; 32]).unwrap_err(),
            EnvironmentMapError::TruncatedData {
                expected: 64,
                actual: 32
            }
        );
    }

    #[test]
    fn test_error_display_names_sizes() {
        let msg = EnvironmentMapError::TruncatedData {
            expected: 64,
            actual: 32,
        }
        .to_string();
        assert!(msg.contains("64") && msg.contains("32"));
    }

    #[test]
    fn test_face_centers_point_along_axes() {
        let expected = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
        for (face, axis) in expected.iter().enumerate() {
            let d = cube_face_direction(face as u32, 0.0, 0.0);
            assert!(d.distance(*axis) < 1e-6, "face {face}: {d}");
        }
    }

    #[test]
    fn test_face_top_edge_points_up_on_side_faces() {
        // t = -1 is the top row of a side face.
        for face in [0, 1, 4, 5] {
            assert!(cube_face_direction(face, 0.0, -1.0).y > 0.0);
        }
    }

    #[test]
    fn test_equirect_uv_poles_and_horizon() {
        let (_, v_up) = direction_to_equirect_uv(Vec3::Y);
        let (_, v_down) = direction_to_equirect_uv(Vec3::NEG_Y);
        let (u, v) = direction_to_equirect_uv(Vec3::X);
        assert!((v_up - 1.0).abs() < 1e-6);
        assert!(v_down.abs() < 1e-6);
        assert!((u - 0.5).abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bilinear_blends_neighbours() {
        // 2x1 panorama: black then white.
        let data = rgba32_bytes(&[[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]]);
        let eq = Equirect::new(2, 1, TextureFormat::Rgba32Float, &data).unwrap();
        // Exactly on the first texel center.
        assert!(eq.sample_uv(0.25, 0.5).x.abs() < 1e-6);
        // Halfway between the two centers.
        assert!((eq.sample_uv(0.5, 0.5).x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reads_half_float_source() {
        let data: Vec<u8> = [2.0_f32, 4.0, 8.0, 1.0]
            .iter()
            .flat_map(|c| f16::from_f32(*c).to_le_bytes())
            .collect();
        let eq = Equirect::new(1, 1, TextureFormat::Rgba16Float, &data).unwrap();
        let c = eq.sample_direction(Vec3::new(0.3, 0.2, -0.9));
        assert!(c.truncate().distance(Vec3::new(2.0, 4.0, 8.0)) < 1e-5);
    }

    #[test]
    fn test_uniform_panorama_gives_uniform_cube() {
        let source = uniform_image(8, 4, [0.25, 0.5, 2.0]);
        let cube = equirect_to_cubemap(&source, 4).unwrap();

        assert_eq!(cube.texture_descriptor.size.depth_or_array_layers, 6);
        assert_eq!(cube.texture_descriptor.format, TextureFormat::Rgba16Float);
        assert_eq!(cube.data.len(), 6 * 4 * 4 * 8);
        assert_eq!(
            cube.texture_view_descriptor
                .as_ref()
                .and_then(|d| d.dimension),
            Some(TextureViewDimension::Cube)
        );

        for texel in cube.data.chunks_exact(8) {
            let r = f16::from_le_bytes([texel[0], texel[1]]).to_f32();
            let b = f16::from_le_bytes([texel[4], texel[5]]).to_f32();
            assert!((r - 0.25).abs() < 1e-3);
            assert!((b - 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_conversion_surfaces_format_error() {
        let mut source = uniform_image(2, 2, [1.0, 1.0, 1.0]);
        source.texture_descriptor.format = TextureFormat::R8Unorm;
        assert!(matches!(
            equirect_to_cubemap(&source, 4),
            Err(EnvironmentMapError::UnsupportedFormat(_))
        ));
    }
}
