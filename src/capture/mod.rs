use std::process::{Command, Stdio};

use thiserror::Error;

use crate::geometry::{Color, ScreenPoint};

pub type CaptureResult<T> = std::result::Result<T, CaptureError>;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("screen capture unavailable: {command}: {message}")]
    Unavailable { command: String, message: String },
    #[error("capture command io error: {command}")]
    CommandIo {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode captured image: {message}")]
    DecodeFailed { message: String },
    #[error("invalid capture region: {message}")]
    InvalidRegion { message: String },
}

/// A screen-coordinate rectangle handed to the capture backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometry string in the `X,Y WxH` form grim expects.
    pub fn geometry(&self) -> String {
        format!("{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Decoded pixels of one captured region, row-major. The backing image is
/// dropped as soon as decoding finishes; only the color values survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPixels {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl RegionPixels {
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `None` when the cell lies outside the captured area, which happens when
    /// the compositor clips a region that extends past the screen edge.
    pub fn color_at(&self, col: u32, row: u32) -> Option<Color> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.pixels.get((row * self.width + col) as usize).copied()
    }
}

pub trait CaptureBackend {
    fn capture_region(&self, region: CaptureRegion) -> CaptureResult<RegionPixels>;
}

/// System backend shelling out to `grim` and decoding its PNG stdout.
#[derive(Debug, Default)]
pub struct GrimCaptureBackend;

impl CaptureBackend for GrimCaptureBackend {
    fn capture_region(&self, region: CaptureRegion) -> CaptureResult<RegionPixels> {
        if region.width == 0 || region.height == 0 {
            return Err(CaptureError::InvalidRegion {
                message: format!("region must be positive, got {}x{}", region.width, region.height),
            });
        }
        let geometry = region.geometry();
        let png = run_command_output_bytes("grim", &["-g", &geometry, "-t", "png", "-"])?;
        decode_region_png(&png)
    }
}

fn decode_region_png(png: &[u8]) -> CaptureResult<RegionPixels> {
    let image = image::load_from_memory(png).map_err(|err| CaptureError::DecodeFailed {
        message: err.to_string(),
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|px| Color::new(px[0], px[1], px[2]))
        .collect();
    Ok(RegionPixels::new(width, height, pixels))
}

fn run_command_output_bytes(command: &str, args: &[&str]) -> CaptureResult<Vec<u8>> {
    let child = Command::new(command)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| CaptureError::CommandIo {
            command: command.to_string(),
            source: err,
        })?;

    let output = child
        .wait_with_output()
        .map_err(|err| CaptureError::CommandIo {
            command: command.to_string(),
            source: err,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(CaptureError::Unavailable {
            command: command.to_string(),
            message: format!("exit status: {}; stderr: {stderr}", output.status),
        });
    }

    if output.stdout.is_empty() {
        return Err(CaptureError::Unavailable {
            command: command.to_string(),
            message: "command produced no stdout output".to_string(),
        });
    }

    Ok(output.stdout)
}

/// Reads single screen pixels through an injectable backend, so tests can
/// substitute synthetic pixels without a display.
#[derive(Debug)]
pub struct PixelSampler<B: CaptureBackend> {
    backend: B,
}

impl PixelSampler<GrimCaptureBackend> {
    pub fn system() -> Self {
        Self::with_backend(GrimCaptureBackend)
    }
}

impl<B: CaptureBackend> PixelSampler<B> {
    pub const fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Color of the screen pixel at `point`. A clipped or short capture falls
    /// back to black rather than failing; only an unavailable capture
    /// primitive surfaces as an error.
    pub fn sample(&self, point: ScreenPoint) -> CaptureResult<Color> {
        let region = CaptureRegion::new(point.x, point.y, 1, 1);
        let pixels = self.backend.capture_region(region)?;
        Ok(pixels.color_at(0, 0).unwrap_or(Color::BLACK))
    }

    /// An `n`×`n` neighborhood centered on `point` (anchor = point − n/2).
    pub fn sample_neighborhood(&self, point: ScreenPoint, n: u32) -> CaptureResult<RegionPixels> {
        if n == 0 {
            return Err(CaptureError::InvalidRegion {
                message: "neighborhood size must be positive".to_string(),
            });
        }
        let half = (n / 2) as i32;
        let region = CaptureRegion::new(point.x - half, point.y - half, n, n);
        self.backend.capture_region(region)
    }
}

#[cfg(test)]
impl<B: CaptureBackend> PixelSampler<B> {
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
