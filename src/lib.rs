pub mod app;
pub mod autoread;
pub mod capture;
pub mod config;
pub mod contrast;
pub mod error;
pub mod fields;
pub mod geometry;
pub mod logging;
pub mod preview;
pub mod state;

pub use app::{PickerApp, SwatchFill};
pub use autoread::{AutoReadController, POLL_INTERVAL};
pub use capture::{CaptureBackend, CaptureError, GrimCaptureBackend, PixelSampler};
pub use config::{load_settings, save_settings, RgbDisplay, Settings};
pub use contrast::contrast_for;
pub use error::{AppError, AppResult};
pub use fields::{Field, FieldSync};
pub use geometry::{Color, ScreenPoint};
pub use preview::{PreviewGrid, PreviewRenderer};
pub use state::{ColorState, ReadState};
