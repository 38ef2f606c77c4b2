pub mod arrow_utils;
pub mod color_utils;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod markdown;
pub mod math_utils;
pub mod models;
pub mod parser;
pub mod pattern;
pub mod renderer;
pub mod renderer_skia;
pub mod settings;
pub mod stroke_utils;
pub mod utils;

pub use converter::convert_svg_to_png;
pub use error::{PatternError, SettingsError};
pub use geometry::{integrate, reduce, summarize, GeometrySummary, DEFAULT_TOLERANCE};
pub use models::{BoundingBox, Heading, Point, Turn};
pub use parser::{parse, PatternSource};
pub use pattern::Pattern;
pub use renderer::generate_svg;
pub use renderer_skia::{render_frames, render_pattern, render_to_png};
pub use settings::RenderSettings;
