use anyhow::{bail, Context, Result};
use clap::Parser;
use hexglyph::color_utils::{parse_color_result, Rgba8};
use hexglyph::markdown::extract_blocks;
use hexglyph::{convert_svg_to_png, generate_svg, render_to_png, Pattern, RenderSettings};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hexglyph")]
#[command(about = "Render hex pattern notation to SVG, PNG or JSON geometry", long_about = None)]
struct Args {
    /// Pattern notation, e.g. "(EAST wwaqqqqqeaw)"
    #[arg(value_name = "PATTERN", required_unless_present = "markdown")]
    pattern: Option<String>,

    /// Render every ```hexpattern block of a Markdown file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "pattern")]
    markdown: Option<PathBuf>,

    /// Output file path (defaults to pattern.png)
    /// Use .svg, .png or .json (raw geometry) as the extension
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON file with render settings
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Rasterize the SVG rendering with resvg instead of drawing rough strokes
    #[arg(long)]
    legacy: bool,

    /// Number of animation frames to write (PNG only)
    #[arg(long, default_value_t = 1)]
    frames: u64,

    /// Overlay bounding box, centroid and vertices
    #[arg(long)]
    debug: bool,

    /// Draw an arrow on every segment
    #[arg(long)]
    direction: bool,

    /// Disable the wiggle animation
    #[arg(long)]
    still: bool,

    /// Canvas size in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Color of the first segment (#RRGGBB or #RRGGBBAA)
    #[arg(long, value_name = "COLOR", value_parser = parse_color_result)]
    color_start: Option<Rgba8>,

    /// Color of the last segment
    #[arg(long, value_name = "COLOR", value_parser = parse_color_result)]
    color_end: Option<Rgba8>,

    /// Background color for PNG output, "transparent" for none
    #[arg(long, value_name = "COLOR", value_parser = parse_color_result, default_value = "#ffffff")]
    background: Rgba8,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = 75, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// The logging level to use
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn color_arg(color: Rgba8) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", color.0, color.1, color.2, color.3)
}

fn build_settings(args: &Args) -> Result<RenderSettings> {
    let mut settings = match &args.settings {
        Some(path) => RenderSettings::load(path)?,
        None => RenderSettings::default(),
    };

    if args.debug {
        settings.debug_overlay = true;
    }
    if args.direction {
        settings.direction_indicator = true;
    }
    if args.still {
        settings.animate_pattern = false;
    }
    if let Some(size) = args.size {
        settings.pattern_size = size;
    }
    if let Some(color) = args.color_start {
        settings.pattern_color_start = color_arg(color);
    }
    if let Some(color) = args.color_end {
        settings.pattern_color_end = color_arg(color);
    }

    settings.validate().context("Invalid render settings")?;
    Ok(settings)
}

/// `out.png` -> `out_003.png` for multi-frame output
fn frame_path(path: &Path, frame: u64) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("pattern");
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
    path.with_file_name(format!("{stem}_{frame:03}.{extension}"))
}

fn write_pattern(pattern: &Pattern, output_path: &Path, settings: &RenderSettings, args: &Args) -> Result<()> {
    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match extension.to_lowercase().as_str() {
        "svg" => {
            let svg_content = generate_svg(pattern, settings)?;
            fs::write(output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {output_path:?}"))?;
        }
        "json" => {
            let json = serde_json::to_string_pretty(pattern).context("Failed to serialize pattern")?;
            fs::write(output_path, json)
                .with_context(|| format!("Failed to write JSON file: {output_path:?}"))?;
        }
        _ => {
            if args.legacy {
                let svg_content = generate_svg(pattern, settings)?;
                convert_svg_to_png(&svg_content, output_path, Some(args.background), args.quality)
                    .with_context(|| format!("Failed to convert to PNG: {output_path:?}"))?;
            } else if args.frames <= 1 {
                render_to_png(pattern, settings, 0, output_path, Some(args.background), args.quality)
                    .with_context(|| format!("Failed to render PNG: {output_path:?}"))?;
            } else {
                for frame in 0..args.frames {
                    let path = frame_path(output_path, frame);
                    render_to_png(pattern, settings, frame, &path, Some(args.background), args.quality)
                        .with_context(|| format!("Failed to render PNG: {path:?}"))?;
                }
            }
        }
    }

    info!("Rendered {pattern} to {}", output_path.display());
    Ok(())
}

fn render_markdown(path: &Path, output: &Path, settings: &RenderSettings, args: &Args) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read Markdown file: {path:?}"))?;
    let blocks = extract_blocks(&content);
    if blocks.is_empty() {
        bail!("No hexpattern blocks found in {path:?}");
    }

    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("pattern");
    let extension = output.extension().and_then(|s| s.to_str()).unwrap_or("png");

    let mut rendered = 0;
    for (i, block) in blocks.iter().enumerate() {
        let Some(notation) = block.notation() else {
            error!("Empty hexpattern block at line {}", block.line);
            continue;
        };
        let pattern = match notation.parse::<Pattern>() {
            Ok(pattern) => pattern,
            Err(e) => {
                error!("Skipping hexpattern block at line {}: {e}", block.line);
                continue;
            }
        };
        let block_output = output.with_file_name(format!("{stem}_{i}.{extension}"));
        write_pattern(&pattern, &block_output, settings, args)?;
        rendered += 1;
    }

    if rendered == 0 {
        bail!("None of the {} hexpattern blocks in {path:?} could be rendered", blocks.len());
    }
    info!("Rendered {rendered} of {} patterns from {}", blocks.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;

    let settings = build_settings(&args)?;
    let output_path = args.output.clone().unwrap_or_else(|| PathBuf::from("pattern.png"));

    match (&args.markdown, &args.pattern) {
        (Some(markdown), _) => render_markdown(markdown, &output_path, &settings, &args),
        (None, Some(notation)) => {
            let pattern = Pattern::parse(notation)
                .with_context(|| format!("Failed to parse pattern {notation:?}"))?;
            write_pattern(&pattern, &output_path, &settings, &args)
        }
        (None, None) => bail!("Either a pattern or --markdown is required"),
    }
}
