#![forbid(unsafe_code)]

//! fretgram CLI - render, list and validate guitar chord diagrams.
//!
//! # Commands
//!
//! - `render`: Draw one chord as SVG, PNG, or a terminal chord box
//! - `variants`: List or render every fingering of a chord
//! - `parse`: Output the fretting model of an encoding as JSON
//! - `list`: Show the base chord names in the dictionary
//! - `validate`: Parse every dictionary entry and report problems

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fg_catalog::{ChordDictionary, ChordRequest, base_names, resolve};
use fg_core::{ChordStyle, ChordWarning, FrettingModel, Tuning};
use fg_layout::{DiagramScene, layout_chord};
use fg_parser::{parse_evidence_json, parse_named};
use fg_render_svg::{
    SvgRenderConfig, render_scene_svg, render_variation_sheet_svg, render_variations_svg,
};
use fg_render_term::{TermRenderConfig, render_term};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// fretgram CLI - render, list and validate guitar chord diagrams.
#[derive(Debug, Parser)]
#[command(
    name = "fg-cli",
    version,
    about = "fretgram CLI - render, list and validate guitar chord diagrams",
    long_about = "Draws guitar chord diagrams from compact fingering encodings.\n\n\
        Chords come from the built-in dictionary or a JSON/YAML dictionary file,\n\
        and render to SVG, PNG, or a text chord box."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one chord to SVG, PNG, or terminal output.
    Render {
        /// Chord name, e.g. `Am`, `C(3)` or `D7(10)2`.
        name: String,

        /// Encoding to draw instead of the dictionary entry (`x|3-3|2-2|o|1-1|o`)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,

        /// Output file path. If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Output width in pixels (PNG only; height keeps the aspect ratio)
        #[arg(short = 'W', long)]
        width: Option<u32>,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        source: DictionaryArgs,

        /// Print render metadata (timing, dimensions, warnings) as JSON on stderr
        #[arg(long)]
        json: bool,
    },

    /// List or render every variant of a chord, lowest position first.
    Variants {
        /// Base chord name, e.g. `C` or `Am`.
        name: String,

        /// Render each variant (SVG files with --out-dir, text boxes otherwise)
        #[arg(long, group = "output_mode")]
        render: bool,

        /// Tile all variants into a single SVG sheet
        #[arg(long, group = "output_mode", conflicts_with = "render")]
        sheet: bool,

        /// Directory for rendered SVG files; needs --render or --sheet
        #[arg(long, value_name = "DIR", requires = "output_mode")]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        source: DictionaryArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an encoding and output its fretting model as JSON.
    Parse {
        /// Encoding text, a file containing it, or "-" for stdin.
        #[arg(default_value = "-")]
        encoding: String,

        /// Chord name attached to warnings
        #[arg(short, long)]
        name: Option<String>,

        /// Output only the fret window summary
        #[arg(long)]
        summary: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the base chord names in the dictionary.
    List {
        /// Only show names containing this text
        #[arg(long)]
        filter: Option<String>,

        #[command(flatten)]
        source: DictionaryArgs,
    },

    /// Parse every dictionary entry and report malformed data.
    Validate {
        #[command(flatten)]
        source: DictionaryArgs,

        /// Output as JSON (structured diagnostics)
        #[arg(long)]
        json: bool,

        /// Exit with non-zero status on warnings (not just errors)
        #[arg(long)]
        strict: bool,
    },
}

/// Output format for render command.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    /// SVG vector graphics
    Svg,
    /// PNG raster image (requires `png` feature)
    Png,
    /// Terminal chord box with Unicode box-drawing
    Term,
    /// ASCII-only chord box
    Ascii,
}

#[derive(Debug, Default, Args)]
struct DictionaryArgs {
    /// Chord dictionary file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,
}

/// Colors and tuning. Flags win over values from `--config`.
#[derive(Debug, Default, Args)]
struct StyleArgs {
    /// TOML style file with color, background_color, muted_string_color
    /// and open_string_notes keys
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Line and text color
    #[arg(long)]
    color: Option<String>,

    /// Canvas background color
    #[arg(long)]
    background_color: Option<String>,

    /// Color of the string line and marker of muted strings
    #[arg(long)]
    muted_string_color: Option<String>,

    /// Open-string notes, lowest string first (`E|A|D|G|B|E`)
    #[arg(long, value_name = "NOTES")]
    open_string_notes: Option<String>,
}

/// Contents of a `--config` style file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    color: Option<String>,
    background_color: Option<String>,
    muted_string_color: Option<String>,
    open_string_notes: Option<String>,
}

impl StyleFile {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&text).context(format!("Invalid style config: {}", path.display()))
    }
}

impl StyleArgs {
    fn resolve(&self) -> Result<(ChordStyle, Tuning)> {
        let file = match &self.config {
            Some(path) => StyleFile::load(path)?,
            None => StyleFile::default(),
        };

        let mut style = ChordStyle::default();
        if let Some(color) = self.color.clone().or(file.color) {
            style.color = color;
        }
        if let Some(color) = self.background_color.clone().or(file.background_color) {
            style.background_color = color;
        }
        if let Some(color) = self.muted_string_color.clone().or(file.muted_string_color) {
            style.muted_string_color = color;
        }

        let notes = self
            .open_string_notes
            .as_deref()
            .or(file.open_string_notes.as_deref());
        let tuning = match notes {
            Some(notes) => {
                let Ok(tuning) = notes.parse::<Tuning>();
                tuning
            }
            None => Tuning::standard(),
        };

        Ok((style, tuning))
    }
}

/// Dictionary, style and tuning shared by the drawing commands.
struct ChordContext {
    dictionary: Cow<'static, ChordDictionary>,
    style: ChordStyle,
    tuning: Tuning,
}

impl ChordContext {
    fn load(source: &DictionaryArgs, style: &StyleArgs) -> Result<Self> {
        let dictionary = load_dictionary(source.dictionary.as_deref())?;
        let (style, tuning) = style.resolve()?;
        debug!(
            "Style: color={}, background={}, muted={}, tuning={tuning}",
            style.color, style.background_color, style.muted_string_color
        );
        Ok(Self {
            dictionary,
            style,
            tuning,
        })
    }

    fn request(&self, name: &str) -> ChordRequest {
        ChordRequest::named(name)
            .with_style(self.style.clone())
            .with_tuning(self.tuning.clone())
    }
}

/// Result of rendering a chord.
#[derive(Debug, Serialize)]
struct RenderResult {
    format: String,
    chord: String,
    encoding: String,
    string_count: usize,
    start_fret: u32,
    visible_fret_count: u32,
    has_barre: bool,
    output_bytes: usize,
    width: Option<u32>,
    height: Option<u32>,
    parse_time_ms: f64,
    layout_time_ms: f64,
    render_time_ms: f64,
    total_time_ms: f64,
    warnings: Vec<ChordWarning>,
}

#[derive(Debug, Serialize)]
struct VariantsResult {
    chord: String,
    count: usize,
    variants: Vec<VariantInfo>,
}

#[derive(Debug, Serialize)]
struct VariantInfo {
    name: String,
    encoding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
}

/// Result of validating a dictionary.
#[derive(Debug, Serialize)]
struct ValidateResult {
    valid: bool,
    source: String,
    chord_count: usize,
    clean_count: usize,
    warnings: Vec<ValidationWarning>,
    errors: Vec<ValidationError>,
}

#[derive(Debug, Serialize)]
struct ValidationWarning {
    code: String,
    chord: String,
    token: String,
    string_index: usize,
    message: String,
}

#[derive(Debug, Serialize)]
struct ValidationError {
    code: String,
    chord: String,
    /// Position of the entry in the dictionary.
    entry: usize,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariantsMode {
    List,
    Render,
    Sheet,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Render {
            name,
            encoding,
            format,
            output,
            width,
            style,
            source,
            json,
        } => {
            let context = ChordContext::load(&source, &style)?;
            cmd_render(
                &context,
                &name,
                encoding.as_deref(),
                format,
                output.as_deref(),
                width,
                json,
            )
        }

        Command::Variants {
            name,
            render,
            sheet,
            out_dir,
            style,
            source,
            json,
        } => {
            let mode = if sheet {
                VariantsMode::Sheet
            } else if render {
                VariantsMode::Render
            } else {
                VariantsMode::List
            };
            let context = ChordContext::load(&source, &style)?;
            cmd_variants(&context, &name, mode, out_dir.as_deref(), json)
        }

        Command::Parse {
            encoding,
            name,
            summary,
            pretty,
        } => cmd_parse(&encoding, name.as_deref(), summary, pretty),

        Command::List { filter, source } => cmd_list(&source, filter.as_deref()),

        Command::Validate {
            source,
            json,
            strict,
        } => cmd_validate(&source, json, strict),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(input).is_file() {
        std::fs::read_to_string(input).context(format!("Failed to read file: {input}"))
    } else {
        Ok(input.to_string())
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<Cow<'static, ChordDictionary>> {
    match path {
        Some(path) => {
            let dictionary = ChordDictionary::from_path(path)
                .context(format!("Failed to load dictionary: {}", path.display()))?;
            info!("Loaded {} chords from {}", dictionary.len(), path.display());
            Ok(Cow::Owned(dictionary))
        }
        None => Ok(Cow::Borrowed(ChordDictionary::builtin())),
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    write_output_bytes(output, content.as_bytes())
}

fn write_output_bytes(output: Option<&str>, content: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content).context(format!("Failed to write to: {path}"))?;
            info!("Wrote output to: {path}");
        }
        None => {
            io::stdout()
                .write_all(content)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// File name for a chord: `C#/Db(4)` becomes `Csharp_Db_4`.
fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '#' => stem.push_str("sharp"),
            c if c.is_ascii_alphanumeric() || c == '-' => stem.push(c),
            _ if stem.is_empty() || stem.ends_with('_') => {}
            _ => stem.push('_'),
        }
    }
    let trimmed = stem.trim_end_matches('_');
    if trimmed.is_empty() {
        String::from("chord")
    } else {
        trimmed.to_string()
    }
}

fn ms(duration: std::time::Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

// =============================================================================
// Command: render
// =============================================================================

fn cmd_render(
    context: &ChordContext,
    name: &str,
    encoding: Option<&str>,
    format: OutputFormat,
    output: Option<&str>,
    width: Option<u32>,
    json_output: bool,
) -> Result<()> {
    let total_start = Instant::now();

    let mut request = context.request(name);
    if let Some(encoding) = encoding {
        request = request.with_encoding(encoding);
    }

    // Parse
    let parse_start = Instant::now();
    let resolved = resolve(&request, &context.dictionary)
        .context(format!("Cannot render chord {name:?}"))?;
    let parse_time = parse_start.elapsed();
    let model = &resolved.parsed.model;

    debug!(
        "Parsed: strings={}, frets={}..{}, warnings={}",
        model.strings.len(),
        model.start_fret,
        model.end_fret(),
        resolved.parsed.warnings.len()
    );

    // Layout
    let layout_start = Instant::now();
    let scene = layout_chord(model, &request.style, &resolved.name, &request.tuning);
    let layout_time = layout_start.elapsed();

    debug!(
        "Layout: {} primitives on {}x{}",
        scene.primitives.len(),
        scene.width,
        scene.height
    );

    // Render
    let render_start = Instant::now();
    let (rendered, actual_width, actual_height) =
        render_format(&scene, model, &resolved.name, &request.tuning, format, width)?;
    let render_time = render_start.elapsed();

    let total_time = total_start.elapsed();

    if json_output {
        let result = RenderResult {
            format: format!("{format:?}").to_lowercase(),
            chord: resolved.name.clone(),
            encoding: resolved.encoding.clone(),
            string_count: model.strings.len(),
            start_fret: model.start_fret,
            visible_fret_count: model.visible_fret_count,
            has_barre: model.barre().is_some(),
            output_bytes: rendered.len(),
            width: actual_width,
            height: actual_height,
            parse_time_ms: ms(parse_time),
            layout_time_ms: ms(layout_time),
            render_time_ms: ms(render_time),
            total_time_ms: ms(total_time),
            warnings: resolved.parsed.warnings.clone(),
        };

        let json_str = serde_json::to_string_pretty(&result)?;
        eprintln!("{json_str}");
    }

    match format {
        OutputFormat::Png => write_output_bytes(output, &rendered)?,
        _ => write_output(output, &String::from_utf8_lossy(&rendered))?,
    }

    info!(
        "Rendered {} ({} strings) in {:.2}ms",
        resolved.name,
        model.strings.len(),
        ms(total_time)
    );

    Ok(())
}

fn render_format(
    scene: &DiagramScene,
    model: &FrettingModel,
    name: &str,
    tuning: &Tuning,
    format: OutputFormat,
    width: Option<u32>,
) -> Result<(Vec<u8>, Option<u32>, Option<u32>)> {
    match format {
        OutputFormat::Svg => {
            let svg = render_scene_svg(scene, &SvgRenderConfig::default());
            Ok((
                svg.into_bytes(),
                Some(scene.width as u32),
                Some(scene.height as u32),
            ))
        }

        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let svg = render_scene_svg(scene, &SvgRenderConfig::default());
                let (png, px_width, px_height) = svg_to_png(&svg, width)?;
                Ok((png, Some(px_width), Some(px_height)))
            }

            #[cfg(not(feature = "png"))]
            {
                let _ = width;
                anyhow::bail!(
                    "PNG output requires the 'png' feature. \
                     Rebuild with: cargo build --features png"
                );
            }
        }

        OutputFormat::Term => Ok(text_box(model, name, tuning, &TermRenderConfig::default())),

        OutputFormat::Ascii => Ok(text_box(model, name, tuning, &TermRenderConfig::ascii())),
    }
}

fn text_box(
    model: &FrettingModel,
    name: &str,
    tuning: &Tuning,
    config: &TermRenderConfig,
) -> (Vec<u8>, Option<u32>, Option<u32>) {
    let text = render_term(model, name, tuning, config);
    let columns = text.lines().map(|line| line.chars().count()).max();
    let rows = text.lines().count();
    (
        format!("{text}\n").into_bytes(),
        columns.map(|c| c as u32),
        Some(rows as u32),
    )
}

#[cfg(feature = "png")]
fn svg_to_png(svg: &str, width: Option<u32>) -> Result<(Vec<u8>, u32, u32)> {
    use resvg::tiny_skia;
    use usvg::{Options, Transform, Tree};

    let opt = Options::default();
    let tree = Tree::from_str(svg, &opt).context("Failed to parse SVG")?;

    let size = tree.size();
    let (px_width, px_height) = match width {
        Some(w) => {
            let scale = w as f32 / size.width();
            (w, (size.height() * scale) as u32)
        }
        None => (size.width() as u32, size.height() as u32),
    };

    let mut pixmap =
        tiny_skia::Pixmap::new(px_width, px_height).context("Failed to create pixmap")?;

    let scale_x = px_width as f32 / size.width();
    let scale_y = px_height as f32 / size.height();
    resvg::render(
        &tree,
        Transform::from_scale(scale_x, scale_y),
        &mut pixmap.as_mut(),
    );

    let bytes = pixmap.encode_png().context("Failed to encode PNG")?;
    Ok((bytes, px_width, px_height))
}


// =============================================================================
// Command: variants
// =============================================================================

fn cmd_variants(
    context: &ChordContext,
    name: &str,
    mode: VariantsMode,
    out_dir: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let variants = context.dictionary.variants(name);
    if variants.is_empty() {
        eprintln!("no variants for chord {name:?}");
        return Ok(());
    }

    let request = context.request(name);
    let svg_config = SvgRenderConfig::default();
    let mut files: Vec<Option<String>> = vec![None; variants.len()];

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .context(format!("Failed to create directory: {}", dir.display()))?;
    }

    match (mode, out_dir) {
        (VariantsMode::List, _) => {
            if !json_output {
                let mut listing = variants.join("\n");
                listing.push('\n');
                write_output(None, &listing)?;
            }
        }

        (VariantsMode::Sheet, _) => {
            // Never `None` here: `variants` is non-empty.
            let Some(svg) = render_variation_sheet_svg(&request, &context.dictionary, &svg_config)
            else {
                eprintln!("no variants for chord {name:?}");
                return Ok(());
            };
            match out_dir {
                Some(dir) => {
                    let path = dir.join(format!("{}-variants.svg", file_stem(name)));
                    let path = path.to_string_lossy();
                    write_output(Some(path.as_ref()), &svg)?;
                    files.fill(Some(path.into_owned()));
                }
                None => write_output(None, &svg)?,
            }
        }

        (VariantsMode::Render, Some(dir)) => {
            let rendered = render_variations_svg(&request, &context.dictionary, &svg_config);
            for (slot, (variant, svg)) in files.iter_mut().zip(rendered) {
                let path = dir.join(format!("{}.svg", file_stem(&variant)));
                let path = path.to_string_lossy();
                write_output(Some(path.as_ref()), &svg)?;
                *slot = Some(path.into_owned());
            }
        }

        (VariantsMode::Render, None) => {
            let config = TermRenderConfig::default();
            let mut boxes = Vec::with_capacity(variants.len());
            for variant in &variants {
                match resolve(&request.for_name(variant.as_str()), &context.dictionary) {
                    Ok(resolved) => boxes.push(render_term(
                        &resolved.parsed.model,
                        &resolved.name,
                        &context.tuning,
                        &config,
                    )),
                    Err(err) => warn!("Skipping variant {variant:?}: {err}"),
                }
            }
            write_output(None, &format!("{}\n", boxes.join("\n\n")))?;
        }
    }

    info!("{} variants of {name:?}", variants.len());

    if json_output {
        let result = VariantsResult {
            chord: name.to_string(),
            count: variants.len(),
            variants: variants
                .iter()
                .zip(files)
                .map(|(variant, file)| VariantInfo {
                    name: variant.clone(),
                    encoding: context.dictionary.get(variant).unwrap_or_default().to_string(),
                    file,
                })
                .collect(),
        };
        let json_str = serde_json::to_string_pretty(&result)?;
        if mode == VariantsMode::List {
            println!("{json_str}");
        } else {
            eprintln!("{json_str}");
        }
    }

    Ok(())
}

// =============================================================================
// Command: parse
// =============================================================================

fn cmd_parse(input: &str, name: Option<&str>, summary: bool, pretty: bool) -> Result<()> {
    let source = load_input(input)?;
    let parsed = parse_named(name.unwrap_or_default(), source.trim());

    let output = if summary {
        if pretty {
            let value: serde_json::Value = serde_json::from_str(&parse_evidence_json(&parsed))?;
            serde_json::to_string_pretty(&value)?
        } else {
            parse_evidence_json(&parsed)
        }
    } else if pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };

    println!("{output}");
    Ok(())
}

// =============================================================================
// Command: list
// =============================================================================

fn cmd_list(source: &DictionaryArgs, filter: Option<&str>) -> Result<()> {
    let dictionary = load_dictionary(source.dictionary.as_deref())?;

    let mut listing = String::new();
    for base in base_names(dictionary.names())
        .into_iter()
        .filter(|base| filter.is_none_or(|text| base.contains(text)))
    {
        listing.push_str(&base);
        listing.push('\n');
    }

    write_output(None, &listing)
}

// =============================================================================
// Command: validate
// =============================================================================

fn cmd_validate(source: &DictionaryArgs, json_output: bool, strict: bool) -> Result<()> {
    let dictionary = load_dictionary(source.dictionary.as_deref())?;
    let source_label = source.dictionary.as_ref().map_or_else(
        || String::from("built-in"),
        |path| path.display().to_string(),
    );

    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut clean_count = 0;

    for (position, entry) in dictionary.entries().iter().enumerate() {
        match resolve(&ChordRequest::named(entry.name.as_str()), &dictionary) {
            Ok(resolved) if resolved.parsed.is_clean() => clean_count += 1,
            Ok(resolved) => {
                warnings.extend(resolved.parsed.warnings.into_iter().map(|warning| {
                    ValidationWarning {
                        code: warning.code.as_str().to_string(),
                        chord: warning.chord,
                        token: warning.token,
                        string_index: warning.string_index,
                        message: warning.message,
                    }
                }));
            }
            Err(err) => errors.push(ValidationError {
                code: err.code().as_str().to_string(),
                chord: entry.name.clone(),
                entry: position,
                message: err.to_string(),
            }),
        }
    }

    let valid = errors.is_empty() && (!strict || warnings.is_empty());

    let result = ValidateResult {
        valid,
        source: source_label,
        chord_count: dictionary.len(),
        clean_count,
        warnings,
        errors,
    };

    if json_output {
        let output = serde_json::to_string_pretty(&result)?;
        println!("{output}");
    } else {
        if result.valid {
            println!("✓ Valid chord dictionary ({})", result.source);
        } else {
            println!("✗ Invalid chord dictionary ({})", result.source);
        }
        println!("  Chords: {}", result.chord_count);
        println!("  Clean:  {}", result.clean_count);

        if !result.errors.is_empty() {
            println!("\nErrors:");
            for err in &result.errors {
                println!("  [{}] entry {}: {}", err.code, err.entry, err.message);
            }
        }

        if !result.warnings.is_empty() {
            println!("\nWarnings:");
            for warn in &result.warnings {
                println!("  [{}] {}", warn.code, warn.message);
            }
        }
    }

    if !result.valid {
        std::process::exit(1);
    }

    Ok(())
}
