//! Text block demo application
//!
//! Lays out a paragraph on the letter background, underlines it, and logs
//! the recorded draw commands.
//!
//! Usage: `text_block_demo [style.toml|style.ron] [font.ttf]`

use std::path::PathBuf;

use sprite_text::foundation::logging;
use sprite_text::prelude::*;
use thiserror::Error;

const PARAGRAPH: &str = "Dear farmer,\nThe community center needs your help. \
    Bring what you can spare from the fields and the mines, and the old \
    building will come back to life.";

/// Padding between the letter edge and the text
const PADDING: f32 = 16.0;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Failed to read font {}: {}", .0.display(), .1)]
    FontFile(PathBuf, std::io::Error),

    #[error("Draw error: {0}")]
    Batch(#[from] BatchError),

    #[error("Text error: {0}")]
    Text(#[from] TextError),
}

fn load_metrics(font_path: Option<PathBuf>) -> Result<Box<dyn FontMetrics>, DemoError> {
    match font_path {
        Some(path) => {
            let bytes = std::fs::read(&path).map_err(|e| DemoError::FontFile(path.clone(), e))?;
            Ok(Box::new(FontdueMetrics::from_bytes(&bytes, 18.0)?))
        }
        None => {
            log::info!("No font given, using 8x16 monospace metrics");
            Ok(Box::new(MonospaceMetrics::new(8.0, 16.0)))
        }
    }
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let config = match args.next() {
        Some(path) => StyleConfig::load_from_file(path)?,
        None => StyleConfig::default(),
    };
    let metrics = load_metrics(args.next())?;

    // Sheets are normally uploaded by the GPU backend; register their sizes
    let mut assets = TextureRegistry::new(["assets"]);
    assets.insert(SpriteTable::LETTER_SHEET, 320, 180);
    assets.insert(SpriteTable::CURSORS_SHEET, 640, 2000);

    let mut renderer = FauxBold::new(DrawQueue::new());
    let letter = config.sprites.letter()?;
    let origin = Vec2::new(40.0, 40.0);
    let scale = config.block.scale;

    let mut batch = SpriteBatch::new(&mut renderer);
    batch.draw_sprite(&mut assets, letter, origin.x, origin.y, config.block)?;

    #[allow(clippy::cast_precision_loss)]
    let wrap_width = (letter.source.width as f32).mul_add(scale, -2.0 * PADDING);
    let text_origin = origin + Vec2::new(PADDING, PADDING);
    let size = batch.draw_string_block(
        &*metrics,
        Some(PARAGRAPH),
        text_origin,
        wrap_width,
        &config.text,
    )?;

    batch.draw_line(
        &mut assets,
        &config.sprites,
        text_origin.x,
        text_origin.y + size.height + 2.0,
        Vec2::new(size.width, 1.0),
        config.text.color,
    )?;

    log::info!(
        "Text block {}x{} within wrap width {wrap_width}",
        size.width,
        size.height
    );

    let queue = renderer.into_inner();
    queue.execute(|command| match command {
        DrawCommand::Word { text, position, .. } => {
            log::info!("word  {text:>14} at ({:6.1}, {:6.1})", position.x, position.y);
        }
        DrawCommand::Block { texture, source, position, .. } => {
            log::info!("block {texture:?} {source:?} at ({}, {})", position.x, position.y);
        }
        DrawCommand::Stretched { texture, destination, .. } => {
            log::info!("line  {texture:?} over {destination:?}");
        }
    });
    log::info!("{} draw commands recorded", queue.len());

    Ok(())
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
