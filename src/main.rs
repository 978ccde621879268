use anyhow::Context;
use clap::Parser;
use screenwriter::backend::CairoSurface;
use screenwriter::draw::{BLACK, BLUE, DrawingSurface, GREEN, RED, YELLOW};
use screenwriter::{Config, ScreenWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "screenwriter")]
#[command(version, about = "Retained-mode drawing surface demo")]
struct Cli {
    /// Render the showcase scene into this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Surface width in pixels (overrides config)
    #[arg(long)]
    width: Option<i32>,

    /// Surface height in pixels (overrides config)
    #[arg(long)]
    height: Option<i32>,

    /// Read settings from this file instead of ~/.config/screenwriter/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(output) = cli.output else {
        println!("screenwriter: Retained-mode drawing surface demo");
        println!();
        println!("Usage:");
        println!("  screenwriter --output scene.png    Draw the showcase scene to a PNG");
        println!("  screenwriter --help                Show help");
        println!();
        println!("Settings are read from ~/.config/screenwriter/config.toml when present.");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let width = cli.width.unwrap_or(config.surface.width);
    let height = cli.height.unwrap_or(config.surface.height);

    let mut writer = ScreenWriter::acquire(
        || CairoSurface::acquire(width, height),
        config.render_style(),
    )?;
    writer.redraw_screen();
    draw_showcase(&mut writer)?;

    writer
        .surface()
        .write_png(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "Wrote {} shapes to {}",
        writer.store().len(),
        output.display()
    );
    print_summary(&writer, &output);

    Ok(())
}

/// Exercises every shape kind plus one move and one delete.
fn draw_showcase(writer: &mut ScreenWriter<CairoSurface>) -> anyhow::Result<()> {
    let (width, height) = writer.surface().dimensions();

    writer.draw_rectangle(10, 10, width / 3, height / 3, RED);
    let diagonal = writer.draw_line(0, 0, width, height, BLACK);
    let triangle = writer.draw_polygon(
        &[(width / 2, 20), (width / 2 + 60, 100), (width / 2 - 60, 100)],
        GREEN,
    )?;

    let icon = writer.surface_mut().insert_icon(solid_image(8, 8, YELLOW)?);
    writer.draw_icon(icon, 20, height - 60);

    let bitmap = writer.surface_mut().insert_bitmap(solid_image(64, 48, BLUE)?);
    writer.draw_bitmap(bitmap, width - 80, height - 60, 64, 48);

    writer.move_shape(triangle, 0, height / 3);
    // Ids are positional: the triangle sits at `diagonal` once the line is gone.
    writer.delete_shape(diagonal);
    Ok(())
}

fn solid_image(
    width: i32,
    height: i32,
    color: screenwriter::draw::Color,
) -> anyhow::Result<cairo::ImageSurface> {
    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image")?;
    {
        let ctx = cairo::Context::new(&image).context("Failed to create Cairo context")?;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.paint().context("Failed to paint image")?;
    }
    Ok(image)
}

fn print_summary(writer: &ScreenWriter<CairoSurface>, output: &Path) {
    println!("Wrote {}", output.display());
    for (index, shape) in writer.store().shapes().iter().enumerate() {
        let color = shape
            .color()
            .map(|c| screenwriter::util::color_to_name(&c))
            .unwrap_or("-");
        println!("  #{index} {:?} ({color})", shape.kind());
    }
}
