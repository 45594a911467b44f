//! Desktop entry point: configure the window and launch the shell loop.

use blockdrop::{LayoutError, Overlay, Section, Shell, WindowConfig};

/// Build the Tetris screen layout: playfield in the middle, score and piece
/// preview in the top corners.
fn build_overlay(config: &WindowConfig) -> Result<Overlay, LayoutError> {
    let board = Section::from_properties([
        "name:board",
        "prop_x:0.25",
        "prop_width:0.5",
        "prop_height:1.0",
    ])?;
    let score = Section::from_properties(["name:score", "prop_width:0.25", "prop_height:0.25"])?;
    let preview = Section::from_properties([
        "name:preview",
        "prop_x:0.75",
        "prop_width:0.25",
        "prop_height:0.25",
    ])?;

    Overlay::new(config.width, config.height, [board, score, preview])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = WindowConfig::default();
    let mut overlay = build_overlay(&config)?;

    let mut shell = Shell::with_config(config)?;
    shell.run(&mut overlay);

    Ok(())
}
