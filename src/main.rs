use anyhow::Result;
use canvas_snake::app::App;
use canvas_snake::game::GameConfig;
use clap::Parser;

#[derive(Parser)]
#[command(name = "canvas_snake")]
#[command(version, about = "Classic grid snake in the terminal")]
struct Cli {
    /// Field width in pixels
    #[arg(long, default_value = "600")]
    field_width: i32,

    /// Field height in pixels
    #[arg(long, default_value = "600")]
    field_height: i32,

    /// Cell size in pixels
    #[arg(long, default_value = "20")]
    cell_size: i32,

    /// Simulation rate in ticks per second
    #[arg(long, default_value = "5")]
    tick_hz: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig {
        field_width: cli.field_width,
        field_height: cli.field_height,
        cell_size: cli.cell_size,
        tick_hz: cli.tick_hz,
    };
    config.validate()?;

    let mut app = App::new(config);
    app.run().await
}
