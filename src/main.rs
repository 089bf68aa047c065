use mandelbrot_explorer::{ExplorerConfig, PpmFilePresenter, SnapshotController};

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let filepath = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_owned());
    let presenter = PpmFilePresenter::new();
    let mut controller = SnapshotController::new(presenter, ExplorerConfig::default());

    controller.generate()?;
    controller.write(filepath)?;

    Ok(())
}
