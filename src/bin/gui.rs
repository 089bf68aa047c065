use mandelbrot_explorer::{ExplorerConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), ExplorerConfig::default());

    command.execute()
}
