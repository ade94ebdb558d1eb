use clap::Parser;
use color_eyre::eyre::Result;

use tabmarquee::app::MarqueeDriver;
use tabmarquee::error;
use tabmarquee::logging;
use tabmarquee::ui::TerminalTitleSink;

/// CLI arguments (empty, but needed for --help and --version)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;
    logging::init()?;

    Args::parse(); // --help, --version

    let driver = MarqueeDriver::default();
    let mut marquee = driver.activate(TerminalTitleSink::new());

    tokio::signal::ctrl_c().await?;
    marquee.deactivate();

    Ok(())
}
