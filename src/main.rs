use anyhow::Result;
use console::style;
use log::{info, warn};
use video_catalog::component::VideoCataloger;
use video_catalog::config::Config;
use video_catalog::init;

fn main() -> Result<()> {
    init::init();

    let config = Config::new()?;
    let folder = std::env::args().nth(1);

    let mut cataloger = VideoCataloger::new(config);
    if let Err(e) = cataloger.run(folder) {
        warn!("Program error: {e:#}");
        eprintln!("{} {:#}", style("錯誤:").red().bold(), e);
        std::process::exit(1);
    }

    info!("Program exited normally");
    Ok(())
}
