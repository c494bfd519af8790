mod config;
mod preview;

use anyhow::Result;
use ramp_engine::logging::init_logging;

use config::{StudioConfig, USAGE};

fn main() {
    let config = match StudioConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            // No logger yet; argument errors go straight to stderr.
            eprintln!("ramp-studio: {e:#}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if config.show_help {
        println!("{USAGE}");
        return;
    }

    init_logging(config.logging.clone());

    if let Err(e) = run(&config) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: &StudioConfig) -> Result<()> {
    let gradient = config.gradient();
    log::debug!(
        "{} stops, mode {}, spread {}",
        gradient.stops().len(),
        gradient.interpolation_mode(),
        gradient.spread()
    );

    println!();
    println!("  ── ramp ── {} · {} ──", gradient.interpolation_mode(), gradient.spread());
    for stop in gradient.stops().iter() {
        println!("  stop {:>7.4}  {}  w={:.2}", stop.position, stop.color, stop.weight);
    }
    println!();

    let n = config.samples;
    for (i, color) in gradient.samples(n).enumerate() {
        let pos = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
        let [r, g, b, _] = color.to_srgb_u8();
        println!("  {pos:>7.4}  {color}  \x1b[48;2;{r};{g};{b}m        \x1b[0m");
    }
    println!();

    if let Some(path) = &config.png {
        preview::write_png(&gradient, path, config.width, config.height)?;
    }
    Ok(())
}
