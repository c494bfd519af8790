use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use ramp_engine::gradient::{Gradient, InterpolationMode, NormalizeMode, SpreadMode, Stop};
use ramp_engine::logging::LoggingConfig;

pub const USAGE: &str = "\
usage: ramp-studio [options] [pos:#rrggbb[aa][:weight] ...]

options:
  --mode <fn[-space]>   discrete | linear | cubic, optionally -rgb/-hsv/-hsl/-cmyk
  --spread <mode>       pad | repeat | reflect
  --truncate            drop stops outside [0, 1] instead of rescaling
  --samples <n>         number of samples to print (default 16)
  --png <path>          also write a preview strip
  --width <px>          preview width (default 512)
  --height <px>         preview height (default 32)
  --log <filter>        env_logger filter, e.g. ramp_engine=debug
  -h, --help            show this text";

/// Run configuration for the studio front end.
///
/// Defaults reproduce the stock gradient (black to white, linear RGB, pad).
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Stop literals as given. Empty means the default gradient.
    pub stops: Vec<Stop>,
    pub mode: InterpolationMode,
    pub spread: SpreadMode,
    pub normalize: NormalizeMode,
    pub samples: usize,
    pub png: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub logging: LoggingConfig,
    pub show_help: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            stops: Vec::new(),
            mode: InterpolationMode::default(),
            spread: SpreadMode::default(),
            normalize: NormalizeMode::Normalize,
            samples: 16,
            png: None,
            width: 512,
            height: 32,
            logging: LoggingConfig::default(),
            show_help: false,
        }
    }
}

impl StudioConfig {
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .with_context(|| format!("missing value for {flag}"))
            };
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "--truncate" => config.normalize = NormalizeMode::Truncate,
                "--mode" => {
                    config.mode = value("--mode")?.parse().context("invalid --mode")?;
                }
                "--spread" => {
                    config.spread = value("--spread")?.parse().context("invalid --spread")?;
                }
                "--samples" => {
                    config.samples = value("--samples")?.parse().context("invalid --samples")?;
                }
                "--png" => config.png = Some(PathBuf::from(value("--png")?)),
                "--width" => {
                    config.width = value("--width")?.parse().context("invalid --width")?;
                }
                "--height" => {
                    config.height = value("--height")?.parse().context("invalid --height")?;
                }
                "--log" => config.logging = LoggingConfig::with_filter(value("--log")?),
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                literal => {
                    let stop: Stop = literal
                        .parse()
                        .with_context(|| format!("invalid stop literal '{literal}'"))?;
                    config.stops.push(stop);
                }
            }
        }

        ensure!(config.width > 0 && config.height > 0, "preview size must be non-zero");
        Ok(config)
    }

    pub fn gradient(&self) -> Gradient {
        if self.stops.is_empty() {
            let mut g = Gradient::default();
            g.set_interpolation_mode(self.mode);
            g.set_spread(self.spread);
            return g;
        }
        Gradient::new(self.stops.iter().copied(), self.mode, self.spread, self.normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ramp_engine::gradient::InterpolationFunction;
    use ramp_engine::paint::{Color, Colorspace};

    fn parse(args: &[&str]) -> Result<StudioConfig> {
        StudioConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_is_default_gradient() {
        let c = parse(&[]).unwrap();
        assert_eq!(c.samples, 16);
        assert_eq!(c.gradient(), Gradient::default());
    }

    #[test]
    fn full_command_line() {
        let c = parse(&[
            "--mode", "cubic-hsl", "--spread", "repeat", "--samples", "4", "--truncate",
            "0.2:#ff0000", "0.8:#0000ff:0.3", "--png", "out.png", "--height", "8",
        ])
        .unwrap();
        assert_eq!(c.mode, InterpolationMode::new(InterpolationFunction::Cubic, Colorspace::Hsl));
        assert_eq!(c.spread, SpreadMode::Repeat);
        assert_eq!(c.normalize, NormalizeMode::Truncate);
        assert_eq!(c.samples, 4);
        assert_eq!(c.png, Some(PathBuf::from("out.png")));
        assert_eq!(c.height, 8);

        let g = c.gradient();
        assert_eq!(g.stops().positions().collect::<Vec<_>>(), vec![0.0, 0.2, 0.8, 1.0]);
        assert_eq!(g.at(0.0), Color::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn errors_are_reported() {
        assert!(parse(&["--samples"]).is_err());
        assert!(parse(&["--samples", "many"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["0.5:purple"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
    }
}
