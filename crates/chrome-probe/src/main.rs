use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use indoc::indoc;

use tab_chrome::chrome::{HitTestOutcome, TitlebarChromeController};
use tab_chrome::config::ChromeConfig;
use tab_chrome::geometry::{Point, Rect};
use tab_chrome::host::WindowState;
use tab_chrome::sim::{FixedCorner, FixedMetrics, FixedTabStrip, SimCompositor, SimWindow};

#[derive(Parser, Debug)]
#[command(
    name = "chrome-probe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print the non-client region the titlebar chrome reports for screen points",
    after_help = indoc! {"
        Example:
          chrome-probe --window 100,100,900,700 104,105 500,110 500,400

        Each point prints `x,y<TAB>region<TAB>code`, where code is the HT* value
        returned to the window manager. `nowhere` is forwarded to the toolkit.
    "}
)]
struct ProbeCli {
    /// Window bounds in screen pixels as LEFT,TOP,RIGHT,BOTTOM.
    #[arg(long, value_name = "RECT", value_parser = parse_rect, default_value = "100,100,900,700")]
    window: Rect,

    /// Resizable-border metric.
    #[arg(long, value_name = "PX", default_value_t = 8)]
    frame: i32,

    /// Caption-height metric; three quarters become the titlebar frame.
    #[arg(long, value_name = "PX", default_value_t = 32)]
    caption: i32,

    /// Top frame line of the window manager's captionless frame.
    #[arg(long, value_name = "PX", default_value_t = 8)]
    system_frame_top: i32,

    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    tabs: usize,

    #[arg(long, value_name = "PX", default_value_t = 120)]
    tab_width: i32,

    #[arg(long, value_name = "PX", default_value_t = 32)]
    tab_height: i32,

    /// Leading corner widget as WIDTH,HEIGHT.
    #[arg(long, value_name = "SIZE", value_parser = parse_point)]
    corner: Option<Point>,

    #[arg(long)]
    maximized: bool,

    /// Simulate a desktop without composition.
    #[arg(long)]
    no_composition: bool,

    /// Log controller decisions to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Screen points as X,Y.
    #[arg(
        value_name = "POINT",
        value_parser = parse_point,
        required = true,
        allow_hyphen_values = true
    )]
    points: Vec<Point>,
}

struct ProbeConfig {
    window: Rect,
    metrics: FixedMetrics,
    tabs: FixedTabStrip,
    corner: Option<FixedCorner>,
    state: WindowState,
    composition: bool,
}

impl TryFrom<&ProbeCli> for ProbeConfig {
    type Error = String;

    fn try_from(cli: &ProbeCli) -> Result<Self, Self::Error> {
        if cli.window.is_empty() {
            return Err("window rectangle must have a positive size".to_string());
        }
        if cli.frame < 0 || cli.caption < 0 || cli.system_frame_top < 0 {
            return Err("metrics must not be negative".to_string());
        }
        if cli.tab_width <= 0 || cli.tab_height <= 0 {
            return Err("tab width and height must be positive".to_string());
        }
        let corner = match cli.corner {
            Some(size) if size.x < 0 || size.y < 0 => {
                return Err("corner size must not be negative".to_string());
            }
            Some(size) => Some(FixedCorner::new(size.x, size.y)),
            None => None,
        };
        Ok(Self {
            window: cli.window,
            metrics: FixedMetrics::new(cli.frame, cli.caption, cli.system_frame_top),
            tabs: FixedTabStrip::new(cli.tab_width, cli.tabs, cli.tab_height),
            corner,
            state: if cli.maximized {
                WindowState::Maximized
            } else {
                WindowState::Normal
            },
            composition: !cli.no_composition,
        })
    }
}

fn parse_ints<const N: usize>(text: &str) -> Result<[i32; N], String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated integers, got `{text}`"));
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("`{part}` is not an integer"))?;
    }
    Ok(out)
}

fn parse_rect(text: &str) -> Result<Rect, String> {
    let [left, top, right, bottom] = parse_ints::<4>(text)?;
    Ok(Rect::new(left, top, right, bottom))
}

fn parse_point(text: &str) -> Result<Point, String> {
    let [x, y] = parse_ints::<2>(text)?;
    Ok(Point::new(x, y))
}

fn main() -> ExitCode {
    let args = ProbeCli::parse();
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tab_chrome::tracing_sub::init_with_level(level);

    let config = match ProbeConfig::try_from(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("chrome-probe: {err}");
            return ExitCode::from(2);
        }
    };
    match run(&config, &args.points, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("chrome-probe: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ProbeConfig, points: &[Point], out: &mut impl Write) -> io::Result<()> {
    let window = SimWindow::new(config.window, config.metrics).with_state(config.state);
    let compositor = if config.composition {
        SimCompositor::available()
    } else {
        SimCompositor::unavailable()
    };
    let mut chrome =
        TitlebarChromeController::new(ChromeConfig::default(), compositor, &window, &config.tabs);
    if let Some(corner) = config.corner.as_ref() {
        chrome.set_corner_widget(corner);
    }

    if let Some(state) = chrome.state() {
        writeln!(
            out,
            "# frame={} titlebar={} band={} maximized={}",
            state.window_frame_width(),
            state.titlebar_frame_width(),
            state.tab_strip_height(),
            state.is_maximized()
        )?;
    }
    for point in points {
        match chrome.classify(*point) {
            Some(HitTestOutcome::Region(region)) => writeln!(
                out,
                "{},{}\t{}\t{}",
                point.x,
                point.y,
                region.name(),
                region.code()
            )?,
            Some(HitTestOutcome::System(code)) => {
                writeln!(out, "{},{}\tsystem\t{}", point.x, point.y, code)?
            }
            None => writeln!(out, "{},{}\tnative\t-", point.x, point.y)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(extra: &[&str]) -> ProbeCli {
        let mut argv = vec!["chrome-probe"];
        argv.extend_from_slice(extra);
        ProbeCli::parse_from(argv)
    }

    fn output(extra: &[&str]) -> String {
        let args = cli(extra);
        let config = ProbeConfig::try_from(&args).expect("valid config");
        let mut buf = Vec::new();
        run(&config, &args.points, &mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn prints_regions_for_reference_window() {
        let out = output(&["104,105", "500,110", "500,400"]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "# frame=8 titlebar=24 band=32 maximized=false");
        assert_eq!(lines[1], "104,105\ttop-left\t13");
        // caption sliver above the tab strip
        assert_eq!(lines[2], "500,110\tcaption\t2");
        assert_eq!(lines[3], "500,400\tnowhere\t0");
    }

    #[test]
    fn no_composition_reports_native() {
        let out = output(&["--no-composition", "104,105"]);
        assert_eq!(out, "104,105\tnative\t-\n");
    }

    #[test]
    fn rejects_degenerate_window() {
        let args = cli(&["--window", "10,10,10,50", "1,1"]);
        assert!(ProbeConfig::try_from(&args).is_err());
    }

    #[test]
    fn parses_coordinate_lists() {
        assert_eq!(parse_point(" -4, 7"), Ok(Point::new(-4, 7)));
        assert_eq!(parse_rect("0,0,1920,1040"), Ok(Rect::new(0, 0, 1920, 1040)));
        assert!(parse_point("1,2,3").is_err());
        assert!(parse_rect("a,b,c,d").is_err());
    }
}
