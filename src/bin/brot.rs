// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate crossbeam;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use crossbeam::channel::{unbounded, Receiver, RecvTimeoutError};
use mandelbrot::{palette, BlendMode, RenderConfig, RenderSummary};
use std::io::{self, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_float(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const PALETTE: &str = "palette";
const STEP: &str = "step";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const XPOS: &str = "xpos";
const YPOS: &str = "ypos";
const RADIUS: &str = "radius";
const ITERATION: &str = "iteration";
const SMOOTHNESS: &str = "smoothness";
const FILE: &str = "file";
const THREADS: &str = "threads";
const BLEND: &str = "blend";
const LIST_PALETTES: &str = "list-palettes";
const VERBOSE: &str = "verbose";

fn args() -> ArgMatches<'static> {
    App::new("brot")
        .version("0.1.0")
        .about("Smoothed-palette Mandelbrot renderer")
        .arg(
            Arg::with_name(PALETTE)
                .long(PALETTE)
                .short("p")
                .takes_value(true)
                .default_value("Hippi")
                .help("Palette keyword; see --list-palettes"),
        )
        .arg(
            Arg::with_name(STEP)
                .long(STEP)
                .takes_value(true)
                .default_value("6000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1.0,
                        10_000_000.0,
                        "Could not parse color step",
                        "Color step must be between 1 and 10000000",
                    )
                })
                .help("Color smooth step; raised to the iteration count if lower"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .long(WIDTH)
                .short("W")
                .takes_value(true)
                .default_value("1024")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        65_535,
                        "Could not parse width",
                        "Width must be between 1 and 65535",
                    )
                })
                .help("Rendered image width"),
        )
        .arg(
            Arg::with_name(HEIGHT)
                .long(HEIGHT)
                .short("H")
                .takes_value(true)
                .default_value("768")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        65_535,
                        "Could not parse height",
                        "Height must be between 1 and 65535",
                    )
                })
                .help("Rendered image height"),
        )
        .arg(
            Arg::with_name(XPOS)
                .long(XPOS)
                .short("x")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.00275")
                .validator(|s| validate_float(&s, "Could not parse x position"))
                .help("Point position on the real axis"),
        )
        .arg(
            Arg::with_name(YPOS)
                .long(YPOS)
                .short("y")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.78912")
                .validator(|s| validate_float(&s, "Could not parse y position"))
                .help("Point position on the imaginary axis"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .long(RADIUS)
                .short("r")
                .takes_value(true)
                .default_value("0.125689")
                .validator(|s| validate_float(&s, "Could not parse radius"))
                .help("Escape radius"),
        )
        .arg(
            Arg::with_name(ITERATION)
                .long(ITERATION)
                .short("i")
                .takes_value(true)
                .default_value("800")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration count"),
        )
        .arg(
            Arg::with_name(SMOOTHNESS)
                .long(SMOOTHNESS)
                .short("s")
                .takes_value(true)
                .default_value("8")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        64,
                        "Could not parse smoothness",
                        "Smoothness must be between 1 and 64",
                    )
                })
                .help("Oversampling factor; use 4 for 4xAA"),
        )
        .arg(
            Arg::with_name(FILE)
                .long(FILE)
                .short("f")
                .takes_value(true)
                .default_value("mandelbrot.png")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse thread count",
                        "Thread count must be between 1 and 1024",
                    )
                })
                .help("Number of threads to use in the renderer [default: number of CPUs]"),
        )
        .arg(
            Arg::with_name(BLEND)
                .long(BLEND)
                .takes_value(true)
                .possible_values(&["reference", "smooth"])
                .default_value("reference")
                .help("How neighbouring gradient colors are mixed"),
        )
        .arg(
            Arg::with_name(LIST_PALETTES)
                .long(LIST_PALETTES)
                .help("Print the available palettes and exit"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches()
}

fn parse<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error> {
    let value = matches
        .value_of(name)
        .ok_or_else(|| failure::format_err!("missing value for --{}", name))?;
    T::from_str(value).map_err(|_| failure::format_err!("could not parse --{} {:?}", name, value))
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, failure::Error> {
    Ok(RenderConfig {
        palette: parse(matches, PALETTE)?,
        x: parse(matches, XPOS)?,
        y: parse(matches, YPOS)?,
        radius: parse(matches, RADIUS)?,
        width: parse(matches, WIDTH)?,
        height: parse(matches, HEIGHT)?,
        smoothness: parse(matches, SMOOTHNESS)?,
        max_iterations: parse(matches, ITERATION)?,
        color_step: parse(matches, STEP)?,
        threads: if matches.is_present(THREADS) {
            parse(matches, THREADS)?
        } else {
            num_cpus::get()
        },
        blend: parse::<BlendMode>(matches, BLEND)?,
    })
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Prints a dot every tenth of a second until the render reports in.
fn progress(done: Receiver<RenderSummary>) -> thread::JoinHandle<Option<RenderSummary>> {
    thread::spawn(move || loop {
        match done.recv_timeout(Duration::from_millis(100)) {
            Ok(summary) => {
                println!();
                return Some(summary);
            }
            Err(RecvTimeoutError::Timeout) => {
                print!(".");
                let _ = io::stdout().flush();
            }
            Err(RecvTimeoutError::Disconnected) => {
                println!();
                return None;
            }
        }
    })
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    if matches.is_present(LIST_PALETTES) {
        for keyword in palette::keywords() {
            println!("{}", keyword);
        }
        return Ok(());
    }

    let config = config(matches)?;
    let file = matches.value_of(FILE).unwrap_or("mandelbrot.png");
    info!("{:?}", config);

    print!("Rendering image...");
    let _ = io::stdout().flush();
    let (tx, rx) = unbounded();
    let reporter = progress(rx);
    let rendered = mandelbrot::render_with_signal(&config, &tx);
    drop(tx);
    let summary = reporter.join().unwrap_or(None);
    let buffer = rendered?;

    mandelbrot::output::write_png(file, &buffer)?;
    if let Some(summary) = summary {
        info!("{} of {} pixels painted in {:?}", summary.painted, buffer.len(), summary.elapsed);
    }
    println!("\nMandelbrot set rendered into `{}`", file);
    Ok(())
}

fn main() {
    let matches = args();
    init_logging(matches.occurrences_of(VERBOSE));

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        for cause in e.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
