// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate juliazoom;
extern crate log;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use log::{error, info};
use std::path::PathBuf;
use std::str::FromStr;

use juliazoom::RunOptions;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Output image size must be at least 1x1".to_string()),
        None => Err("Could not parse output image size (each side at most 65535)".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const FRAMES: &str = "frames";
const FIRST: &str = "first";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("juliazoom")
        .version("0.1.0")
        .about("Renders a zoom into a Julia set as numbered JPEG frames")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("Output")
                .help("Directory the frames are written to"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1920x1080")
                .validator(|s| validate_size(&s))
                .help("Size of each frame"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .required(false)
                .long(FRAMES)
                .short("f")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        9999,
                        "Could not parse frame count",
                        "Frame count must be between 1 and 9999",
                    )
                })
                .help("Number of frames to render"),
        )
        .arg(
            Arg::with_name(FIRST)
                .required(false)
                .long(FIRST)
                .short("F")
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        9999,
                        "Could not parse first frame",
                        "First frame must be between 1 and 9999",
                    )
                })
                .help("Frame to start from, for resuming an interrupted run"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use per frame (default: one per CPU)"),
        )
        .get_matches()
}

/// Pull a validated value back out of the matches.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Option<T> {
    matches.value_of(name).and_then(|s| T::from_str(s).ok())
}

fn options(matches: &ArgMatches) -> Option<RunOptions> {
    let (width, height) = parse_pair::<u16>(matches.value_of(SIZE)?, 'x')?;
    Some(RunOptions {
        output: PathBuf::from(matches.value_of(OUTPUT)?),
        width: usize::from(width),
        height: usize::from(height),
        first: value(matches, FIRST)?,
        frames: value(matches, FRAMES)?,
        threads: value(matches, THREADS).unwrap_or_else(num_cpus::get),
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let matches = args();
    let options = match options(&matches) {
        Some(options) => options,
        None => {
            error!("Could not read the command line");
            std::process::exit(2);
        }
    };

    match juliazoom::run(&options) {
        Err(e) => {
            error!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(written) => {
            info!("Wrote {} frame(s) to {}", written, options.output.display());
        }
    }
}
