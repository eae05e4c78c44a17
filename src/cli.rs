use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "normalray")]
#[command(about = "Render normal-shaded spheres to a PPM image")]
pub struct Args {
    /// Scene description (JSON). Without it the built-in two-sphere scene is used
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels")]
    pub width: Option<u32>,

    /// Image width over height
    #[arg(long, help = "Image width over height, e.g. 1.7777")]
    pub aspect_ratio: Option<f64>,

    /// Number of samples per pixel
    #[arg(long, short = 's', help = "Number of samples per pixel (1 disables anti-aliasing)")]
    pub samples_per_pixel: Option<u32>,

    /// Seed for anti-aliasing jitter
    #[arg(long, help = "Seed for anti-aliasing jitter (random when omitted)")]
    pub seed: Option<u64>,

    /// Output file path; the P3 stream goes to stdout when omitted
    #[arg(
        short,
        long,
        help = "Output file path (.ppm, .png or .exr); writes PPM to stdout when omitted"
    )]
    pub output: Option<PathBuf>,
}
