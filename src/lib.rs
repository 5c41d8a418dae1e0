use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod image;

use image::Image;

#[derive(Debug)]
pub enum Error {
    ZeroDimension(usize, usize),
    SizeMismatch(usize, usize, usize),
    InvalidPixelChar(char, usize),
    NoLayer,
    InvalidProblem,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ZeroDimension(width, height) => write!(
                f,
                "Image dimension {} x {} has no pixel in a layer.",
                width, height
            ),
            Error::SizeMismatch(len, width, height) => write!(
                f,
                "Incorrect size of input: {}, which can't be divided exactly by layer size {} x {}.",
                len, width, height
            ),
            Error::InvalidPixelChar(c, ind) => write!(
                f,
                "Invalid character({:?}) for pixel at index {}, expect a decimal digit.",
                c, ind
            ),
            Error::NoLayer => write!(f, "There is no layer in given image."),
            Error::InvalidProblem => write!(f, "Must provide one of: [problem1, problem2]"),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Which answer to print, problem1 (checksum) or problem2 (rendered image).
    pub problem: Option<String>,
    #[arg(short, long, default_value = "inputs.txt")]
    pub input_path: PathBuf,
    #[arg(long, default_value_t = 25)]
    pub width: usize,
    #[arg(long, default_value_t = 6)]
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Checksum,
    Render,
}

impl TryFrom<Option<&str>> for Problem {
    type Error = Error;

    fn try_from(value: Option<&str>) -> std::result::Result<Self, Self::Error> {
        match value {
            Some("problem1") => Ok(Problem::Checksum),
            Some("problem2") => Ok(Problem::Render),
            _ => Err(Error::InvalidProblem),
        }
    }
}

pub fn read_image<P: AsRef<Path>>(path: P, width: usize, height: usize) -> Result<Image> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;
    let digits = text
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(text.as_str());

    let image = Image::load(digits, width, height).with_context(|| {
        format!(
            "Failed to load image from given file({}).",
            path.as_ref().display()
        )
    })?;
    log::debug!(
        "Loaded {} layer(s) of {} x {} from {}.",
        image.layers().len(),
        width,
        height,
        path.as_ref().display()
    );

    Ok(image)
}
