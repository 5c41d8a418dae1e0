use std::{collections::BTreeMap, fmt::Display};

use crate::Error;

pub const BLACK: u8 = 0;
pub const WHITE: u8 = 1;
pub const TRANSPARENT: u8 = 2;

const BLACK_SYMBOL: char = ' ';
const WHITE_SYMBOL: char = 'X';
const SEE_THROUGH_SYMBOL: char = '.';

/// Occurrence count of each pixel value found in one layer.
pub type ColorCounts = BTreeMap<u8, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Layer {
    fn new(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn count_colors(&self) -> ColorCounts {
        let mut counts = ColorCounts::new();
        for &p in &self.pixels {
            *counts.entry(p).or_insert(0) += 1;
        }

        counts
    }
}

#[derive(Debug, Clone)]
pub struct Image {
    layers: Vec<Layer>,
    width: usize,
    height: usize,
}

impl Image {
    /// Splits a digit string into layers of `width * height` pixels each,
    /// in transmission order.
    pub fn load(input: &str, width: usize, height: usize) -> Result<Self, Error> {
        let layer_size = width * height;
        if layer_size == 0 {
            return Err(Error::ZeroDimension(width, height));
        }
        if input.len() % layer_size != 0 {
            return Err(Error::SizeMismatch(input.len(), width, height));
        }

        let digits = input
            .char_indices()
            .map(|(ind, c)| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(Error::InvalidPixelChar(c, ind))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let layers = digits
            .chunks(layer_size)
            .map(|chunk| Layer::new(chunk.to_vec(), width, height))
            .collect();

        Ok(Self {
            layers,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn count_colors_by_layer(&self) -> Vec<ColorCounts> {
        self.layers.iter().map(|l| l.count_colors()).collect()
    }

    /// Product of white and transparent pixel counts in the layer with the
    /// fewest black pixels. The earliest layer wins a tie.
    pub fn checksum(&self) -> Result<usize, Error> {
        let mut indexed_counts = self
            .count_colors_by_layer()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>();
        // `sort_by_key` is stable.
        indexed_counts.sort_by_key(|(_, counts)| color_count(counts, BLACK));

        let (layer_ind, counts) = indexed_counts.first().ok_or(Error::NoLayer)?;
        let white_n = color_count(counts, WHITE);
        let transparent_n = color_count(counts, TRANSPARENT);
        log::info!(
            "Layer {} has the fewest black pixels({}), with {} white and {} transparent.",
            layer_ind,
            color_count(counts, BLACK),
            white_n,
            transparent_n
        );

        Ok(white_n * transparent_n)
    }

    /// Symbol of the first black or white pixel found at (`x`, `y`), scanning
    /// layers front to back.
    pub fn layered_pixel(&self, x: usize, y: usize) -> char {
        for layer in &self.layers {
            match layer.pixel(x, y) {
                Some(BLACK) => return BLACK_SYMBOL,
                Some(WHITE) => return WHITE_SYMBOL,
                _ => (),
            }
        }

        SEE_THROUGH_SYMBOL
    }

    pub fn rendered_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.layered_pixel(x, y)).collect())
            .collect()
    }
}

impl Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rendered_rows() {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

fn color_count(counts: &ColorCounts, color: u8) -> usize {
    counts.get(&color).copied().unwrap_or(0)
}
