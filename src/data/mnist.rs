use super::dataset::Dataset;
use super::encoding::{scale_pixels, TARGET_OFF, TARGET_ON};
use super::Sample;
use crate::error::{NetworkError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

pub const CLASSES: usize = 10;

const IDX3_MAGIC: u32 = 2051;
const IDX1_MAGIC: u32 = 2049;

/// MNIST digits read from the gzip-compressed IDX files.
///
/// Every sample has the scaled pixels as input and a 10-class one-hot
/// target (see [`crate::data::encoding`]).
pub struct Mnist {
    images: Vec<Vec<u8>>,
    labels: Vec<u8>,
    pub num_rows: usize,
    pub num_cols: usize,
}

impl Mnist {
    /// Loads the train or test split from `root`.
    pub fn new<P: AsRef<Path>>(root: P, train: bool) -> Result<Self> {
        let (image_filename, label_filename) = if train {
            ("train-images-idx3-ubyte.gz", "train-labels-idx1-ubyte.gz")
        } else {
            ("t10k-images-idx3-ubyte.gz", "t10k-labels-idx1-ubyte.gz")
        };

        let root = root.as_ref();
        let (images, num_rows, num_cols) = read_idx3(&read_gz(&root.join(image_filename))?)?;
        let labels = read_idx1(&read_gz(&root.join(label_filename))?)?;

        if images.len() != labels.len() {
            return Err(NetworkError::InvalidFormat(format!(
                "image and label count mismatch: {} images, {} labels",
                images.len(),
                labels.len()
            )));
        }
        log::info!(
            "Loaded {} MNIST {} samples ({}x{}) from {}",
            labels.len(),
            if train { "train" } else { "test" },
            num_rows,
            num_cols,
            root.display()
        );

        Ok(Self {
            images,
            labels,
            num_rows,
            num_cols,
        })
    }

    pub fn label(&self, index: usize) -> u8 {
        self.labels[index]
    }
}

impl Dataset for Mnist {
    type Item = Sample;

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn get(&self, index: usize) -> Self::Item {
        let input = scale_pixels(&self.images[index]);
        // ラベルは read_idx1 で 0..10 に収まっていることを確認済み
        let mut target = vec![TARGET_OFF; CLASSES];
        target[self.labels[index] as usize] = TARGET_ON;
        Sample::new(input, target)
    }
}

fn read_gz(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(file);
    let mut buffer = Vec::new();
    decoder.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Parses an uncompressed IDX3 image file into `(images, rows, cols)`.
pub fn read_idx3(buffer: &[u8]) -> Result<(Vec<Vec<u8>>, usize, usize)> {
    let mut reader = Cursor::new(buffer);

    let magic = reader.read_u32::<BigEndian>()?;
    if magic != IDX3_MAGIC {
        return Err(NetworkError::InvalidFormat(format!(
            "invalid magic number for IDX3 file: {}",
            magic
        )));
    }

    let count = reader.read_u32::<BigEndian>()? as usize;
    let rows = reader.read_u32::<BigEndian>()? as usize;
    let cols = reader.read_u32::<BigEndian>()? as usize;

    // ヘッダの個数を信用せず、残りバイト数で上限を確かめてから確保する
    let available = remaining(&reader);
    let image_size = match rows.checked_mul(cols) {
        Some(size) if size > 0 && size.checked_mul(count).map_or(false, |n| n <= available) => {
            size
        }
        _ => {
            return Err(NetworkError::InvalidFormat(format!(
                "IDX3 header declares {} images of {}x{} but only {} bytes follow",
                count, rows, cols, available
            )))
        }
    };

    let mut images = Vec::with_capacity(count);

    for _ in 0..count {
        let mut img_buf = vec![0u8; image_size];
        reader.read_exact(&mut img_buf)?;
        images.push(img_buf);
    }

    Ok((images, rows, cols))
}

/// Parses an uncompressed IDX1 label file.
pub fn read_idx1(buffer: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Cursor::new(buffer);

    let magic = reader.read_u32::<BigEndian>()?;
    if magic != IDX1_MAGIC {
        return Err(NetworkError::InvalidFormat(format!(
            "invalid magic number for IDX1 file: {}",
            magic
        )));
    }

    let count = reader.read_u32::<BigEndian>()? as usize;
    if count > remaining(&reader) {
        return Err(NetworkError::InvalidFormat(format!(
            "IDX1 header declares {} labels but only {} bytes follow",
            count,
            remaining(&reader)
        )));
    }
    let mut labels = vec![0u8; count];
    reader.read_exact(&mut labels)?;

    if let Some(&bad) = labels.iter().find(|&&l| l as usize >= CLASSES) {
        return Err(NetworkError::InvalidInput(format!(
            "label {} out of range for {} classes",
            bad, CLASSES
        )));
    }

    Ok(labels)
}

fn remaining(reader: &Cursor<&[u8]>) -> usize {
    let consumed = reader.position() as usize;
    reader.get_ref().len().saturating_sub(consumed)
}
