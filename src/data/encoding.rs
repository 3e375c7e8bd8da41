// 入力と教師信号をシグモイドの値域 (0, 1) に収まるように変換する
use crate::backend::Elm;
use crate::error::{NetworkError, Result};

/// Target value for the hot class. The sigmoid never reaches 1.0 exactly.
pub const TARGET_ON: Elm = 0.99;
/// Target value for every other class.
pub const TARGET_OFF: Elm = 0.01;

/// Maps raw pixel intensities `0..=255` into `[0.01, 1.0]`.
pub fn scale_pixels(pixels: &[u8]) -> Vec<Elm> {
    pixels
        .iter()
        .map(|&p| p as Elm / 255.0 * 0.99 + 0.01)
        .collect()
}

/// One-hot target with `TARGET_OFF` everywhere and `TARGET_ON` at `label`.
pub fn one_hot(label: usize, classes: usize) -> Result<Vec<Elm>> {
    if label >= classes {
        return Err(NetworkError::InvalidInput(format!(
            "label {} out of range for {} classes",
            label, classes
        )));
    }
    let mut target = vec![TARGET_OFF; classes];
    target[label] = TARGET_ON;
    Ok(target)
}
