use std::fmt::Debug;

use crate::error::Result;

pub mod ndarray;

pub type Elm = f32;

/// Dense matrix storage used by the network.
///
/// Every tensor is two dimensional: weight matrices are `(rows, cols)` and
/// activation or error vectors are column vectors `(n, 1)`.
pub trait Backend: Clone + Debug {
    type Tensor: Clone + Debug + PartialEq;

    fn zeros(shape: (usize, usize)) -> Self::Tensor;
    fn random_normal(
        shape: (usize, usize),
        mean: Elm,
        std: Elm,
        seed: Option<u64>,
    ) -> Result<Self::Tensor>;

    // 行優先(row-major)のCPU配列からの作成
    fn from_vec(vec: Vec<Elm>, shape: (usize, usize)) -> Result<Self::Tensor>;
    // CPU配列への変換(行優先)
    fn to_vec(tensor: &Self::Tensor) -> Vec<Elm>;
    fn column(vec: Vec<Elm>) -> Result<Self::Tensor> {
        let len = vec.len();
        Self::from_vec(vec, (len, 1))
    }

    fn shape(tensor: &Self::Tensor) -> (usize, usize);

    // 基本的な演算(全て新しいTensorを返す)
    fn add(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;
    fn sub(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor;
    fn mul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor; // 要素ごとの積
    fn matmul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor; // 行列積
    fn scale(a: &Self::Tensor, k: Elm) -> Self::Tensor;
    fn transpose(tensor: &Self::Tensor) -> Self::Tensor;
    fn map(a: &Self::Tensor, f: fn(Elm) -> Elm) -> Self::Tensor;

    // 重みの更新用(インプレース)
    fn add_assign(a: &mut Self::Tensor, b: &Self::Tensor);
}
