use ndarray::Array2;
use ndarray_rand::{rand_distr::Normal, RandomExt};
use rand::{rngs::StdRng, SeedableRng};

use crate::backend::{Backend, Elm};
use crate::error::{NetworkError, Result};

#[derive(Debug, Clone)]
pub struct NdArray;

impl Backend for NdArray {
    type Tensor = Array2<Elm>;

    fn zeros(shape: (usize, usize)) -> Self::Tensor {
        Array2::zeros(shape)
    }

    fn random_normal(
        shape: (usize, usize),
        mean: Elm,
        std: Elm,
        seed: Option<u64>,
    ) -> Result<Self::Tensor> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let normal = Normal::new(mean, std).map_err(|e| {
            NetworkError::InvalidInput(format!("normal(mean={}, std={}): {}", mean, std, e))
        })?;
        Ok(Array2::random_using(shape, normal, &mut rng))
    }

    fn from_vec(vec: Vec<Elm>, shape: (usize, usize)) -> Result<Self::Tensor> {
        let len = vec.len();
        Array2::from_shape_vec(shape, vec)
            .map_err(|_| NetworkError::shape_mismatch("from_vec", &[shape.0, shape.1], &[len]))
    }
    fn to_vec(tensor: &Self::Tensor) -> Vec<Elm> {
        // iter()は論理的な順序(行優先)で走査する
        tensor.iter().cloned().collect()
    }

    fn shape(tensor: &Self::Tensor) -> (usize, usize) {
        tensor.dim()
    }

    fn add(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor {
        a + b
    }
    fn sub(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor {
        a - b
    }
    fn mul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor {
        a * b
    }
    fn matmul(a: &Self::Tensor, b: &Self::Tensor) -> Self::Tensor {
        a.dot(b)
    }
    fn scale(a: &Self::Tensor, k: Elm) -> Self::Tensor {
        a * k
    }

    fn transpose(tensor: &Self::Tensor) -> Self::Tensor {
        tensor.t().to_owned()
    }

    fn map(a: &Self::Tensor, f: fn(Elm) -> Elm) -> Self::Tensor {
        a.mapv(f)
    }

    fn add_assign(a: &mut Self::Tensor, b: &Self::Tensor) {
        *a += b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_row_major() {
        let m = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], (2, 3)).unwrap();
        assert_eq!(NdArray::shape(&m), (2, 3));
        assert_eq!(m[[1, 0]], 4.0);
        assert_eq!(NdArray::to_vec(&m), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_vec_wrong_length() {
        let err = NdArray::from_vec(vec![1.0, 2.0, 3.0], (2, 2)).unwrap_err();
        assert!(matches!(err, NetworkError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_from_vec_overflowing_shape() {
        let err = NdArray::from_vec(vec![0.0, 0.0], (usize::MAX, 2)).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::ShapeMismatch { ref expected, .. } if expected == &vec![usize::MAX, 2]
        ));
    }

    #[test]
    fn test_matmul_and_transpose() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], (2, 2)).unwrap();
        let x = NdArray::column(vec![1.0, 1.0]).unwrap();
        assert_eq!(NdArray::to_vec(&NdArray::matmul(&a, &x)), vec![3.0, 7.0]);

        let t = NdArray::transpose(&a);
        assert_eq!(NdArray::to_vec(&t), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_random_normal_seeded() {
        let a = NdArray::random_normal((3, 4), 0.0, 1.0, Some(7)).unwrap();
        let b = NdArray::random_normal((3, 4), 0.0, 1.0, Some(7)).unwrap();
        let c = NdArray::random_normal((3, 4), 0.0, 1.0, Some(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_normal_rejects_negative_std() {
        assert!(NdArray::random_normal((2, 2), 0.0, -1.0, Some(1)).is_err());
    }
}
