use super::dataset::Dataset;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Feeds a dataset to the network one item at a time.
///
/// Each call to [`DataLoader::iter`] is one epoch. When shuffling, the order
/// is drawn from an internal RNG so consecutive epochs see different orders
/// while a seeded loader stays reproducible.
pub struct DataLoader<'a, D: Dataset> {
    dataset: &'a D,
    shuffle: bool,
    indices: Vec<usize>,
    rng: StdRng,
}

impl<'a, D: Dataset> DataLoader<'a, D> {
    pub fn new(dataset: &'a D, shuffle: bool) -> Self {
        Self::with_rng(dataset, shuffle, StdRng::from_entropy())
    }

    pub fn with_seed(dataset: &'a D, shuffle: bool, seed: u64) -> Self {
        Self::with_rng(dataset, shuffle, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: &'a D, shuffle: bool, rng: StdRng) -> Self {
        let indices: Vec<usize> = (0..dataset.len()).collect();
        Self {
            dataset,
            shuffle,
            indices,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&mut self) -> DataLoaderIterator<'a, D> {
        let mut indices = self.indices.clone();
        if self.shuffle {
            indices.shuffle(&mut self.rng);
        }

        DataLoaderIterator {
            dataset: self.dataset,
            indices: indices.into_iter(),
        }
    }
}

pub struct DataLoaderIterator<'a, D: Dataset> {
    dataset: &'a D,
    indices: std::vec::IntoIter<usize>,
}

impl<'a, D: Dataset> Iterator for DataLoaderIterator<'a, D> {
    type Item = D::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|i| self.dataset.get(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
