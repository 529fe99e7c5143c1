//! This module contains tools for working with indices as a mask of boolean values.

#[derive(Clone, Debug)]
pub struct IndexMask {
    mask: Vec<bool>,
}

impl IndexMask {
    /// Create a new IndexMask with the specified length and initial value.
    ///
    /// # Arguments
    ///
    /// * `len`: the length of the mask
    /// * `value`: the initial value for each index in the mask
    ///
    /// returns: IndexMask
    pub fn new(len: usize, value: bool) -> Self {
        IndexMask {
            mask: vec![value; len],
        }
    }

    /// Get the index values which are set in the mask, in ascending order.
    pub fn to_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| if v { Some(i) } else { None })
            .collect()
    }

    /// Set the value at the specified index. Indices past the end of the mask are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if index < self.mask.len() {
            self.mask[index] = value;
        }
    }

    /// Get the value at the specified index.
    pub fn get(&self, index: usize) -> bool {
        self.mask[index]
    }

    /// The number of indices which are set.
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&v| v).count()
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_collect() {
        let mut mask = IndexMask::new(6, false);
        mask.set(4, true);
        mask.set(1, true);
        mask.set(10, true);
        assert_eq!(mask.to_indices(), vec![1, 4]);
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.len(), 6);
        assert!(mask.get(4));
        assert!(!mask.get(0));
    }
}
