use std::iter::FromIterator;

/// The values observed for one column of one row id, in input order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new() -> Sample {
        Sample::default()
    }

    pub fn push(&mut self, x: f64) {
        self.values.push(x);
    }

    /// the number of values seen so far
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The arithmetic mean, or `None` if the sample is empty.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let sum: f64 = self.values.iter().sum();
        Some(sum / self.values.len() as f64)
    }

    /// The median, or `None` if the sample is empty.
    ///
    /// For an even number of values this is the mean of the two middle
    /// ones.
    pub fn median(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.)
        } else {
            Some(sorted[mid])
        }
    }
}

impl Extend<f64> for Sample {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        for x in iter {
            self.push(x);
        }
    }
}

impl FromIterator<f64> for Sample {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Sample {
        let mut sample = Sample::default();
        sample.extend(iter);
        sample
    }
}
