//! Sliding window of recent metric values.

use std::collections::VecDeque;

/// The last `window` values a metric produced.
#[derive(Clone, Debug)]
pub struct History {
    values: VecDeque<f64>,
    window: usize,
}

impl History {
    /// A window of at least one value.
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self { values: VecDeque::with_capacity(window), window }
    }

    pub fn push(&mut self, value: f64) {
        if self.values.len() == self.window {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    pub fn latest(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Mean of the window, 0 when nothing has been recorded yet.
    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}
