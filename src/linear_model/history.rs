use std::collections::VecDeque;

/// Epoch losses, most recent first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LossHistory {
    losses: VecDeque<f64>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self { losses: VecDeque::new() }
    }

    pub fn push(&mut self, loss: f64) {
        self.losses.push_front(loss);
    }

    pub fn latest(&self) -> Option<f64> {
        self.losses.front().copied()
    }

    /// The loss recorded one epoch before `latest`.
    pub fn previous(&self) -> Option<f64> {
        self.losses.get(1).copied()
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// Most-recent-first, the order the losses were recorded in.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.losses.iter().copied()
    }

    /// Oldest first, for plotting loss against epoch.
    pub fn chronological(&self) -> impl Iterator<Item = f64> + '_ {
        self.losses.iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    pub fn clear(&mut self) {
        self.losses.clear();
    }
}

impl From<Vec<f64>> for LossHistory {
    /// Builds a history from losses listed most recent first.
    fn from(losses: Vec<f64>) -> Self {
        Self { losses: losses.into() }
    }
}
