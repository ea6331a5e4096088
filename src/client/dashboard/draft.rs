/// Editor state of a feature: the last loaded value and the edited one.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<T> {
    baseline: T,
    current: T,
}

impl<T: Clone + PartialEq> Draft<T> {
    pub fn new(baseline: T) -> Self {
        Self {
            current: baseline.clone(),
            baseline,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.current);
    }

    pub fn reset(&mut self) {
        self.current = self.baseline.clone();
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }
}
