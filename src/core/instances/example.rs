/// One labelled observation: nominal attribute values and a binary class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    values: Vec<usize>,
    label: usize,
}

impl Example {
    pub fn new(values: Vec<usize>, label: usize) -> Self {
        Self { values, label }
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn label(&self) -> usize {
        self.label
    }
}
