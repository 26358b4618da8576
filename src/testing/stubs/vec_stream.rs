use crate::core::FeatureDomain;
use crate::core::instances::Example;
use crate::streams::Stream;

pub struct VecStream {
    pub domain: FeatureDomain,
    examples: Vec<Example>,
    idx: usize,
}

impl VecStream {
    pub fn new(domain: FeatureDomain, examples: Vec<Example>) -> Self {
        Self {
            domain,
            examples,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn domain(&self) -> &FeatureDomain {
        &self.domain
    }

    fn has_more_examples(&self) -> bool {
        self.idx < self.examples.len()
    }

    fn next_example(&mut self) -> Option<Example> {
        let example = self.examples.get(self.idx).cloned()?;
        self.idx += 1;
        Some(example)
    }
}
