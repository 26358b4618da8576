use crate::classifiers::Classifier;
use crate::classifiers::hoeffding_tree::codec;
use crate::classifiers::hoeffding_tree::params::HoeffdingTreeParams;
use crate::classifiers::hoeffding_tree::split_decision::SplitDecision;
use crate::classifiers::hoeffding_tree::tree::Tree;
use crate::core::FeatureDomain;
use crate::core::instances::Example;
use crate::error::Result;
use crate::streams::Stream;
use std::path::Path;
use std::sync::Arc;

/// Very Fast Decision Tree learner over nominal features and a binary class.
pub struct HoeffdingTree {
    domain: Arc<FeatureDomain>,
    params: HoeffdingTreeParams,
    split_decision: SplitDecision,
    tree: Tree,
    nb_examples_processed: u64,
}

impl HoeffdingTree {
    pub fn new(domain: FeatureDomain, params: HoeffdingTreeParams) -> Result<Self> {
        let split_decision = SplitDecision::new(&params)?;
        let domain = Arc::new(domain);
        Ok(Self {
            tree: Tree::new(Arc::clone(&domain)),
            split_decision,
            domain,
            params,
            nb_examples_processed: 0,
        })
    }

    pub fn domain(&self) -> &FeatureDomain {
        &self.domain
    }

    pub fn params(&self) -> &HoeffdingTreeParams {
        &self.params
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn nb_examples_processed(&self) -> u64 {
        self.nb_examples_processed
    }

    /// Learns from one example; the tree is unchanged if the example is rejected.
    pub fn update(&mut self, example: &Example) -> Result<()> {
        self.tree.update(example, &self.split_decision)?;
        self.nb_examples_processed += 1;
        Ok(())
    }

    /// Probability in `[0, 1]` that the example belongs to class 1.
    pub fn make_prediction(&self, values: &[usize]) -> Result<f64> {
        self.tree.predict(values)
    }

    pub fn write_model<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        codec::write_model(&self.tree, path)?;
        log::info!(
            "wrote {} nodes to {}",
            self.tree.node_count(),
            path.display()
        );
        Ok(())
    }

    /// Replaces the current tree with the one stored at `path`.
    ///
    /// On any error the current tree and counter are kept.
    pub fn read_model<P: AsRef<Path>>(&mut self, path: P, nb_examples_processed: u64) -> Result<()> {
        let path = path.as_ref();
        let tree = codec::read_model(path, Arc::clone(&self.domain))?;
        log::info!("read {} nodes from {}", tree.node_count(), path.display());
        self.tree = tree;
        self.nb_examples_processed = nb_examples_processed;
        Ok(())
    }

    /// Replaces the current tree with one parsed from model text.
    pub fn load_model_str(&mut self, text: &str, nb_examples_processed: u64) -> Result<()> {
        let tree = codec::load(text, Arc::clone(&self.domain))?;
        log::info!("loaded {} nodes from model text", tree.node_count());
        self.tree = tree;
        self.nb_examples_processed = nb_examples_processed;
        Ok(())
    }

    pub fn model_string(&self) -> String {
        codec::save(&self.tree)
    }

    pub fn get_visualization(&self) -> String {
        codec::visualize(&self.tree)
    }

    pub fn info(&self) -> String {
        format!(
            "nodes: {}\tleaves: {}\tdepth: {}",
            self.tree.node_count(),
            self.tree.leaf_count(),
            self.tree.depth()
        )
    }

    /// Trains on examples pulled from `stream` until it runs dry or `max_examples` is reached.
    ///
    /// Returns how many examples were learned from. Stops at the first rejected example.
    pub fn train_on_stream(&mut self, stream: &mut dyn Stream, max_examples: Option<u64>) -> Result<u64> {
        let mut learned = 0;
        while stream.has_more_examples() {
            if max_examples.is_some_and(|max| learned >= max) {
                break;
            }
            let Some(example) = stream.next_example() else {
                break;
            };
            self.update(&example)?;
            learned += 1;
        }
        log::debug!("trained on {learned} examples; {}", self.info());
        Ok(learned)
    }
}

impl Classifier for HoeffdingTree {
    fn get_votes_for_example(&self, example: &Example) -> Result<Vec<f64>> {
        let p = self.make_prediction(example.values())?;
        Ok(vec![1.0 - p, p])
    }

    fn train_on_example(&mut self, example: &Example) -> Result<()> {
        self.update(example)
    }
}
