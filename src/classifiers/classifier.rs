use crate::core::instances::Example;
use crate::error::Result;

pub trait Classifier {
    /// Class votes indexed by label.
    fn get_votes_for_example(&self, example: &Example) -> Result<Vec<f64>>;
    fn train_on_example(&mut self, example: &Example) -> Result<()>;
}
