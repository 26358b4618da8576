use crate::error::{DomainError, Result, VfdtError};
use crate::utils::file_parsing::parse_usize_list;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Number of discrete values each feature can take.
///
/// Feature `i` takes values `0..cardinality(i)`. A domain always has at least one feature and
/// every cardinality is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct FeatureDomain {
    cardinalities: Vec<usize>,
}

impl FeatureDomain {
    pub fn new(cardinalities: Vec<usize>) -> Result<Self> {
        if cardinalities.is_empty() {
            return Err(VfdtError::Config(
                "feature domain must declare at least one feature".into(),
            ));
        }
        if let Some(feature) = cardinalities.iter().position(|&k| k == 0) {
            return Err(VfdtError::Config(format!(
                "feature {feature} has an empty domain"
            )));
        }
        Ok(Self { cardinalities })
    }

    /// Reads a domain file: a header line followed by one comma separated line of cardinalities.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut lines = content.lines();
        lines.next();
        let values = lines
            .next()
            .ok_or_else(|| VfdtError::Config("domain file has no cardinality line".into()))?;
        values.parse()
    }

    pub fn num_features(&self) -> usize {
        self.cardinalities.len()
    }

    pub fn cardinality(&self, feature: usize) -> Option<usize> {
        self.cardinalities.get(feature).copied()
    }

    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }

    pub fn all_features(&self) -> Vec<usize> {
        (0..self.num_features()).collect()
    }

    pub fn contains_feature(&self, feature: usize) -> bool {
        feature < self.num_features()
    }

    pub fn check_value(&self, feature: usize, value: usize) -> std::result::Result<(), DomainError> {
        match self.cardinality(feature) {
            Some(cardinality) if value < cardinality => Ok(()),
            Some(cardinality) => Err(DomainError::ValueOutOfRange {
                feature,
                value,
                cardinality,
            }),
            None => Err(DomainError::ArityMismatch {
                expected: self.num_features(),
                found: feature + 1,
            }),
        }
    }

    /// Checks arity and every value of `values` against the domain.
    pub fn check_example(&self, values: &[usize]) -> std::result::Result<(), DomainError> {
        if values.len() != self.num_features() {
            return Err(DomainError::ArityMismatch {
                expected: self.num_features(),
                found: values.len(),
            });
        }
        values
            .iter()
            .enumerate()
            .try_for_each(|(feature, &value)| self.check_value(feature, value))
    }
}

impl FromStr for FeatureDomain {
    type Err = VfdtError;

    fn from_str(s: &str) -> Result<Self> {
        let cardinalities = parse_usize_list(s.trim())
            .map_err(|e| VfdtError::Config(format!("bad cardinality list '{}': {e}", s.trim())))?;
        Self::new(cardinalities)
    }
}

impl TryFrom<Vec<usize>> for FeatureDomain {
    type Error = VfdtError;

    fn try_from(value: Vec<usize>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FeatureDomain> for Vec<usize> {
    fn from(domain: FeatureDomain) -> Self {
        domain.cardinalities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn rejects_empty_and_zero_cardinality() {
        assert!(matches!(
            FeatureDomain::new(vec![]),
            Err(VfdtError::Config(_))
        ));
        assert!(matches!(
            FeatureDomain::new(vec![2, 0, 3]),
            Err(VfdtError::Config(_))
        ));
    }

    #[test]
    fn parses_from_str() {
        let d: FeatureDomain = "3,3,2".parse().unwrap();
        assert_eq!(d.cardinalities(), &[3, 3, 2]);
        assert_eq!(d.all_features(), vec![0, 1, 2]);
        assert!(matches!(
            "3,a".parse::<FeatureDomain>(),
            Err(VfdtError::Config(_))
        ));
    }

    #[test]
    fn reads_file_skipping_header() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "f0,f1,f2").unwrap();
        writeln!(tf, "3,3,2").unwrap();
        let d = FeatureDomain::from_file(tf.path()).unwrap();
        assert_eq!(d.cardinalities(), &[3, 3, 2]);
    }

    #[test]
    fn file_without_values_line_is_config_error() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "only-header").unwrap();
        assert!(matches!(
            FeatureDomain::from_file(tf.path()),
            Err(VfdtError::Config(_))
        ));
    }

    #[test]
    fn check_example_fails_fast() {
        let d = FeatureDomain::new(vec![3, 2]).unwrap();
        assert!(d.check_example(&[2, 1]).is_ok());
        assert_eq!(
            d.check_example(&[2, 2]),
            Err(DomainError::ValueOutOfRange {
                feature: 1,
                value: 2,
                cardinality: 2
            })
        );
        assert_eq!(
            d.check_example(&[0]),
            Err(DomainError::ArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn serde_validates() {
        let d: FeatureDomain = serde_json::from_str("[3,3,2]").unwrap();
        assert_eq!(d.num_features(), 3);
        assert!(serde_json::from_str::<FeatureDomain>("[]").is_err());
        assert_eq!(serde_json::to_string(&d).unwrap(), "[3,3,2]");
    }
}
