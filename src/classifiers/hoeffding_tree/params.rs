use crate::error::{Result, VfdtError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_delta() -> f64 {
    0.05
}
fn default_tau() -> f64 {
    1e-7
}
fn default_nmin() -> u64 {
    200
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HoeffdingTreeParams {
    #[serde(default = "default_delta")]
    #[schemars(
        title = "Tie threshold",
        description = "Split when the gain gap between the two best features is below this (0–1).",
        range(min = 0.0, max = 1.0),
        default = "default_delta"
    )]
    pub delta: f64,

    #[serde(default = "default_tau")]
    #[schemars(
        title = "Split confidence",
        description = "Allowed error of the Hoeffding bound (0–1).",
        range(min = 0.0, max = 1.0),
        default = "default_tau"
    )]
    pub tau: f64,

    #[serde(default = "default_nmin")]
    #[schemars(
        title = "Grace period",
        description = "Examples a leaf should observe between split attempts.",
        range(min = 1),
        default = "default_nmin"
    )]
    pub nmin: u64,
}

impl Default for HoeffdingTreeParams {
    fn default() -> Self {
        Self {
            delta: default_delta(),
            tau: default_tau(),
            nmin: default_nmin(),
        }
    }
}

impl HoeffdingTreeParams {
    pub fn new(delta: f64, tau: f64, nmin: u64) -> Result<Self> {
        let params = Self { delta, tau, nmin };
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)
            .map_err(|e| VfdtError::Config(format!("bad hoeffding tree params: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.delta > 0.0 && self.delta < 1.0) {
            return Err(VfdtError::Config(format!(
                "delta must be in (0, 1), got {}",
                self.delta
            )));
        }
        if !(self.tau > 0.0 && self.tau < 1.0) {
            return Err(VfdtError::Config(format!(
                "tau must be in (0, 1), got {}",
                self.tau
            )));
        }
        if self.nmin == 0 {
            return Err(VfdtError::Config("nmin must be > 0".into()));
        }
        Ok(())
    }
}

pub fn params_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(HoeffdingTreeParams)).unwrap_or_default()
}
