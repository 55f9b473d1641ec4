use serde::{Deserialize, Serialize};

use crate::analysis::{KeeperMetric, PlayerMetric};
use crate::api::handlers::EventParams;
use crate::domain::OutcomeShare;
use crate::records::{HallOfFame, RecordEntry};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub name: String,
    pub total: u32,
    pub shares: Vec<OutcomeShare>,
}

impl DistributionResponse {
    pub fn new(name: String, shares: Vec<OutcomeShare>) -> Self {
        let total = shares.iter().map(|s| s.count).sum();
        Self { name, total, shares }
    }
}

/// Hall of Fame fields plus the same data as a flat list for card layouts
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFameResponse {
    #[serde(flatten)]
    pub hall: HallOfFame,
    pub records: Vec<RecordEntry>,
}

impl From<HallOfFame> for HallOfFameResponse {
    fn from(hall: HallOfFame) -> Self {
        let records = hall.records();
        Self { hall, records }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DecayParams {
    pub score: Option<f64>,
    pub half_life: Option<f64>,
    pub days: Option<u32>,
}

/// Comparison query: `names` is comma separated
#[derive(Debug, Default, Deserialize)]
pub struct CompareParams<M> {
    pub names: Option<String>,
    pub metric: Option<M>,
    pub month: Option<String>,
    pub gender: Option<String>,
    pub half_life: Option<f64>,
}

pub type PlayerCompareParams = CompareParams<PlayerMetric>;
pub type KeeperCompareParams = CompareParams<KeeperMetric>;

impl<M> CompareParams<M> {
    pub fn selected_names(&self) -> Vec<String> {
        self.names
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn event_params(&self) -> EventParams {
        EventParams {
            month: self.month.clone(),
            gender: self.gender.clone(),
            half_life: self.half_life,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRateResponse {
    pub name: String,
    pub save_rate: u32,
}
