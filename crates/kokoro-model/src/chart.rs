use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chart data in the shape expected by chart.js.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerBar(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Colors,
    pub border_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill: Option<bool>,
}
