use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewJournalEntry {
    pub content: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChartQuery {
    /// Size of the window in days, counted back from now. Unreadable values mean 30 days,
    /// negative ones an empty window.
    #[serde(default = "default_chart_days", deserialize_with = "lenient_chart_days")]
    #[param(value_type = Option<i64>)]
    pub days: i64,
    #[serde(default, rename = "type", deserialize_with = "lenient_chart_type")]
    #[param(value_type = Option<ChartType>)]
    pub chart_type: ChartType,
}

pub const DEFAULT_CHART_DAYS: i64 = 30;

const fn default_chart_days() -> i64 {
    DEFAULT_CHART_DAYS
}

// Query strings carry text, JSON bodies carry numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDays {
    Number(i64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_chart_days<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawDays::deserialize(deserializer)? {
        RawDays::Number(days) => days,
        RawDays::Text(text) => text.trim().parse().unwrap_or(DEFAULT_CHART_DAYS),
        RawDays::Other(_) => DEFAULT_CHART_DAYS,
    })
}

// Anything but "bar" renders the line chart.
fn lenient_chart_type<'de, D>(deserializer: D) -> Result<ChartType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(match value.as_deref() {
        Some("bar") => ChartType::Bar,
        _ => ChartType::Line,
    })
}

impl Default for ChartQuery {
    fn default() -> Self {
        Self {
            days: default_chart_days(),
            chart_type: ChartType::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_query_defaults() {
        let query: ChartQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.days, 30);
        assert_eq!(query.chart_type, ChartType::Line);

        let query: ChartQuery = serde_json::from_str(r#"{"days": 7, "type": "bar"}"#).unwrap();
        assert_eq!(query.days, 7);
        assert_eq!(query.chart_type, ChartType::Bar);

        let query: ChartQuery = serde_json::from_str(r#"{"type": "pie"}"#).unwrap();
        assert_eq!(query.chart_type, ChartType::Line);
    }

    #[test]
    fn test_chart_days_lenient() {
        let days = |json: &str| serde_json::from_str::<ChartQuery>(json).unwrap().days;

        assert_eq!(days(r#"{"days": "abc"}"#), DEFAULT_CHART_DAYS);
        assert_eq!(days(r#"{"days": ""}"#), DEFAULT_CHART_DAYS);
        assert_eq!(days(r#"{"days": 2.5}"#), DEFAULT_CHART_DAYS);
        assert_eq!(days(r#"{"days": null}"#), DEFAULT_CHART_DAYS);
        assert_eq!(days(r#"{"days": " 14 "}"#), 14);
        assert_eq!(days(r#"{"days": "-5"}"#), -5);
        assert_eq!(days(r#"{"days": -5}"#), -5);
        assert_eq!(days(r#"{"days": "9223372036854775807"}"#), i64::MAX);
        assert_eq!(days(r#"{"days": "99999999999999999999"}"#), DEFAULT_CHART_DAYS);
    }
}
