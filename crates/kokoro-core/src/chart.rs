use chrono::{DateTime, Duration, FixedOffset};
use kokoro_db::journal::journal_entry;
use kokoro_model::chart::{ChartSeries, Colors, Dataset};
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::{ChartQuery, ChartType};
use kokoro_model::mood::{Mood, MoodScoreRecord};
use kokoro_model_tools::convert::FromDbModel;
use sea_orm::{ConnectionTrait, DbErr};
use strum::IntoEnumIterator;
use uuid::Uuid;

pub const BAR_DATASET_LABEL: &str = "Average Mood Score (%)";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Scores used for display. A typed mood naming one of the five moods replaces the
/// stored distribution by 100 at that label and 0 everywhere else.
#[must_use]
pub fn effective_scores(record: &MoodScoreRecord, typed_mood: Option<&str>) -> MoodScoreRecord {
    let Some(typed_mood) = typed_mood.filter(|typed| typed.parse::<Mood>().is_ok()) else {
        return record.clone();
    };
    MoodScoreRecord {
        labels: record.labels.clone(),
        scores: record
            .labels
            .iter()
            .map(|label| if label == typed_mood { 100.0 } else { 0.0 })
            .collect(),
        typed_mood: record.typed_mood.clone(),
    }
}

/// Reshapes entries (ascending by creation time) into chart data.
#[must_use]
pub fn aggregate(entries: &[JournalEntry], chart_type: ChartType) -> ChartSeries {
    let effective: Vec<_> = entries
        .iter()
        .map(|entry| effective_scores(&entry.mood_scores, entry.typed_mood.as_deref()))
        .collect();

    match chart_type {
        ChartType::Line => line_chart(entries, &effective),
        ChartType::Bar => bar_chart(&effective),
    }
}

fn line_chart(entries: &[JournalEntry], effective: &[MoodScoreRecord]) -> ChartSeries {
    let labels = entries
        .iter()
        .map(|entry| entry.created_at.format(DATE_FORMAT).to_string())
        .collect();
    let datasets = Mood::iter()
        .map(|mood| Dataset {
            label: mood.to_string(),
            data: effective.iter().map(|record| record.score(mood)).collect(),
            background_color: Colors::Single(mood.color().to_owned()),
            border_color: Colors::Single(mood.color().to_owned()),
            border_width: None,
            fill: Some(false),
        })
        .collect();
    ChartSeries { labels, datasets }
}

fn bar_chart(effective: &[MoodScoreRecord]) -> ChartSeries {
    let averages = Mood::iter()
        .map(|mood| {
            if effective.is_empty() {
                0.0
            } else {
                effective.iter().map(|record| record.score(mood)).sum::<f64>() / effective.len() as f64
            }
        })
        .collect();
    let colors: Vec<_> = Mood::iter().map(|mood| mood.color().to_owned()).collect();
    ChartSeries {
        labels: Mood::labels(),
        datasets: vec![Dataset {
            label: BAR_DATASET_LABEL.to_owned(),
            data: averages,
            background_color: Colors::PerBar(colors.clone()),
            border_color: Colors::PerBar(colors),
            border_width: Some(1),
            fill: None,
        }],
    }
}

/// Start of a window of `days` days ending at `now`. Negative sizes start in the future and
/// select nothing. `None` when the start is out of range, which leaves the window unbounded.
#[must_use]
pub fn window_start(now: DateTime<FixedOffset>, days: i64) -> Option<DateTime<FixedOffset>> {
    let start = Duration::try_days(days).and_then(|window| now.checked_sub_signed(window));
    if start.is_none() {
        tracing::debug!(days, "chart window out of range, not bounding it");
    }
    start
}

/// Loads the user's entries of the last `query.days` days and aggregates them.
pub async fn load_chart<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    query: &ChartQuery,
    now: DateTime<FixedOffset>,
) -> Result<ChartSeries, DbErr> {
    let since = window_start(now, query.days);
    let entries: Vec<JournalEntry> = journal_entry::Query::get_user_journal_entries_since(conn, user_id, since)
        .await?
        .into_iter()
        .map(JournalEntry::from_db_model)
        .collect();
    tracing::debug!(entries = entries.len(), chart_type = ?query.chart_type, "aggregating chart");
    Ok(aggregate(&entries, query.chart_type))
}
