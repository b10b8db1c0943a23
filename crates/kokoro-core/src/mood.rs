use kokoro_model::mood::Mood;

pub mod fallback;
pub mod pipeline;

pub use pipeline::{MoodPipeline, detect_typed_mood};

/// Scales raw bucket scores to percentages. `None` if there is no signal at all.
#[must_use]
pub fn normalize(raw: [f64; Mood::COUNT]) -> Option<[f64; Mood::COUNT]> {
    let total: f64 = raw.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    Some(raw.map(|score| score / total * 100.0))
}
