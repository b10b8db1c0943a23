use crate::classifier::EmotionClassifier;
use crate::mood::{fallback, normalize};
use kokoro_model::mood::{Mood, MoodScoreRecord};
use std::error::Error;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::instrument;

/// First mood whose name occurs anywhere in the text, case insensitive.
///
/// This is a plain substring test: "unhappy" names Happy.
#[must_use]
pub fn detect_typed_mood(text: &str) -> Option<Mood> {
    let text = text.to_lowercase();
    Mood::iter().find(|mood| text.contains(&mood.as_ref().to_lowercase()))
}

/// Turns journal text into the stored [`MoodScoreRecord`].
#[derive(Clone)]
pub struct MoodPipeline {
    classifier: Arc<dyn EmotionClassifier>,
}

impl MoodPipeline {
    pub fn new(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self { classifier }
    }

    /// Never fails: classifier errors and empty distributions fall back to keyword scoring.
    #[instrument(skip_all, fields(len = text.len()))]
    pub async fn classify(&self, text: &str) -> MoodScoreRecord {
        let typed_mood = detect_typed_mood(text);
        tracing::debug!(?typed_mood, "detected typed mood");

        match self.classifier.bucket_scores(text).await {
            Ok(raw) => {
                if let Some(scores) = normalize(raw) {
                    return MoodScoreRecord::new(scores, typed_mood);
                }
                tracing::info!("classifier returned no usable labels, using keyword scoring");
            }
            Err(error) => {
                tracing::warn!(error = &error as &dyn Error, "classification failed, using keyword scoring");
            }
        }

        fallback::score(text).with_typed_mood(typed_mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::config::ClassifierConfig;
    use crate::classifier::error::ClassifierError;
    use crate::classifier::{HuggingFaceClassifier, LabelScore};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use test_log::test;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    enum StubClassifier {
        Labels(Vec<(&'static str, f64)>),
        Broken,
    }

    #[async_trait]
    impl EmotionClassifier for StubClassifier {
        async fn distribution(&self, _text: &str) -> Result<Vec<LabelScore>, ClassifierError> {
            match self {
                Self::Labels(labels) => Ok(labels
                    .iter()
                    .map(|(label, score)| LabelScore {
                        label: (*label).to_owned(),
                        score: *score,
                    })
                    .collect()),
                Self::Broken => Err(serde_json::from_str::<Vec<LabelScore>>("{").unwrap_err().into()),
            }
        }
    }

    fn pipeline(classifier: StubClassifier) -> MoodPipeline {
        MoodPipeline::new(Arc::new(classifier))
    }

    async fn hosted_pipeline(response: ResponseTemplate) -> (MockServer, MoodPipeline) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/emotions"))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;
        let classifier = HuggingFaceClassifier::new(ClassifierConfig {
            url: Url::parse(&format!("{}/models/emotions", server.uri())).unwrap(),
            api_key: None,
            timeout: Duration::from_secs(2),
        })
        .unwrap();
        (server, MoodPipeline::new(Arc::new(classifier)))
    }

    #[test]
    fn test_detect_typed_mood() {
        assert_eq!(detect_typed_mood("Today I am CALM"), Some(Mood::Calm));
        assert_eq!(detect_typed_mood("sad but also happy"), Some(Mood::Happy), "enumeration order wins");
        assert_eq!(detect_typed_mood("so unhappy"), Some(Mood::Happy));
        assert_eq!(detect_typed_mood("nothing to report"), None);
    }

    #[test(tokio::test)]
    async fn test_classifier_scores_are_normalized() {
        let pipeline = pipeline(StubClassifier::Labels(vec![("joy", 0.3), ("sadness", 0.1), ("boredom", 5.0)]));
        let record = pipeline.classify("a mixed day").await;

        assert_eq!(record.labels, Mood::labels());
        assert!((record.score(Mood::Happy) - 75.0).abs() < 1e-9);
        assert!((record.score(Mood::Sad) - 25.0).abs() < 1e-9);
        assert!((record.total() - 100.0).abs() < 1e-9);
        assert_eq!(record.typed_mood, None);
    }

    #[test(tokio::test)]
    async fn test_typed_mood_attached() {
        let pipeline = pipeline(StubClassifier::Labels(vec![("fear", 1.0)]));
        let record = pipeline.classify("Feeling angry about it").await;
        assert_eq!(record.typed_mood.as_deref(), Some("Angry"));
        assert!((record.score(Mood::Anxious) - 100.0).abs() < 1e-9, "stored scores stay untouched");
    }

    #[test(tokio::test)]
    async fn test_failure_uses_fallback() {
        let record = pipeline(StubClassifier::Broken).classify("I am so worried and calm").await;
        assert_eq!(record.typed_mood.as_deref(), Some("Calm"), "typed mood survives the fallback");
        assert!((record.score(Mood::Calm) - 50.0).abs() < 1e-9);
        assert!((record.score(Mood::Anxious) - 50.0).abs() < 1e-9);
    }

    #[test(tokio::test)]
    async fn test_zero_signal_uses_fallback() {
        let record = pipeline(StubClassifier::Labels(vec![("boredom", 1.0)])).classify("plain words").await;
        assert_eq!(record.scores, vec![fallback::UNIFORM_SCORE; Mood::COUNT]);
        assert_eq!(record.typed_mood, None);
    }

    #[test(tokio::test)]
    async fn test_unavailable_service_uses_keywords() {
        let (_server, pipeline) = hosted_pipeline(ResponseTemplate::new(503).set_body_string("loading")).await;
        let record = pipeline.classify("I am so happy and joyful today").await;

        assert!((record.total() - 100.0).abs() < 1e-9);
        let happy = record.score(Mood::Happy);
        for mood in Mood::iter().filter(|mood| *mood != Mood::Happy) {
            assert!(happy > record.score(mood), "{mood} beat Happy in {:?}", record.scores);
        }
        assert_eq!(record.typed_mood.as_deref(), Some("Happy"));
    }

    #[test(tokio::test)]
    async fn test_error_body_uses_keywords() {
        let (_server, pipeline) =
            hosted_pipeline(ResponseTemplate::new(200).set_body_json(json!({"error": "Model is overloaded"}))).await;
        let record = pipeline.classify("a calm and peaceful walk").await;

        assert_eq!(record.typed_mood.as_deref(), Some("Calm"));
        assert!((record.score(Mood::Calm) - 100.0).abs() < 1e-9);
        assert!((record.total() - 100.0).abs() < 1e-9);
    }
}
