use kokoro_utils::args::classifier::ClassifierArgs;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub url: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl From<ClassifierArgs> for ClassifierConfig {
    fn from(value: ClassifierArgs) -> Self {
        Self {
            url: value.classifier_url,
            api_key: value.classifier_key,
            timeout: Duration::from_secs(value.classifier_timeout),
        }
    }
}
