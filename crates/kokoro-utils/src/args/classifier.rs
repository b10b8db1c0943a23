use clap::Args;
use url::Url;

pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://api-inference.huggingface.co/models/joeddav/distilbert-base-uncased-go-emotions";

#[derive(Debug, Clone, Args)]
pub struct ClassifierArgs {
    #[arg(
        long,
        env = "KOKORO_CLASSIFIER_URL",
        default_value = DEFAULT_CLASSIFIER_URL,
        help = "Text classification endpoint returning emotion labels"
    )]
    pub classifier_url: Url,

    #[arg(long, env = "HUGGINGFACE_API_KEY", required = false)]
    pub classifier_key: Option<String>,

    #[arg(long, default_value_t = 10, help = "Request timeout of the classifier in seconds")]
    pub classifier_timeout: u64,
}
