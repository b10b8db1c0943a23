use kokoro_utils::args::payment::PaymentArgs;
use url::Url;

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub secret_key: Option<String>,
    pub public_key: Option<String>,
    pub base_url: Url,
    pub currency: String,
    pub callback_url: Option<Url>,
}

impl From<PaymentArgs> for PaymentConfig {
    fn from(value: PaymentArgs) -> Self {
        Self {
            secret_key: value.paystack_secret_key,
            public_key: value.paystack_public_key,
            base_url: value.paystack_url,
            currency: value.payment_currency,
            callback_url: value.payment_callback_url,
        }
    }
}
