use clap::Args;
use url::Url;

pub const DEFAULT_PAYSTACK_URL: &str = "https://api.paystack.co";

#[derive(Debug, Clone, Args)]
pub struct PaymentArgs {
    #[arg(long, env = "PAYSTACK_SECRET_KEY", required = false)]
    pub paystack_secret_key: Option<String>,

    #[arg(long, env = "PAYSTACK_PUBLIC_KEY", required = false)]
    pub paystack_public_key: Option<String>,

    #[arg(long, env = "PAYSTACK_URL", default_value = DEFAULT_PAYSTACK_URL)]
    pub paystack_url: Url,

    #[arg(long, env = "KOKORO_PAYMENT_CURRENCY", default_value = "KES")]
    pub payment_currency: String,

    #[arg(
        long,
        env = "KOKORO_PAYMENT_CALLBACK_URL",
        help = "Where the gateway sends the user after checkout, usually the verify route"
    )]
    pub payment_callback_url: Option<Url>,
}
