use crate::opt::{Commands, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use kokoro_core::classifier::HuggingFaceClassifier;
use kokoro_core::classifier::config::ClassifierConfig;
use kokoro_core::mood::MoodPipeline;
use kokoro_core::payment::config::PaymentConfig;
use kokoro_core::payment::{PaymentGateway, PaystackClient};
use kokoro_utils::net::create_listener;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod auth;
mod db;
mod opt;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

pub(crate) struct InnerAppConfig {
    pipeline: MoodPipeline,
    payments: Arc<dyn PaymentGateway>,
    payment_config: PaymentConfig,
}

#[derive(Clone)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(
        pipeline: MoodPipeline,
        payments: Arc<dyn PaymentGateway>,
        payment_config: PaymentConfig,
    ) -> Self {
        Self(Arc::new(InnerAppConfig {
            pipeline,
            payments,
            payment_config,
        }))
    }

    pub fn pipeline(&self) -> &MoodPipeline {
        &self.0.pipeline
    }

    pub fn payments(&self) -> &Arc<dyn PaymentGateway> {
        &self.0.payments
    }

    pub fn payment_config(&self) -> &PaymentConfig {
        &self.0.payment_config
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = kokoro_utils::tracing::setup(
        kokoro_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env.clone())
            .build(),
    )?;

    let Run {
        host,
        port,
        db,
        classifier,
        payment,
        origins,
        ..
    } = opt;

    let seaorm_pool = db::connect(&db).await?;

    let classifier_config: ClassifierConfig = classifier.into();
    if classifier_config.api_key.is_none() {
        tracing::warn!("no classifier api key configured, requests may be rate limited");
    }
    let classifier = HuggingFaceClassifier::new(classifier_config)?;
    let payment_config: PaymentConfig = payment.into();
    if payment_config.secret_key.is_none() {
        tracing::warn!("no payment secret key configured, premium upgrades are disabled");
    }
    let payments = PaystackClient::new(payment_config.clone());

    let app_config = AppConfig::new(
        MoodPipeline::new(Arc::new(classifier)),
        Arc::new(payments),
        payment_config,
    );

    let app = app::create_app(app_config, &origins, seaorm_pool)?;

    let listener = create_listener((host, port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

fn main() -> Result<()> {
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
