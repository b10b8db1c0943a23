use clap::{Parser, Subcommand};
use kokoro_utils::args::{classifier::ClassifierArgs, db::DbArgs, payment::PaymentArgs};
use std::net::IpAddr;

#[derive(Debug, Parser)]
#[command(name = "kokoro", about = "Mood journal server")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[command(flatten)]
    pub(crate) db: DbArgs,

    #[command(flatten)]
    pub(crate) classifier: ClassifierArgs,

    #[command(flatten)]
    pub(crate) payment: PaymentArgs,

    #[arg(long, value_delimiter = ',', help = "Origins allowed by CORS")]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(
        long,
        default_value = "dev",
        help = "Set the environment used by sentry and prometheus"
    )]
    pub(crate) env: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from([
            "kokoro",
            "run",
            "--port",
            "8080",
            "--database-url",
            "sqlite::memory:",
            "--init-schema",
            "--origins",
            "http://localhost:5173,https://kokoro.example",
            "--payment-currency",
            "NGN",
        ])
        .unwrap();
        let Commands::Run(run) = cli.command;
        assert_eq!(run.port, Some(8080));
        assert_eq!(run.db.database_url, "sqlite::memory:");
        assert!(run.db.init_schema);
        assert_eq!(run.origins.len(), 2);
        assert_eq!(run.payment.payment_currency, "NGN");
        assert_eq!(run.env, "dev");
    }
}
