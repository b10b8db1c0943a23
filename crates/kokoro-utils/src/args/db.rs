use clap::Args;

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub struct DbArgs {
    #[arg(long, env = "DATABASE_URI", default_value = "sqlite://kokoro.sqlite?mode=rwc")]
    pub database_url: String,

    #[arg(long, help = "Min connections")]
    pub db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub db_max_connections: Option<u32>,

    #[arg(long, help = "Create missing tables on startup")]
    pub init_schema: bool,
}
