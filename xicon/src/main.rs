use anyhow::Result;
use clap::Parser;
use mipmap::MipmapRes;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Android resource directory the mipmap buckets are created in
    #[clap(short, long, default_value = mipmap::DEFAULT_RES)]
    res: PathBuf,
}

impl Args {
    fn run(self, out: &mut impl Write) -> Result<()> {
        MipmapRes::new(&self.res).generate()?;
        writeln!(out, "Placeholder launcher icons created successfully.")?;
        writeln!(out, "Please replace them with your actual app icons.")?;
        Ok(())
    }
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XICON_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.run(&mut std::io::stdout().lock())
}
