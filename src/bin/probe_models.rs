use clap::Parser;
use tarot_relay::core::{ConfigProvider, Generator};
use tarot_relay::utils::classify::describe_failure;
use tarot_relay::utils::logger;
use tarot_relay::utils::validation::{validate_credential, Validate};
use tarot_relay::{GeminiClient, UpstreamConfig};

/// 逐一測試每個模型候選的可用性
#[derive(Debug, Parser)]
#[command(name = "probe_models")]
#[command(about = "Send a short prompt to every model candidate and report which ones answer")]
struct ProbeArgs {
    #[command(flatten)]
    upstream: UpstreamConfig,

    #[arg(long, default_value = "Reply with the single word: ok")]
    prompt: String,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ProbeArgs::parse();
    logger::init_cli_logger(args.verbose);

    let upstream = args.upstream.resolve()?;
    upstream.validate()?;
    let api_key = validate_credential(upstream.api_key())?;

    let client = GeminiClient::from_config(&upstream)?;

    println!("🔍 Probing {} model candidates", upstream.candidates().len());

    let mut healthy = 0;
    for candidate in upstream.candidates() {
        let started = std::time::Instant::now();
        match client.generate(candidate, api_key, &args.prompt).await {
            Ok(text) => {
                healthy += 1;
                println!(
                    "  ✅ {:<32} {:>6} ms  {}",
                    candidate.to_string(),
                    started.elapsed().as_millis(),
                    text.trim().lines().next().unwrap_or_default()
                );
            }
            Err(e) => {
                println!(
                    "  ❌ {:<32} {:>6} ms  {}",
                    candidate.to_string(),
                    started.elapsed().as_millis(),
                    describe_failure(&e.message())
                );
            }
        }
    }

    println!(
        "📊 {}/{} candidates healthy",
        healthy,
        upstream.candidates().len()
    );

    if healthy == 0 {
        std::process::exit(2);
    }
    Ok(())
}
