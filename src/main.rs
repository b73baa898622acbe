mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use hook_ranker::config::RankerConfig;
use hook_ranker::scoring::ScoredCandidate;
use hook_ranker::{
    analyze, format_flag, format_float, jitter_source, preview, rank_content_with_limits,
    ContentSignals, Corpus, Limits,
};

#[derive(Parser)]
#[command(name = "hook-ranker", about = "Hook template and power-hook ranker")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Rank templates and power hooks for a piece of content.
    Rank(RankArgs),
    /// Print the content signals detected in a piece of content.
    Analyze(AnalyzeArgs),
    /// List the template corpus.
    Templates(TemplatesArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct RankArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    template_limit: Option<usize>,
    #[arg(long)]
    power_hook_limit: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    details: bool,
}

#[derive(Args, Debug, Clone)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct TemplatesArgs {
    #[arg(long)]
    category: Option<String>,
    /// List every template with its full text.
    #[arg(long)]
    all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = RankerConfig::load(cli.config)?;
    if let Some(path) = config_path.as_ref().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    let corpus = Corpus::load(&config.corpus)?;
    let command = cli.command.unwrap_or(Command::Rank(RankArgs::default()));

    match command {
        Command::Rank(args) => run_rank(args, &config, &corpus),
        Command::Analyze(args) => run_analyze(args, &config),
        Command::Templates(args) => run_templates(args, &corpus),
        Command::Serve(args) => server::serve(args, config, corpus).await,
    }
}

fn run_rank(args: RankArgs, config: &RankerConfig, corpus: &Corpus) -> Result<(), String> {
    let text = config.input.validate(&read_text(args.text)?)?;

    let mut limits = Limits::from_config(config);
    if let Some(value) = args.template_limit {
        limits.templates = value;
    }
    if let Some(value) = args.power_hook_limit {
        limits.power_hooks = value;
    }

    let mut rng = jitter_source(config, args.seed);
    let output = rank_content_with_limits(&text, corpus, config, limits, rng.as_mut());

    if args.json {
        let payload = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_signals(&output.analysis);

    println!("\nTemplates:");
    if output.templates.is_empty() {
        println!("  No suitable templates found for this content");
    }
    for (index, scored) in output.templates.iter().enumerate() {
        print_candidate(index, scored, args.details);
    }

    println!("\nPower hooks:");
    if output.power_hooks.is_empty() {
        println!("  No power hooks available");
    }
    for (index, scored) in output.power_hooks.iter().enumerate() {
        print_candidate(index, scored, args.details);
    }

    Ok(())
}

fn run_analyze(args: AnalyzeArgs, config: &RankerConfig) -> Result<(), String> {
    let text = config.input.validate(&read_text(args.text)?)?;
    let signals = analyze(&text);

    if args.json {
        let payload = serde_json::to_string_pretty(&signals)
            .map_err(|err| format!("failed to serialize signals: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_signals(&signals);
    Ok(())
}

fn run_templates(args: TemplatesArgs, corpus: &Corpus) -> Result<(), String> {
    let templates = match args.category.as_deref() {
        Some(category) => corpus.templates_in_category(category),
        None if args.all => corpus.templates().iter().collect(),
        None => {
            for category in corpus.template_categories() {
                println!(
                    "{} ({})",
                    category,
                    corpus.templates_in_category(category).len()
                );
            }
            return Ok(());
        }
    };
    if templates.is_empty() {
        return Err(match args.category {
            Some(category) => format!("no templates in category: {}", category),
            None => "template corpus is empty".to_string(),
        });
    }

    for template in templates {
        println!("{} [{}] {}", template.id, template.category, template.title);
        if args.all {
            for line in template.display_text.lines() {
                println!("    {}", line);
            }
        } else {
            println!("    {}", preview(&template.display_text, 80));
        }
    }
    Ok(())
}

fn print_signals(signals: &ContentSignals) {
    println!("Tone: {}", signals.tone.label());
    if signals.main_topics.is_empty() {
        println!("Topics: none detected");
    } else {
        println!("Topics: {}", signals.main_topics.join(", "));
    }
    println!(
        "Signals: personal story {} | statistics {} | quotes {} | named people {} | frameworks {} | books {}",
        format_flag(signals.has_personal_story),
        format_flag(signals.has_statistics),
        format_flag(signals.has_quotes),
        format_flag(signals.has_named_people),
        format_flag(signals.has_frameworks),
        format_flag(signals.has_book_references)
    );
}

fn print_candidate(index: usize, scored: &ScoredCandidate, details: bool) {
    println!(
        "{}. {} ({}) score {}",
        index + 1,
        scored.candidate.title,
        scored.category(),
        format_float(scored.score, 1)
    );
    let text = scored
        .filled_text
        .as_deref()
        .unwrap_or(&scored.candidate.display_text);
    println!("   {}", preview(text, 100));

    if details {
        println!(
            "   rules {} | jitter {}",
            format_float(scored.rule_score, 1),
            format_float(scored.jitter, 2)
        );
        println!("   why: {}", scored.reason);
        for (name, value) in &scored.variable_data {
            println!("   [{}] = {}", name, value);
        }
    }
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing content: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
