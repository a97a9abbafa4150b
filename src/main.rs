// Command-line entry point for cdeps.

use anyhow::Result;
use cdeps::application::AnalyzeUsecase;
use cdeps::common::error::AnalyzeError;
use cdeps::domain::config::{
    AnalysisConfig, ReportFormat, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT, DEFAULT_TITLE, DEFAULT_TOP,
};
use cdeps::domain::language::Language;
use cdeps::infrastructure::concurrency::build_thread_pool;
use cdeps::infrastructure::RegexCallExtractor;
use cdeps::ports::json_report::JsonReportExporter;
use cdeps::ports::text_report::TextReportExporter;
use cdeps::ports::OutputExporter;
use clap::Parser;
use log::error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the source files (not searched recursively)
    #[arg(short = 'd', long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Report file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Report format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Source language selecting the file suffixes (c, cpp)
    #[arg(short, long, default_value = "c")]
    lang: String,

    /// Number of entries in the most-called section
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP)]
    top: usize,

    /// Report title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Extraction worker threads (default: half the cores)
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        let code = e
            .downcast_ref::<AnalyzeError>()
            .map(AnalyzeError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    let language =
        Language::from_str(&cli.lang).ok_or_else(|| AnalyzeError::UnknownLanguage(cli.lang.clone()))?;
    let format = ReportFormat::parse(&cli.format)?;

    let config = AnalysisConfig {
        input_dir: cli.input_dir,
        language,
        top_n: cli.top,
        title: cli.title,
    };

    let exporter: Box<dyn OutputExporter> = match format {
        ReportFormat::Text => Box::new(TextReportExporter::new(config.title.clone(), config.top_n)),
        ReportFormat::Json => Box::new(JsonReportExporter::new(config.title.clone(), config.top_n)),
    };

    let pool = build_thread_pool(cli.jobs)?;
    let extractor = RegexCallExtractor::new();
    let usecase = AnalyzeUsecase {
        extractor: &extractor,
        exporter: exporter.as_ref(),
        pool: Some(&pool),
    };

    let summary = usecase.run(&config, &cli.output)?;
    println!(
        "✅ Dependency analysis complete: {} ({} files, {} with calls, {} distinct names)",
        summary.output.display(),
        summary.files_scanned,
        summary.files_with_calls,
        summary.distinct_calls
    );

    Ok(())
}
