//! blogforge CLI - template-driven blog post generator

mod clipboard;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use blogforge::export::{export, ExportFormat, ExportOptions};
use blogforge::render::{self, JsonFormat, RenderOptions};
use blogforge::synth::{self, SynthOptions, Tone, DEFAULT_WORD_COUNT};
use blogforge::{Document, Synthesizer};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "blogforge")]
#[command(author = "blogforge contributors")]
#[command(version)]
#[command(about = "Generate blog posts from a topic as text, HTML, Markdown, and JSON")]
#[command(long_about = None)]
struct Cli {
    /// Topic to write about (prints plain text)
    ///
    /// Subcommand names take precedence over topics. Write about a topic
    /// named like a subcommand with: blogforge generate <TOPIC>
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a post and print or save it
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        /// Print document statistics after the post
        #[arg(long)]
        stats: bool,
    },

    /// Generate a post and save it under a filename derived from its title
    Export {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Export format
        #[arg(short, long, value_enum, default_value = "html")]
        format: FormatArg,

        /// Export every format
        #[arg(long, conflicts_with = "format")]
        all: bool,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        #[arg(env = "BLOGFORGE_OUTPUT_DIR")]
        output_dir: PathBuf,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a post and copy its plain text to the clipboard
    Copy {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Restyle a plain-text post into a printable HTML page
    Restyle {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input with an .html extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page title (defaults to the first line of the input)
        #[arg(long)]
        title: Option<String>,

        /// Omit the "Generated on" footer
        #[arg(long)]
        no_footer: bool,
    },

    /// List popular topics and word count presets
    Topics,

    /// Show which category a topic falls into
    Classify {
        /// Topic to classify
        #[arg(value_name = "TOPIC")]
        topic: String,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct GenerationArgs {
    /// Topic or keyword to write about
    #[arg(value_name = "TOPIC")]
    topic: String,

    /// Target word count
    #[arg(short, long, env = "BLOGFORGE_WORDS")]
    #[arg(default_value_t = DEFAULT_WORD_COUNT)]
    words: u32,

    /// Writing tone (accepted for forward compatibility)
    #[arg(long, value_enum)]
    tone: Option<ToneArg>,

    /// Seed for reproducible output
    #[arg(long, env = "BLOGFORGE_SEED")]
    seed: Option<u64>,

    /// Wait two to four seconds before generating, like a remote service
    #[arg(long)]
    simulate_latency: bool,

    /// Fixed latency in milliseconds (implies --simulate-latency)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

#[derive(Args)]
struct RenderArgs {
    /// Include YAML frontmatter (Markdown)
    #[arg(long)]
    frontmatter: bool,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Omit the "Generated on" footer (HTML)
    #[arg(long)]
    no_footer: bool,
}

impl RenderArgs {
    fn export_options(&self) -> ExportOptions {
        let render = RenderOptions::new()
            .with_frontmatter(self.frontmatter)
            .with_footer(!self.no_footer);
        let json_format = if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        ExportOptions::new()
            .with_render_options(render)
            .with_json_format(json_format)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Plain text
    Text,
    /// Styled HTML page
    Html,
    /// Markdown
    Markdown,
    /// JSON structure
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ExportFormat::Text,
            FormatArg::Html => ExportFormat::Html,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ToneArg {
    Professional,
    Casual,
    Academic,
    Conversational,
}

impl From<ToneArg> for Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Professional => Tone::Professional,
            ToneArg::Casual => Tone::Casual,
            ToneArg::Academic => Tone::Academic,
            ToneArg::Conversational => Tone::Conversational,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            generation,
            format,
            output,
            render,
            stats,
        }) => cmd_generate(&generation, format, output.as_deref(), &render, stats),
        Some(Commands::Export {
            generation,
            format,
            all,
            output_dir,
            render,
        }) => cmd_export(&generation, format, all, &output_dir, &render),
        Some(Commands::Copy { generation }) => cmd_copy(&generation),
        Some(Commands::Restyle {
            input,
            output,
            title,
            no_footer,
        }) => cmd_restyle(&input, output.as_deref(), title.as_deref(), no_footer),
        Some(Commands::Topics) => {
            cmd_topics();
            Ok(())
        }
        Some(Commands::Classify { topic }) => cmd_classify(&topic),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print a plain-text post if a topic is provided
            if let Some(topic) = cli.topic {
                blogforge::generate(&topic)
                    .map(|doc| println!("{}", doc.plain_text()))
                    .map_err(Into::into)
            } else {
                println!("{}", "Usage: blogforge <TOPIC>".yellow());
                println!("       blogforge --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Validate the request, wait out any simulated latency, and synthesize.
fn produce(args: &GenerationArgs) -> Result<Document, Box<dyn std::error::Error>> {
    let topic = synth::validate_topic(&args.topic)?;

    let mut options = SynthOptions::new().with_word_count(args.words);
    if let Some(tone) = args.tone {
        options = options.with_tone(tone.into());
    }
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }
    options.validate()?;

    let delay = match (args.delay_ms, args.simulate_latency) {
        (Some(ms), _) => Duration::from_millis(ms),
        (None, true) => synth::simulated_latency(&mut rand::thread_rng()),
        (None, false) => return Ok(Synthesizer::with_options(options).synthesize(topic)),
    };

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?;
    pb.set_style(style);
    pb.set_message(format!("Writing about {}...", topic));
    pb.enable_steady_tick(Duration::from_millis(100));

    let rt = tokio::runtime::Runtime::new()?;
    let doc = rt.block_on(async {
        tokio::select! {
            doc = blogforge::synthesize_delayed(topic, options, delay) => Some(doc),
            _ = tokio::signal::ctrl_c() => None,
        }
    });

    match doc {
        Some(doc) => {
            pb.finish_and_clear();
            Ok(doc)
        }
        None => {
            pb.abandon_with_message("Cancelled");
            Err("Generation cancelled".into())
        }
    }
}

fn cmd_generate(
    args: &GenerationArgs,
    format: FormatArg,
    output: Option<&Path>,
    render: &RenderArgs,
    stats: bool,
) -> CmdResult {
    let doc = produce(args)?;
    let exported = export(&doc, format.into(), &render.export_options())?;

    if let Some(path) = output {
        fs::write(path, &exported.content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", exported.content);
    }

    if stats {
        print_stats(&doc);
    }

    Ok(())
}

fn cmd_export(
    args: &GenerationArgs,
    format: FormatArg,
    all: bool,
    output_dir: &Path,
    render: &RenderArgs,
) -> CmdResult {
    let doc = produce(args)?;
    let options = render.export_options();

    let formats: Vec<ExportFormat> = if all {
        ExportFormat::ALL.to_vec()
    } else {
        vec![format.into()]
    };

    println!("{}", "Output files:".green().bold());
    for (i, format) in formats.iter().enumerate() {
        let exported = export(&doc, *format, &options)?;
        let path = exported.save(output_dir)?;
        let branch = if i + 1 == formats.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn cmd_copy(args: &GenerationArgs) -> CmdResult {
    let doc = produce(args)?;
    let text = doc.plain_text();

    match clipboard::copy_text(&text) {
        Ok(method) => {
            println!(
                "{} {} words via {}",
                "Copied".green().bold(),
                doc.word_count(),
                method
            );
        }
        Err(e) => {
            log::warn!("Clipboard unavailable: {}", e);
            eprintln!(
                "{} could not reach the clipboard ({}); printing instead",
                "Notice:".yellow().bold(),
                e
            );
            println!("{}", text);
        }
    }

    Ok(())
}

fn cmd_restyle(
    input: &Path,
    output: Option<&Path>,
    title: Option<&str>,
    no_footer: bool,
) -> CmdResult {
    let text = fs::read_to_string(input)?;

    let title = match title {
        Some(title) => title.to_string(),
        None => page_title(&text, input),
    };

    let options = RenderOptions::new().with_footer(!no_footer);
    let html = render::restyle_text(&text, &title, &options);

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("html"));
    fs::write(&output, &html)?;
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

/// First non-empty line of `text`, else the input file stem.
fn page_title(text: &str, input: &Path) -> String {
    if let Some(line) = text.lines().map(str::trim).find(|line| !line.is_empty()) {
        return line.to_string();
    }
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn cmd_topics() {
    println!("{}", "Popular Topics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for topic in synth::POPULAR_TOPICS {
        println!("  {} ({})", topic, synth::classify(topic));
    }

    println!();
    println!("{}", "Word Count Presets".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (words, label) in synth::WORD_COUNT_PRESETS {
        let marker = if words == DEFAULT_WORD_COUNT {
            " (default)"
        } else {
            ""
        };
        println!("  {:>5}  {}{}", words, label, marker.dimmed());
    }
}

fn cmd_classify(topic: &str) -> CmdResult {
    let topic = synth::validate_topic(topic)?;

    println!("{}: {}", "Topic".bold(), synth::format_topic(topic));
    println!("{}: {}", "Length".bold(), synth::TopicStats::of(topic));

    match synth::matched_keyword(topic) {
        Some((category, keyword)) => {
            println!("{}: {}", "Category".bold(), category.to_string().green());
            println!("{}: \"{}\"", "Matched".bold(), keyword);
        }
        None => {
            println!(
                "{}: {} {}",
                "Category".bold(),
                synth::classify(topic).to_string().green(),
                "(fallback)".dimmed()
            );
        }
    }

    Ok(())
}

fn print_stats(doc: &Document) {
    let stats = doc.stats();

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Category".bold(), doc.category());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Bullet points".bold(), stats.bullet_count);
    println!(
        "{}: {} min read",
        "Reading time".bold(),
        stats.reading_time_minutes
    );
}

fn cmd_version() {
    println!(
        "{} {}",
        "blogforge".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Template-driven blog post generator");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_restyle_writes_html_next_to_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("post.txt");
        fs::write(&input, "Remote Work Guide\n\nIntroduction\n\nStay focused.").unwrap();

        cmd_restyle(&input, None, None, false).unwrap();

        let html = fs::read_to_string(dir.path().join("post.html")).unwrap();
        assert!(html.contains("<title>Remote Work Guide</title>"));
        assert!(html.contains("<h1>Remote Work Guide</h1>"));
        assert!(html.contains("Generated on"));
    }

    #[test]
    fn test_restyle_with_output_and_title() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("post.txt");
        let output = dir.path().join("page.html");
        fs::write(&input, "Remote Work Guide\n\nStay focused.").unwrap();

        cmd_restyle(&input, Some(&output), Some("Custom"), true).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Custom</title>"));
        assert!(!html.contains("Generated on"));
        assert!(!dir.path().join("post.html").exists());
    }

    #[test]
    fn test_page_title_falls_back_to_file_stem() {
        let input = Path::new("dir/notes.txt");
        assert_eq!(page_title("\n  \nFirst line\n", input), "First line");
        assert_eq!(page_title("  \n", input), "notes");
    }

    #[test]
    fn test_subcommand_names_win_over_topics() {
        let cli = Cli::try_parse_from(["blogforge", "topics"]).unwrap();
        assert!(cli.topic.is_none());
        assert!(matches!(cli.command, Some(Commands::Topics)));

        let cli = Cli::try_parse_from(["blogforge", "generate", "topics"]).unwrap();
        match cli.command {
            Some(Commands::Generate { generation, .. }) => {
                assert_eq!(generation.topic, "topics");
            }
            _ => panic!("expected generate"),
        }

        let cli = Cli::try_parse_from(["blogforge", "Remote Work"]).unwrap();
        assert_eq!(cli.topic.as_deref(), Some("Remote Work"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_long_help_explains_topic_precedence() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("blogforge generate <TOPIC>"));
    }
}
