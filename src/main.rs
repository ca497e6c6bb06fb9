use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use metis::analysis::analyze;
use metis::config::Settings;
use metis::llm::MistralClient;
use metis::prompt::{compose, ContextDetails, ContextOption, SectionLayout, UsageContext};
use metis::response::parse;
use metis::service::Generator;
use metis::tree::{format_tree, ExpressionDocument, ExpressionNode};

#[derive(Parser)]
#[command(name = "metis")]
#[command(about = "Turn natural-language prompts into Cameo structured expression templates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect Cameo expression patterns in a prompt
    Analyze {
        /// The natural-language prompt
        prompt: String,
    },

    /// Print the system prompt that would be sent for a prompt
    Compose {
        /// The natural-language prompt
        prompt: String,

        /// Section layout (core, extended)
        #[arg(short, long)]
        layout: Option<String>,

        /// Usage context (scope-criteria, derived-property, custom-column, legend)
        #[arg(short, long)]
        context: Option<String>,

        /// Scope input type, for scope-criteria
        #[arg(long)]
        input_type: Option<String>,

        /// Row element type, for custom-column
        #[arg(long)]
        row_type: Option<String>,

        /// Owning element type, for derived-property
        #[arg(long)]
        element_type: Option<String>,
    },

    /// Parse a raw model response into structured sections
    Parse {
        /// Response file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Render an expressionView JSON document as an indented tree
    Render {
        /// JSON file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Run the full pipeline against the Mistral API
    Generate {
        /// The natural-language prompt
        prompt: String,

        /// Section layout (core, extended); defaults to the settings file
        #[arg(short, long)]
        layout: Option<String>,

        /// Usage context (scope-criteria, derived-property, custom-column, legend)
        #[arg(short, long)]
        context: Option<String>,

        /// Scope input type, for scope-criteria
        #[arg(long)]
        input_type: Option<String>,

        /// Row element type, for custom-column
        #[arg(long)]
        row_type: Option<String>,

        /// Owning element type, for derived-property
        #[arg(long)]
        element_type: Option<String>,

        /// Settings file (TOML)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze { prompt } => {
            let analysis = analyze(&prompt);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }

        Commands::Compose {
            prompt,
            layout,
            context,
            input_type,
            row_type,
            element_type,
        } => {
            let layout = resolve_layout(layout, SectionLayout::Core)?;
            let context = build_context(context, input_type, row_type, element_type)?;
            let analysis = analyze(&prompt);
            println!("{}", compose(&analysis, layout, context.as_ref()));
            Ok(())
        }

        Commands::Parse { file } => {
            let raw = read_input(file)?;
            let sections = parse(&raw);
            println!("{}", serde_json::to_string_pretty(&sections)?);
            if let Some(document) = &sections.expression_view {
                println!();
                print!("{}", format_tree(&document.expression_view));
            }
            Ok(())
        }

        Commands::Render { file } => {
            let raw = read_input(file)?;
            let document = parse_document(&raw)?;
            print!("{}", format_tree(&document.expression_view));
            Ok(())
        }

        Commands::Generate {
            prompt,
            layout,
            context,
            input_type,
            row_type,
            element_type,
            settings,
        } => {
            let settings = match settings {
                Some(path) => Settings::load(&path)?,
                None => Settings::default(),
            };
            let layout = resolve_layout(layout, settings.layout)?;
            let context = build_context(context, input_type, row_type, element_type)?;

            let client = MistralClient::new(settings.llm_config()?)?;
            info!(model = client.model(), layout = layout.key(), "generating expression template");

            let generator = Generator::new(client, layout);
            let reply = generator.generate(&prompt, context.as_ref()).await?;

            println!("{}", serde_json::to_string_pretty(&reply)?);
            if let Some(document) = &reply.expression_view {
                println!();
                print!("{}", format_tree(&document.expression_view));
            }
            Ok(())
        }
    }
}

fn resolve_layout(key: Option<String>, fallback: SectionLayout) -> Result<SectionLayout> {
    match key {
        Some(key) => SectionLayout::from_key(&key)
            .ok_or_else(|| anyhow!("unknown layout '{}' (expected core or extended)", key)),
        None => Ok(fallback),
    }
}

fn build_context(
    option: Option<String>,
    input_type: Option<String>,
    row_type: Option<String>,
    element_type: Option<String>,
) -> Result<Option<UsageContext>> {
    let Some(key) = option else {
        if input_type.is_some() || row_type.is_some() || element_type.is_some() {
            bail!("--input-type, --row-type and --element-type require --context");
        }
        return Ok(None);
    };
    let option = ContextOption::from_key(&key).ok_or_else(|| {
        anyhow!(
            "unknown context '{}' (expected scope-criteria, derived-property, custom-column or legend)",
            key
        )
    })?;
    Ok(Some(UsageContext {
        option,
        details: ContextDetails {
            input_type,
            row_type,
            element_type,
        },
    }))
}

/// Accept either the wrapped `{"expressionView": ...}` document or a bare
/// tree node, like the web UI does.
fn parse_document(raw: &str) -> Result<ExpressionDocument> {
    if let Ok(document) = serde_json::from_str::<ExpressionDocument>(raw) {
        return Ok(document);
    }
    serde_json::from_str::<ExpressionNode>(raw)
        .map(ExpressionDocument::from)
        .context("input is not an expressionView JSON document")
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
