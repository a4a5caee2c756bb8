mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "blueprint",
    about = "Blueprint Kit: generate agent-specific slash command files from command templates",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .blueprint/ or .git/)
    #[arg(long, global = true, env = "BLUEPRINT_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate command files for AI coding agents
    Generate {
        /// Agents to generate for (e.g. claude cursor-agent qwen); all when omitted
        #[arg(long, num_args = 1..)]
        agents: Vec<String>,

        /// Only render this script variant (sh or ps)
        #[arg(long)]
        script: Option<String>,

        /// Command template directory (default: .blueprint/templates/commands, then templates/commands)
        #[arg(long)]
        templates: Option<PathBuf>,
    },

    /// List supported agents
    Agents,

    /// Render one template for one agent to stdout without writing files
    Render {
        /// Path to the command template
        template: PathBuf,

        /// Agent to render for
        #[arg(long)]
        agent: String,

        /// Script variant (default: the agent's first declared variant)
        #[arg(long)]
        script: Option<String>,
    },

    /// Inspect the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Generate {
            agents,
            script,
            templates,
        } => cmd::generate::run(&root, agents, script.as_deref(), templates, cli.json),
        Commands::Agents => cmd::agents::run(cli.json),
        Commands::Render {
            template,
            agent,
            script,
        } => cmd::render::run(&template, &agent, script.as_deref(), cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
