use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pact Showcase - Spring Boot + Kafka + Pact demo documentation in your terminal
#[derive(Parser, Debug)]
#[command(name = "pact-showcase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive documentation page
    View(ViewArgs),

    /// Print the project structure
    Tree(TreeArgs),

    /// Print the code of a single snippet
    Snippet(SnippetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Generate a man page
    Man,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Route to open
    #[arg(short, long, default_value = "/", value_name = "PATH")]
    pub route: String,

    /// Code tab to show first (application, kafka, pact, config)
    #[arg(short, long, value_name = "ID")]
    pub tab: Option<String>,

    /// Use ASCII icons
    #[arg(long)]
    pub ascii: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Expand every folder instead of the default top level only
    #[arg(short, long)]
    pub expand_all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Use ASCII icons
    #[arg(long)]
    pub ascii: bool,
}

#[derive(Args, Debug)]
pub struct SnippetArgs {
    /// Snippet title, e.g. KafkaConfig.java (case-insensitive)
    pub title: String,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
