//! Tag Cloud Generator - CLI
//!
//! Builds an HTML tag cloud from the most frequent words of a text file.
//! Without a subcommand it prompts for the input file, output file and word count.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tag_cloud::{
    commands::{CloudSummary, CountConfig, GenerateConfig, count_top, generate, run_interactive},
    core::SeparatorSet,
    output::{print_cloud_summary, print_count_result, print_read_warning},
    render::{FONT_MAX, FONT_MIN, FontScale, HtmlOptions, default_stylesheets},
};

#[derive(Parser)]
#[command(
    name = "tag_cloud",
    about = "Generate an HTML tag cloud from the most frequent words of a text file",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Characters that separate words (default: space, tab and common punctuation)
    #[arg(short = 's', long, global = true)]
    separators: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the input file, output file and word count (default)
    Interactive {
        #[command(flatten)]
        style: StyleArgs,
    },

    /// Generate a tag cloud file
    Generate {
        /// Text file to read
        input: PathBuf,

        /// HTML file to write
        output: PathBuf,

        /// Number of words in the cloud
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        #[command(flatten)]
        style: StyleArgs,

        /// Show a progress bar while reading the input
        #[arg(short, long)]
        progress: bool,

        /// Do not print a summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the most frequent words without writing HTML
    Count {
        /// Text file to read
        input: PathBuf,

        /// Number of words to list
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Show a progress bar while reading the input
        #[arg(short, long)]
        progress: bool,
    },
}

/// Rendering options shared by the commands that write HTML
#[derive(Args)]
struct StyleArgs {
    /// Smallest font size class
    #[arg(long, default_value_t = FONT_MIN)]
    font_min: u32,

    /// Largest font size class
    #[arg(long, default_value_t = FONT_MAX)]
    font_max: u32,

    /// Stylesheet URL to link (repeatable; default: the tag cloud stylesheet and styles.css)
    #[arg(long = "stylesheet", value_name = "URL")]
    stylesheets: Vec<String>,
}

impl Default for StyleArgs {
    fn default() -> Self {
        Self {
            font_min: FONT_MIN,
            font_max: FONT_MAX,
            stylesheets: Vec::new(),
        }
    }
}

impl StyleArgs {
    fn html_options(self) -> Result<HtmlOptions> {
        let scale = FontScale::new(self.font_min, self.font_max)?;
        let stylesheets = if self.stylesheets.is_empty() {
            default_stylesheets()
        } else {
            self.stylesheets
        };
        Ok(HtmlOptions { scale, stylesheets })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let separators = cli
        .separators
        .as_deref()
        .map_or_else(SeparatorSet::default, SeparatorSet::new);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or_else(|| Commands::Interactive {
        style: StyleArgs::default(),
    });

    match command {
        Commands::Interactive { style } => run_interactive_command(&separators, style),
        Commands::Generate {
            input,
            output,
            count,
            style,
            progress,
            quiet,
        } => {
            let config = GenerateConfig {
                input,
                output,
                count,
                separators,
                html: style.html_options()?,
                show_progress: progress,
            };
            run_generate_command(&config, quiet)
        }
        Commands::Count {
            input,
            count,
            progress,
        } => {
            let config = CountConfig {
                input,
                count,
                separators,
                show_progress: progress,
            };
            run_count_command(&config)
        }
    }
}

fn run_interactive_command(separators: &SeparatorSet, style: StyleArgs) -> Result<()> {
    let html = style.html_options()?;
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    let summary = run_interactive(&mut stdin, &mut stdout, separators, &html)?;
    if let Some(CloudSummary {
        source_name,
        read_error: Some(error),
        ..
    }) = &summary
    {
        print_read_warning(source_name, error);
    }
    Ok(())
}

fn run_generate_command(config: &GenerateConfig, quiet: bool) -> Result<()> {
    let summary = generate(config)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;

    if !quiet {
        print_cloud_summary(&summary, &config.output);
    } else if let Some(error) = &summary.read_error {
        print_read_warning(&summary.source_name, error);
    }
    Ok(())
}

fn run_count_command(config: &CountConfig) -> Result<()> {
    let result = count_top(config)?;
    print_count_result(&result);
    Ok(())
}
