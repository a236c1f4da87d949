//! create-ui-app - Scaffold UI projects from configured git templates

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use scaffold_core::tui::{wizard, CreateArgs};
use scaffold_core::{FileRegistry, ProductConfig, ScaffoldError};

/// UI scaffold product configuration
#[derive(Clone)]
pub struct UiScaffoldConfig;

impl ProductConfig for UiScaffoldConfig {
    fn name(&self) -> &'static str {
        "create-ui-app"
    }

    fn display_name(&self) -> &'static str {
        "UI Scaffold"
    }

    fn cli_description(&self) -> &'static str {
        "Scaffold UI projects from configured git templates"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-ui-app")]
#[command(about = "Scaffold UI projects from configured git templates")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Template title to use
    #[arg(short, long)]
    pub template: Option<String>,

    /// Open the template configuration menu instead of scaffolding
    #[arg(short, long)]
    pub config: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => report_error(err),
    });
}

async fn run(args: Args) -> Result<()> {
    let product = UiScaffoldConfig;
    let registry = FileRegistry::for_product(product.name())?;

    if args.config {
        return wizard::manage_templates(&registry, product.default_branch());
    }

    let create_args = CreateArgs {
        name: args.name,
        template: args.template,
        yes: args.yes,
    };
    scaffold_core::run(&product, &registry, create_args).await
}

/// Map errors to exit codes: cancellation is a clean 0, everything else 1.
fn report_error(err: anyhow::Error) -> i32 {
    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::Cancelled) => {
            println!("{}", "Operation cancelled.".yellow());
            0
        }
        Some(clone_err @ ScaffoldError::Clone { .. }) => {
            eprintln!("{}", clone_err.to_string().red());
            if let Some(hint) = clone_err.hint() {
                eprintln!("{}", hint.yellow());
            }
            1
        }
        None => {
            eprintln!("{} {:#}", "Error:".red(), err);
            1
        }
    }
}
