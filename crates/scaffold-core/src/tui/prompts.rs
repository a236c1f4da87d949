//! Charm-style CLI prompts using cliclack
//!
//! The interactive orchestration of the scaffold pipeline: onboarding,
//! template selection, overwrite consent, dependency install, and the
//! post-scaffold report. Everything interactive lives here so the core
//! stages stay prompt-free.

use crate::error::{prompt_result, ScaffoldError};
use crate::product::ProductConfig;
use crate::runtime::package_manager::{self, PackageManager};
use crate::scaffold::{naming, pipeline};
use crate::scaffold::{ScaffoldOutcome, ScaffoldRequest};
use crate::templates::info::{self, TemplateInfo};
use crate::templates::registry::TemplateStore;
use crate::templates::TemplateDefinition;
use crate::tui::wizard;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the scaffold flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name to use instead of prompting
    pub name: Option<String>,

    /// Template title to use instead of prompting
    pub template: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the scaffold flow with interactive prompts
pub async fn run<C: ProductConfig>(
    config: &C,
    store: &dyn TemplateStore,
    args: CreateArgs,
) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Load the registry; branch to onboarding when empty
    let templates = load_templates(config, store, &args)?;

    // Step 2: Collect the scaffold request
    let project_name = select_project_name(config, &args)?;
    let template = select_template(templates, &args)?;
    let request = ScaffoldRequest {
        project_name,
        template,
    };

    // Step 3: Target resolution (overwrite consent, or silent rename in --yes mode)
    let (project_name, target_dir) = resolve_target(&request, args.yes)?;

    // Step 4-5: Clone, history reset, env seeding
    cliclack::log::step(format!(
        "Downloading template from {}...",
        request.template.source
    ))?;
    let outcome = pipeline::materialize(&request, &target_dir).await?;
    report_outcome(&outcome)?;

    // Step 6: Optional dependency install
    let (manager, installed) = offer_install(&target_dir, args.yes).await?;

    // Step 7: Metadata-driven reporting, or the generic fallback
    report_next_steps(config, &project_name, &target_dir, manager, installed)?;

    cliclack::outro(format!("Project ready in ./{}", project_name))?;

    Ok(())
}

fn load_templates<C: ProductConfig>(
    config: &C,
    store: &dyn TemplateStore,
    args: &CreateArgs,
) -> Result<Vec<TemplateDefinition>> {
    let templates = store.load()?;
    if !templates.is_empty() {
        return Ok(templates);
    }

    cliclack::log::warning("No templates configured yet.")?;
    if let Some(path) = store.location() {
        cliclack::log::info(format!("Config location: {}", path.display()))?;
    }

    if args.yes {
        anyhow::bail!(
            "No templates configured. Run `{} --config` to add some.",
            config.name()
        );
    }

    let set_up = prompt_result(
        cliclack::confirm("Set up templates now?")
            .initial_value(true)
            .interact(),
    )?;
    if !set_up {
        return Err(ScaffoldError::Cancelled.into());
    }

    wizard::onboarding_wizard(store, config.default_branch())
}

fn select_project_name<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("Project name is required");
        }
        cliclack::log::success(format!("Project name: {}", name))?;
        return Ok(name.to_string());
    }

    let name: String = prompt_result(
        cliclack::input("What is the project name?")
            .default_input(config.default_project_name())
            .validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("Project name is required")
                } else {
                    Ok(())
                }
            })
            .interact(),
    )?;
    Ok(name.trim().to_string())
}

fn select_template(
    templates: Vec<TemplateDefinition>,
    args: &CreateArgs,
) -> Result<TemplateDefinition> {
    // --template picks by title without prompting
    if let Some(wanted) = &args.template {
        let found = templates
            .iter()
            .find(|t| t.title.eq_ignore_ascii_case(wanted));
        return match found {
            Some(template) => {
                cliclack::log::success(format!("Template: {}", template.title))?;
                Ok(template.clone())
            }
            None => {
                let available = templates
                    .iter()
                    .map(|t| t.title.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                anyhow::bail!(
                    "Template '{}' not found. Available templates: {}",
                    wanted,
                    available
                )
            }
        };
    }

    if templates.is_empty() {
        anyhow::bail!("No templates configured.");
    }

    // A single configured template is used automatically
    if templates.len() == 1 {
        let mut templates = templates;
        let template = templates.remove(0);
        cliclack::log::success(format!(
            "Template: {} — {}",
            template.title, template.description
        ))?;
        return Ok(template);
    }

    let mut select = cliclack::select("Which template would you like to use?");
    for (index, template) in templates.iter().enumerate() {
        select = select.item(index, &template.title, &template.description);
    }
    let index = prompt_result(select.interact())?;

    let template = templates
        .into_iter()
        .nth(index)
        .context("Selected template out of range")?;
    cliclack::log::success(format!("Template: {}", template.title))?;
    Ok(template)
}

/// Settle the target directory. Interactive runs ask for overwrite consent
/// and remove the old directory on approval; `--yes` runs pick a unique
/// suffixed name instead, never destroying anything silently.
fn resolve_target(request: &ScaffoldRequest, yes: bool) -> Result<(String, PathBuf)> {
    let cwd = std::env::current_dir().context("Could not determine the current directory")?;
    let mut project_name = request.project_name.clone();
    let mut target_dir = cwd.join(&project_name);

    if !target_dir.exists() {
        return Ok((project_name, target_dir));
    }

    if yes {
        project_name = naming::resolve_unique(&project_name, &cwd);
        cliclack::log::info(format!(
            "Directory {} already exists, using {} instead",
            request.project_name, project_name
        ))?;
        target_dir = cwd.join(&project_name);
        return Ok((project_name, target_dir));
    }

    let overwrite = prompt_result(
        cliclack::confirm(format!(
            "Directory {} already exists. Overwrite?",
            project_name
        ))
        .initial_value(false)
        .interact(),
    )?;
    if !overwrite {
        return Err(ScaffoldError::Cancelled.into());
    }

    std::fs::remove_dir_all(&target_dir)
        .with_context(|| format!("Failed to remove {}", target_dir.display()))?;
    Ok((project_name, target_dir))
}

fn report_outcome(outcome: &ScaffoldOutcome) -> Result<()> {
    for warning in &outcome.warnings {
        cliclack::log::warning(warning)?;
    }
    if outcome.history_reset {
        cliclack::log::success("Initialized a fresh git repository")?;
    }
    if outcome.env_seeded {
        cliclack::log::success("Created .env from .env.example")?;
    }
    Ok(())
}

/// Offer a dependency install when a package manager is available.
/// Returns the detected manager and whether an install succeeded.
async fn offer_install(
    target_dir: &PathBuf,
    yes: bool,
) -> Result<(Option<PackageManager>, bool)> {
    let Some(manager) = package_manager::detect() else {
        cliclack::log::info("No package manager found; skipping dependency install.")?;
        return Ok((None, false));
    };

    let consent = yes
        || prompt_result(
            cliclack::confirm(format!("Install dependencies with {}?", manager))
                .initial_value(true)
                .interact(),
        )?;
    if !consent {
        return Ok((Some(manager), false));
    }

    cliclack::log::step(format!("Running {} install...", manager))?;
    match package_manager::install(manager, target_dir).await {
        Ok(true) => {
            cliclack::log::success("Dependencies installed")?;
            Ok((Some(manager), true))
        }
        Ok(false) => {
            cliclack::log::warning(format!(
                "{} install exited with an error; run it manually once the project is set up.",
                manager
            ))?;
            Ok((Some(manager), false))
        }
        Err(err) => {
            cliclack::log::warning(format!("Dependency install failed: {:#}", err))?;
            Ok((Some(manager), false))
        }
    }
}

fn report_next_steps<C: ProductConfig>(
    config: &C,
    project_name: &str,
    target_dir: &PathBuf,
    manager: Option<PackageManager>,
    installed: bool,
) -> Result<()> {
    // Metadata parse failures are best-effort: warn and fall back
    let metadata = match TemplateInfo::load(target_dir) {
        Ok(metadata) => metadata,
        Err(err) => {
            cliclack::log::warning(format!("Could not read template metadata: {:#}", err))?;
            None
        }
    };

    match metadata {
        Some(template_info) => {
            let mut body = String::new();
            if let Some(variant) = &template_info.variant {
                body.push_str(&format!("Variant: {}\n", variant));
            }
            if let Some(description) = &template_info.description {
                body.push_str(&format!("{}\n", description));
            }
            if !template_info.features.is_empty() {
                body.push_str("\nFeatures:\n");
                for feature in &template_info.features {
                    body.push_str(&format!("  - {}\n", feature));
                }
            }
            let title = if template_info.name.is_empty() {
                project_name.to_string()
            } else {
                template_info.name.clone()
            };
            cliclack::note(title, body.trim_end())?;

            let steps = template_info.remaining_steps(installed);
            if !steps.is_empty() {
                let listing = steps
                    .iter()
                    .map(|step| format!("  {}", step))
                    .collect::<Vec<_>>()
                    .join("\n");
                cliclack::note("Next steps", listing)?;
            }

            if info::has_ai_release_script(target_dir) {
                cliclack::log::info(format!(
                    "This project defines an `{}` script for AI-assisted releases.",
                    info::AI_RELEASE_SCRIPT
                ))?;
            }
        }
        None => {
            let listing = config
                .fallback_next_steps(project_name, manager, installed)
                .iter()
                .map(|step| format!("  {}", step))
                .collect::<Vec<_>>()
                .join("\n");
            cliclack::note("Next steps", listing)?;
        }
    }

    Ok(())
}
