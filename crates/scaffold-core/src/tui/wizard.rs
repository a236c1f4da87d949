//! Interactive template configuration wizard and management menu
//!
//! The wizard collects template definitions one at a time into an in-memory
//! batch and commits the whole batch to the registry at the end, replacing
//! any prior list. Abandoning the session before the first complete entry
//! leaves the registry untouched.

use crate::error::ScaffoldError;
use crate::templates::registry::TemplateStore;
use crate::templates::TemplateDefinition;
use anyhow::Result;
use std::io;

/// Hosting domains the wizard accepts in a repository location.
const KNOWN_GIT_HOSTS: &[&str] = &["github.com", "gitlab.com"];

/// Repository-location validation: must reference a known hosting domain.
pub fn validate_repo_location(value: &str) -> Result<(), &'static str> {
    if KNOWN_GIT_HOSTS.iter().any(|host| value.contains(host)) {
        Ok(())
    } else {
        Err("Please use a valid Git hosting URL (github.com or gitlab.com)")
    }
}

/// Distinguish prompt abandonment (ESC/ctrl-c) from real I/O failures.
fn try_prompt<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// One COLLECTING iteration. `Ok(None)` means the user abandoned the entry.
fn collect_entry(default_branch: &str) -> Result<Option<TemplateDefinition>> {
    let title: Option<String> = try_prompt(
        cliclack::input("Template name:")
            .validate(|value: &String| {
                if value.trim().is_empty() {
                    Err("Name is required")
                } else {
                    Ok(())
                }
            })
            .interact(),
    )?;
    let Some(title) = title else {
        return Ok(None);
    };

    let repo: Option<String> = try_prompt(
        cliclack::input("Repository location (SSH or HTTPS):")
            .placeholder("git@github.com:username/repo")
            .validate(|value: &String| validate_repo_location(value))
            .interact(),
    )?;
    let Some(repo) = repo else {
        return Ok(None);
    };

    let branch: Option<String> = try_prompt(
        cliclack::input("Branch name:")
            .default_input(default_branch)
            .interact(),
    )?;
    let Some(branch) = branch else {
        return Ok(None);
    };

    let description: Option<String> = try_prompt(
        cliclack::input("Description (optional):")
            .required(false)
            .interact(),
    )?;
    let Some(description) = description else {
        return Ok(None);
    };

    Ok(Some(
        TemplateDefinition::new(title.trim(), repo.trim(), branch.trim())
            .with_description(description.trim()),
    ))
}

/// Accumulates wizard entries and remembers whether the session ended by
/// abandoning an entry (which warrants a cancellation notice) or by
/// declining "add another?".
#[derive(Default)]
struct CollectSession {
    batch: Vec<TemplateDefinition>,
    abandoned: bool,
}

impl CollectSession {
    /// Feed one collection result; returns false when the loop should stop.
    fn record(&mut self, entry: Option<TemplateDefinition>) -> bool {
        match entry {
            Some(definition) => {
                self.batch.push(definition);
                true
            }
            None => {
                self.abandoned = true;
                false
            }
        }
    }
}

/// Run the configuration wizard: collect one or more template definitions
/// and commit the batch to the registry, replacing the prior list.
///
/// Returns the committed batch; an empty batch means the session was
/// abandoned and the registry was not touched.
pub fn config_wizard(store: &dyn TemplateStore, default_branch: &str) -> Result<Vec<TemplateDefinition>> {
    cliclack::log::step("Template configuration")?;
    cliclack::log::remark("Add your template repositories to the config.")?;

    let mut session = CollectSession::default();

    loop {
        let entry = collect_entry(default_branch)?;
        if let Some(definition) = &entry {
            cliclack::log::success(format!("Added: {}", definition.title))?;
        }
        if !session.record(entry) {
            break;
        }

        let add_more = try_prompt(
            cliclack::confirm("Add another template?")
                .initial_value(false)
                .interact(),
        )?;
        if !matches!(add_more, Some(true)) {
            break;
        }
    }

    // Any abandoned entry gets the notice, even when earlier complete
    // entries are still committed below.
    if session.abandoned {
        cliclack::log::warning("Template configuration cancelled.")?;
    }

    let batch = session.batch;
    if batch.is_empty() {
        return Ok(batch);
    }

    store.save(&batch)?;
    cliclack::log::success(format!("Saved {} template(s) to config.", batch.len()))?;
    if let Some(path) = store.location() {
        cliclack::log::info(format!("Config location: {}", path.display()))?;
    }

    Ok(batch)
}

/// What the management menu's view action shows: a numbered listing (None
/// when nothing is configured) and the config-location line.
fn view_report(
    templates: &[TemplateDefinition],
    location: Option<&std::path::Path>,
) -> (Option<String>, Option<String>) {
    let listing = if templates.is_empty() {
        None
    } else {
        Some(
            templates
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    format!(
                        "{}. {}\n   Repo: {}\n   Desc: {}",
                        i + 1,
                        t.title,
                        t.source,
                        t.description
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };
    let location_line = location.map(|path| format!("Config location: {}", path.display()));
    (listing, location_line)
}

/// One-shot management menu: add, view, reset, or exit.
pub fn manage_templates(store: &dyn TemplateStore, default_branch: &str) -> Result<()> {
    let action = try_prompt(
        cliclack::select("What would you like to do?")
            .item("add", "Add new template", "")
            .item("view", "View current templates", "")
            .item("reset", "Reset configuration", "")
            .item("exit", "Exit", "")
            .interact(),
    )?;

    match action {
        Some("add") => {
            config_wizard(store, default_branch)?;
        }
        Some("view") => {
            let templates = store.load()?;
            let location = store.location();
            let (listing, location_line) = view_report(&templates, location.as_deref());
            match listing {
                Some(listing) => cliclack::note("Current templates", listing)?,
                None => cliclack::log::warning("No templates configured yet.")?,
            }
            if let Some(line) = location_line {
                cliclack::log::info(line)?;
            }
        }
        Some("reset") => {
            store.reset()?;
            cliclack::log::warning("Config reset. Run the tool again to add templates.")?;
        }
        _ => {
            cliclack::log::remark("Goodbye!")?;
        }
    }

    Ok(())
}

/// Run the wizard as an onboarding step: an abandoned session is a
/// cancellation, not an empty success.
pub fn onboarding_wizard(
    store: &dyn TemplateStore,
    default_branch: &str,
) -> Result<Vec<TemplateDefinition>> {
    let batch = config_wizard(store, default_branch)?;
    if batch.is_empty() {
        return Err(ScaffoldError::Cancelled.into());
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::registry::MemoryRegistry;
    use crate::templates::DEFAULT_DESCRIPTION;

    #[test]
    fn known_hosts_are_accepted() {
        assert!(validate_repo_location("git@github.com:org/repo").is_ok());
        assert!(validate_repo_location("https://gitlab.com/org/repo.git").is_ok());
    }

    #[test]
    fn unknown_hosts_are_rejected() {
        assert!(validate_repo_location("git@example.com:org/repo").is_err());
        assert!(validate_repo_location("not-a-repo").is_err());
    }

    #[test]
    fn commit_replaces_prior_registry_content() {
        // The wizard commits via TemplateStore::save, which replaces.
        let store = MemoryRegistry::with_templates(vec![TemplateDefinition::new(
            "Old",
            "git@github.com:org/old",
            "main",
        )]);
        let batch = vec![
            TemplateDefinition::new("New A", "git@github.com:org/a", "main"),
            TemplateDefinition::new("New B", "git@gitlab.com:org/b", "develop"),
        ];
        store.save(&batch).unwrap();
        assert_eq!(store.load().unwrap(), batch);
    }

    #[test]
    fn abandoned_entry_keeps_earlier_entries_and_flags_the_notice() {
        let mut session = CollectSession::default();
        assert!(session.record(Some(TemplateDefinition::new(
            "First",
            "git@github.com:org/first",
            "main",
        ))));
        assert!(!session.record(None));
        assert!(session.abandoned);
        assert_eq!(session.batch.len(), 1);
        assert_eq!(session.batch[0].title, "First");
    }

    #[test]
    fn declining_add_another_is_not_an_abandonment() {
        let mut session = CollectSession::default();
        session.record(Some(TemplateDefinition::new(
            "Only",
            "git@github.com:org/only",
            "main",
        )));
        // The loop stops at the "add another?" confirm without another
        // record call, so no cancellation notice is due.
        assert!(!session.abandoned);
    }

    #[test]
    fn view_report_includes_config_location() {
        let templates = vec![TemplateDefinition::new(
            "Starter",
            "git@github.com:org/starter",
            "main",
        )];
        let path = std::path::Path::new("/home/user/.config/create-ui-app/templates.json");
        let (listing, location_line) = view_report(&templates, Some(path));
        assert!(listing.unwrap().contains("1. Starter"));
        assert_eq!(
            location_line.unwrap(),
            "Config location: /home/user/.config/create-ui-app/templates.json"
        );
    }

    #[test]
    fn view_report_without_templates_still_shows_location() {
        let path = std::path::Path::new("/tmp/templates.json");
        let (listing, location_line) = view_report(&[], Some(path));
        assert!(listing.is_none());
        assert!(location_line.unwrap().contains("/tmp/templates.json"));
    }

    #[test]
    fn default_description_applies_to_wizard_entries() {
        let def = TemplateDefinition::new("Starter", "git@github.com:org/starter", "main")
            .with_description("");
        assert_eq!(def.description, DEFAULT_DESCRIPTION);
    }
}
