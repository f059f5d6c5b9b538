//! Charm-style CLI prompts using cliclack

use crate::config::ScaffoldDefaults;
use crate::generator::ProjectGenerator;
use crate::project::{Archetype, Language, ProjectDescriptor, ProjectName};
use anyhow::{Context, Result};
use console::style;
use std::path::PathBuf;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create
    pub name: Option<String>,

    /// Project type id or alias
    pub archetype: Option<String>,

    /// Language id (js or ts)
    pub language: Option<String>,

    /// Defaults file overriding `$JSGEN_CONFIG`
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro(style(" js-project-generator ").on_cyan().black())?;

    let defaults = ScaffoldDefaults::load(args.config.as_deref())
        .context("Failed to load defaults")?;

    let descriptor = resolve_descriptor(&args, &defaults)?;
    let dispatcher = ProjectGenerator::new()?;

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let report = match dispatcher.generate(&descriptor).await {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Project creation failed");
            return Err(e.into());
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.files.len(),
        report.path.display()
    ));

    print_next_steps(&descriptor)?;

    Ok(())
}

/// Turn flags, defaults and answers into a complete descriptor
///
/// Values passed on the command line win over the defaults file. Anything still
/// missing is prompted for, unless `yes` is set.
pub fn resolve_descriptor(args: &CreateArgs, defaults: &ScaffoldDefaults) -> Result<ProjectDescriptor> {
    let name = match preset_name(args)? {
        Some(name) => {
            cliclack::log::info(format!("Project name: {}", name))?;
            name
        }
        None => prompt_name()?,
    };

    let archetype = match preset_archetype(args, defaults)? {
        Some(archetype) => {
            cliclack::log::info(format!("Project type: {}", archetype.display_name()))?;
            archetype
        }
        None => prompt_archetype()?,
    };

    let language = match preset_language(args, defaults, archetype)? {
        Some(language) => {
            if archetype.forced_language().is_some() {
                cliclack::log::info(format!(
                    "{} projects are always generated in {}",
                    archetype.display_name(),
                    language.display_name()
                ))?;
            } else {
                cliclack::log::info(format!("Language: {}", language.display_name()))?;
            }
            language
        }
        None => prompt_language()?,
    };

    Ok(ProjectDescriptor::new(name, archetype, language))
}

fn preset_name(args: &CreateArgs) -> Result<Option<ProjectName>> {
    match &args.name {
        Some(name) => Ok(Some(ProjectName::parse(name)?)),
        None if args.yes => anyhow::bail!("A project name is required with --yes"),
        None => Ok(None),
    }
}

fn preset_archetype(args: &CreateArgs, defaults: &ScaffoldDefaults) -> Result<Option<Archetype>> {
    if let Some(id) = &args.archetype {
        return Ok(Some(id.parse()?));
    }
    if defaults.archetype.is_some() {
        return Ok(defaults.archetype);
    }
    Ok(args.yes.then_some(Archetype::NodeJs))
}

fn preset_language(
    args: &CreateArgs,
    defaults: &ScaffoldDefaults,
    archetype: Archetype,
) -> Result<Option<Language>> {
    if let Some(forced) = archetype.forced_language() {
        return Ok(Some(forced));
    }
    if let Some(id) = &args.language {
        return Ok(Some(id.parse()?));
    }
    if defaults.language.is_some() {
        return Ok(defaults.language);
    }
    Ok(args.yes.then_some(Language::JavaScript))
}

fn prompt_name() -> Result<ProjectName> {
    let input: String = cliclack::input("What is your project name?")
        .placeholder("my-project")
        .validate(|input: &String| match ProjectName::parse(input) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.to_string()),
        })
        .interact()?;

    Ok(ProjectName::parse(&input)?)
}

fn prompt_archetype() -> Result<Archetype> {
    let mut select = cliclack::select("Which type of project do you want to create?");
    for archetype in Archetype::ALL {
        select = select.item(archetype, archetype.display_name(), archetype.id());
    }

    Ok(select.initial_value(Archetype::NodeJs).interact()?)
}

fn prompt_language() -> Result<Language> {
    let mut select = cliclack::select("Which language do you want to use?");
    for language in Language::ALL {
        select = select.item(language, language.display_name(), language.id());
    }

    Ok(select.initial_value(Language::JavaScript).interact()?)
}

fn print_next_steps(descriptor: &ProjectDescriptor) -> Result<()> {
    let steps = descriptor.archetype.next_steps(descriptor.name.as_str());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, style(step).cyan());
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
