use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use pagecraft::{
    rendering, DesignerConfig, ElementId, ElementKind, GlobalStylesPatch, PropertyEdit,
    Session, StylePatch,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pagecraft", version, about = "Build a page from elements and export it as HTML")]
struct Cli {
    /// Accent colour for buttons on new projects
    #[arg(long, global = true)]
    accent: Option<String>,

    /// Insert content into the HTML without escaping it
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an empty project file
    New {
        project: PathBuf,
        /// Document title
        #[arg(long)]
        title: Option<String>,
    },
    /// Append an element (header, paragraph, button, image, divider, form)
    Add {
        project: PathBuf,
        kind: ElementKind,
        /// Replace the default content
        #[arg(long)]
        content: Option<String>,
    },
    /// List elements in page order
    List { project: PathBuf },
    /// Select an element
    Select { project: PathBuf, id: ElementId },
    /// Delete an element, or the selected one when no id is given
    Delete { project: PathBuf, id: Option<ElementId> },
    /// Replace an element's content
    Content {
        project: PathBuf,
        id: ElementId,
        text: String,
    },
    /// Set style properties, e.g. `font_size=20 color=#222222`
    Style {
        project: PathBuf,
        id: ElementId,
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Set document background colour and/or font family
    Global {
        project: PathBuf,
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        font: Option<String>,
    },
    /// Render the page to an HTML file
    Export { project: PathBuf, output: PathBuf },
    /// Render to preview.html in the current directory and open it
    Preview {
        project: PathBuf,
        /// Only write the file
        #[arg(long)]
        no_open: bool,
    },
    /// Write the old one-line-per-element text dump
    Legacy { project: PathBuf, output: PathBuf },
    /// Print the SHA-256 of the rendered page
    Fingerprint { project: PathBuf },
}

fn config_from(cli: &Cli) -> DesignerConfig {
    let mut config = DesignerConfig::default();
    if let Some(accent) = &cli.accent {
        config.accent_color = accent.clone();
    }
    config.render.escape_content = !cli.raw;
    config
}

fn open(config: DesignerConfig, project: &Path) -> anyhow::Result<Session> {
    Session::open(config, project)
        .with_context(|| format!("could not open project {}", project.display()))
}

fn save(session: &mut Session) -> anyhow::Result<()> {
    session.save_project().context("could not save project")?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config_from(&cli);

    match cli.command {
        Command::New { project, title } => {
            if let Some(title) = title {
                config.title = title;
            }
            let mut session = Session::new(config);
            let path = session.save_project_as(&project)?;
            println!("{}", path.display());
        }
        Command::Add {
            project,
            kind,
            content,
        } => {
            let mut session = open(config, &project)?;
            let id = session.add_element(kind);
            if let Some(text) = content {
                session.commit_edit(id, &PropertyEdit::new().content(text))?;
            }
            save(&mut session)?;
            println!("{}", id);
        }
        Command::List { project } => {
            let session = open(config, &project)?;
            let page = session.page();
            for el in page.list_elements() {
                let marker = if page.selected_id() == Some(el.id()) { "*" } else { " " };
                println!("{}{:>4}  {:<9}  {}", marker, el.id(), el.kind(), el.content());
                for (key, value) in el.styles().overrides() {
                    println!("{:>17}{} = {}", "", key, value);
                }
            }
        }
        Command::Select { project, id } => {
            let mut session = open(config, &project)?;
            session.select_element(id);
            if session.page().selected_id() != Some(id) {
                bail!("no element with id {}", id);
            }
            save(&mut session)?;
        }
        Command::Delete { project, id } => {
            let mut session = open(config, &project)?;
            let removed = match id {
                Some(id) => session.delete_element(id),
                None => session.delete_selected(),
            };
            match removed {
                Some(el) => println!("deleted {} {}", el.kind(), el.id()),
                None => log::warn!("nothing to delete"),
            }
            save(&mut session)?;
        }
        Command::Content { project, id, text } => {
            let mut session = open(config, &project)?;
            session.commit_edit(id, &PropertyEdit::new().content(text))?;
            save(&mut session)?;
        }
        Command::Style {
            project,
            id,
            assignments,
        } => {
            let mut session = open(config, &project)?;
            let mut patch = StylePatch::new();
            for a in &assignments {
                let (key, value) = StylePatch::parse_assignment(a)?;
                patch.set(key, value);
            }
            session
                .page_mut()
                .update_styles(id, &patch)
                .with_context(|| format!("could not update styles of element {}", id))?;
            save(&mut session)?;
        }
        Command::Global {
            project,
            background,
            font,
        } => {
            let mut session = open(config, &project)?;
            session.update_global_styles(GlobalStylesPatch {
                background_color: background,
                font_family: font,
            });
            save(&mut session)?;
        }
        Command::Export { project, output } => {
            let mut session = open(config, &project)?;
            let path = session.export_html(&output)?;
            println!("{}", path.display());
        }
        Command::Preview { project, no_open } => {
            let mut session = open(config, &project)?;
            let cwd = std::env::current_dir().context("no working directory")?;
            let path = if no_open {
                session.write_preview(&cwd)?
            } else {
                preview(&mut session, cwd)?
            };
            println!("{}", path.display());
        }
        Command::Legacy { project, output } => {
            let session = open(config, &project)?;
            let path = pagecraft::project::save_legacy(session.page(), &output)?;
            println!("{}", path.display());
        }
        Command::Fingerprint { project } => {
            let session = open(config.clone(), &project)?;
            println!("{}", rendering::fingerprint_with(session.page(), &config.render));
        }
    }
    Ok(())
}

#[cfg(feature = "preview")]
fn preview(session: &mut Session, dir: PathBuf) -> anyhow::Result<PathBuf> {
    Ok(session.preview(dir)?)
}

#[cfg(not(feature = "preview"))]
fn preview(session: &mut Session, dir: PathBuf) -> anyhow::Result<PathBuf> {
    log::warn!("built without the `preview` feature; writing the file only");
    Ok(session.write_preview(dir)?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("pagecraft=info"))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
