//! Workbench: drag component types from a library onto a workflow's dataflow.

mod logger;
mod sample;
mod workbench;

use anyhow::{Context as _, Result};
use clap::Parser;
use dataflow::PanelSettings;
use gpui::{
    prelude::*, App, Application, Focusable, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowOptions,
};
use log::LevelFilter;
use logger::WorkbenchLogger;
use std::path::{Path, PathBuf};
use crate::workbench::{Quit, ShowParent, Workbench};
use workflow::{Assembly, Pathname};

/// Dataflow workbench
#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "Drag component types onto a workflow dataflow")]
struct Cli {
    /// Project file (JSON) to open instead of the built-in sample
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Panel settings file (JSON)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Scope shown when the window opens
    #[arg(long, default_value = "top")]
    pathname: String,

    /// Minimum level written to the log
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    WorkbenchLogger::init(cli.log_level)?;

    let settings = match &cli.settings {
        Some(path) => PanelSettings::load(path)?,
        None => PanelSettings::default(),
    };
    let assembly = match &cli.project {
        Some(path) => load_project(path)?,
        None => sample::sample_project(),
    };
    let pathname = Pathname::new(cli.pathname);
    log::info!(
        "opening '{}' ({} components)",
        pathname,
        assembly.component_count()
    );

    Application::new().run(move |cx: &mut App| {
        cx.on_action(quit);
        cx.set_menus(vec![Menu {
            name: "Workbench".into(),
            items: vec![MenuItem::action("Quit", Quit)],
        }]);
        init_keymap(cx);

        let model = cx.new(|_| assembly);
        let window = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Workbench".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            |_window, cx| cx.new(|cx| Workbench::new(model, pathname, settings, cx)),
        );

        match window {
            Ok(window) => {
                window
                    .update(cx, |view, window, cx| {
                        window.focus(&view.focus_handle(cx));
                        cx.activate(true);
                    })
                    .ok();
            }
            Err(err) => {
                log::error!("failed to open window: {:#}", err);
                cx.quit();
            }
        }
    });
    Ok(())
}

fn load_project(path: &Path) -> Result<Assembly> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file: {}", path.display()))?;
    Assembly::from_json(&json)
        .with_context(|| format!("Failed to parse project file: {}", path.display()))
}

fn init_keymap(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("cmd-up", ShowParent, Some("workbench")),
        KeyBinding::new("cmd-q", Quit, None),
    ]);
}

fn quit(_: &Quit, cx: &mut App) {
    cx.quit();
}
