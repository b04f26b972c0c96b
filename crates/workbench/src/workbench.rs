//! Root view: library palette, dataflow panel, name prompt and status bar.

use dataflow::{DataflowPanel, PanelEvent, PanelSettings, Prompt};
use gpui::{
    actions, div, prelude::*, px, App, Context, Entity, FocusHandle, Focusable, IntoElement,
    ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use std::rc::Rc;
use theme::Theme;
use ui::{button, h_stack, v_stack, ComponentPalette, ModalPrompt, PromptHost};
use workflow::{Assembly, Pathname};

actions!(workbench, [ShowParent, Quit]);

#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Info(SharedString),
    Error(SharedString),
}

pub struct Workbench {
    model: Entity<Assembly>,
    palette: Entity<ComponentPalette>,
    panel: Entity<DataflowPanel<Assembly>>,
    prompt_host: Entity<PromptHost>,
    status: Option<Status>,
    theme: Theme,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Workbench {
    pub fn new(
        model: Entity<Assembly>,
        pathname: Pathname,
        settings: PanelSettings,
        cx: &mut Context<Self>,
    ) -> Self {
        let theme = Theme::from_mode(settings.theme);
        let library = model.read(cx).library().clone();
        let palette = cx.new(|_| ComponentPalette::new(library, theme.clone()));
        let prompt_host = cx.new(|_| PromptHost::new(theme.clone()));
        let prompt: Rc<dyn Prompt> = Rc::new(ModalPrompt::new(prompt_host.clone()));

        let name = pathname.to_string();
        let panel = cx.new(|cx| {
            DataflowPanel::new(model.clone(), pathname, name, prompt, settings, cx)
        });

        let subscriptions = vec![
            cx.observe(&model, Self::handle_model_changed),
            cx.subscribe(&panel, Self::handle_panel_event),
        ];

        Self {
            model,
            palette,
            panel,
            prompt_host,
            status: None,
            theme,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    pub fn panel(&self) -> &Entity<DataflowPanel<Assembly>> {
        &self.panel
    }

    pub fn prompt_host(&self) -> &Entity<PromptHost> {
        &self.prompt_host
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    fn handle_model_changed(&mut self, model: Entity<Assembly>, cx: &mut Context<Self>) {
        let json = model.read(cx).to_json();
        self.panel.update(cx, |panel, cx| panel.load_data(json, cx));
    }

    fn handle_panel_event(
        &mut self,
        _panel: Entity<DataflowPanel<Assembly>>,
        event: &PanelEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            PanelEvent::Redrawn(pathname) => {
                log::trace!("dataflow redrawn for '{}'", pathname);
                return;
            }
            PanelEvent::ComponentAdded(pathname) => {
                self.status = Some(Status::Info(format!("Added {}", pathname).into()));
            }
            PanelEvent::AddComponentFailed { target, message } => {
                self.status = Some(Status::Error(
                    format!("Could not add to {}: {}", target, message).into(),
                ));
            }
        }
        cx.notify();
    }

    /// Show the scope enclosing the current one. The top-level scope is the
    /// furthest out the panel goes.
    pub fn navigate_to_parent(&mut self, cx: &mut Context<Self>) {
        let current = self.panel.read(cx).pathname().clone();
        let Some(parent) = current.parent().filter(|parent| !parent.is_root()) else {
            return;
        };
        self.status = None;
        self.panel
            .update(cx, |panel, cx| panel.show_dataflow(parent, cx));
        cx.notify();
    }

    fn show_parent(&mut self, _: &ShowParent, _window: &mut Window, cx: &mut Context<Self>) {
        self.navigate_to_parent(cx);
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let pathname = self.panel.read(cx).pathname().to_string();
        let components = self.model.read(cx).component_count();

        h_stack()
            .h(px(36.0))
            .px(px(8.0))
            .gap(px(8.0))
            .border_b_1()
            .border_color(self.theme.ui_border)
            .child(
                button("show-parent", "Up", &self.theme)
                    .on_click(cx.listener(|this, _, _, cx| this.navigate_to_parent(cx))),
            )
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(self.theme.ui_text)
                    .child(SharedString::from(format!("Dataflow: {}", pathname))),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(self.theme.ui_text_muted)
                    .child(SharedString::from(format!("{} components", components))),
            )
    }

    fn render_status(&self) -> impl IntoElement {
        let (text, color) = match &self.status {
            Some(Status::Info(text)) => (text.clone(), self.theme.ui_text_muted),
            Some(Status::Error(text)) => (text.clone(), self.theme.error),
            None => (
                SharedString::from("Drag a component type onto the dataflow"),
                self.theme.ui_text_muted,
            ),
        };

        h_stack()
            .h(px(24.0))
            .px(px(8.0))
            .border_t_1()
            .border_color(self.theme.ui_border)
            .text_xs()
            .text_color(color)
            .child(text)
    }
}

impl Render for Workbench {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("Workbench")
            .key_context("workbench")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .bg(self.theme.ui_background)
            .text_color(self.theme.ui_text)
            .on_action(cx.listener(Self::show_parent))
            .child(
                v_stack()
                    .size_full()
                    .child(self.render_header(cx))
                    .child(
                        h_stack()
                            .flex_1()
                            .items_start()
                            .overflow_hidden()
                            .child(div().w(px(220.0)).h_full().child(self.palette.clone()))
                            .child(div().flex_1().h_full().child(self.panel.clone())),
                    )
                    .child(self.render_status()),
            )
            .child(self.prompt_host.clone())
    }
}

impl Focusable for Workbench {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_project;
    use glam::Vec2;
    use gpui::TestAppContext;
    use workflow::{DataflowModel, DropPayload};

    fn workbench(cx: &mut TestAppContext, pathname: &str) -> (Entity<Assembly>, Entity<Workbench>) {
        let model = cx.new(|_| sample_project());
        let workbench = cx.new(|cx| {
            Workbench::new(
                model.clone(),
                Pathname::new(pathname),
                PanelSettings::default(),
                cx,
            )
        });
        (model, workbench)
    }

    fn component_names(workbench: &Entity<Workbench>, cx: &mut TestAppContext) -> Vec<String> {
        workbench.read_with(cx, |workbench, cx| {
            let panel = workbench.panel().read(cx);
            panel
                .figure()
                .unwrap()
                .nodes()
                .iter()
                .map(|node| node.name().to_string())
                .collect()
        })
    }

    /// Drop a payload outside every compartment and type `name` into the prompt.
    fn drop_and_name(workbench: &Entity<Workbench>, name: &str, cx: &mut TestAppContext) {
        let panel = workbench.read_with(cx, |workbench, _| workbench.panel().clone());
        let payload =
            DropPayload::object_type("Paraboloid", "openmdao.examples.simple.paraboloid.Paraboloid");
        panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx)
        });

        let entry = workbench.read_with(cx, |workbench, cx| {
            workbench.prompt_host().read(cx).entry().cloned()
        });
        entry.unwrap().update(cx, |entry, cx| {
            entry.insert(name, cx);
            entry.confirm(cx);
        });
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_model_changes_redraw_panel(cx: &mut TestAppContext) {
        let (model, workbench) = workbench(cx, "top");
        assert_eq!(component_names(&workbench, cx), ["driver", "paraboloid", "sub"]);

        model.update(cx, |model, cx| {
            model
                .add_component(
                    "openmdao.lib.components.exec_comp.ExecComp",
                    "comp",
                    &Pathname::new("top"),
                )
                .unwrap();
            cx.notify();
        });

        assert_eq!(
            component_names(&workbench, cx),
            ["driver", "paraboloid", "sub", "comp"]
        );
    }

    #[gpui::test]
    fn test_drop_through_name_entry_adds_component(cx: &mut TestAppContext) {
        let (model, workbench) = workbench(cx, "top");
        drop_and_name(&workbench, "paraboloid2", cx);

        model.read_with(cx, |model, _| {
            assert!(model.node(&Pathname::new("top.paraboloid2")).is_some());
        });
        workbench.read_with(cx, |workbench, _| {
            assert_eq!(
                workbench.status(),
                Some(&Status::Info("Added top.paraboloid2".into()))
            );
        });
        assert!(component_names(&workbench, cx).contains(&"paraboloid2".to_string()));
    }

    #[gpui::test]
    fn test_rejected_name_shows_error(cx: &mut TestAppContext) {
        let (model, workbench) = workbench(cx, "top");
        drop_and_name(&workbench, "paraboloid", cx);

        model.read_with(cx, |model, _| assert_eq!(model.component_count(), 4));
        workbench.read_with(cx, |workbench, _| {
            assert!(matches!(workbench.status(), Some(Status::Error(_))));
        });
    }

    #[gpui::test]
    fn test_navigate_to_parent_stops_at_top(cx: &mut TestAppContext) {
        let (_model, workbench) = workbench(cx, "top.sub");

        workbench.update(cx, |workbench, cx| workbench.navigate_to_parent(cx));
        let pathname = workbench.read_with(cx, |workbench, cx| {
            workbench.panel().read(cx).pathname().clone()
        });
        assert_eq!(pathname, Pathname::new("top"));

        workbench.update(cx, |workbench, cx| workbench.navigate_to_parent(cx));
        let pathname = workbench.read_with(cx, |workbench, cx| {
            workbench.panel().read(cx).pathname().clone()
        });
        assert_eq!(pathname, Pathname::new("top"));
    }
}
