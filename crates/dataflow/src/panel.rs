//! The dataflow drop-target panel.

use crate::element::SurfaceElement;
use crate::figure::{DataflowFigure, DisplayItem, HEADER_HEIGHT};
use crate::pending::PendingDrop;
use crate::prompt::Prompt;
use crate::settings::PanelSettings;
use crate::surface::{FigureId, Surface};
use crate::viewport::Viewport;
use glam::Vec2;
use gpui::{
    div, img, prelude::*, px, App, Bounds, Context, Div, Entity, EventEmitter, FocusHandle,
    Focusable, Hsla, IntoElement, ParentElement, Pixels, Point, Render, SharedString,
    StyleRefinement, Styled, Window,
};
use std::rc::Rc;
use theme::Theme;
use workflow::{AddComponentError, DataflowModel, DropPayload, Pathname};

/// Display size assumed when the platform reports no display.
const FALLBACK_DISPLAY_SIZE: Vec2 = Vec2::new(1440.0, 900.0);

/// Events emitted by the panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// The figure was rebuilt for this pathname.
    Redrawn(Pathname),
    /// A dropped component was added to the model.
    ComponentAdded(Pathname),
    /// The model refused a dropped component.
    AddComponentFailed { target: Pathname, message: String },
}

/// Shows one workflow scope and accepts component types dropped onto it.
pub struct DataflowPanel<M: DataflowModel> {
    model: Entity<M>,
    pathname: Pathname,
    name: SharedString,
    surface: Surface,
    /// Smallest surface size, derived from the display.
    base_size: Vec2,
    figure: Option<FigureId>,
    pub viewport: Viewport,
    settings: PanelSettings,
    theme: Theme,
    prompt: Rc<dyn Prompt>,
    /// Where the surface element was laid out in the last frame.
    pub(crate) surface_bounds: Option<Bounds<Pixels>>,
    focus_handle: FocusHandle,
}

impl<M: DataflowModel> DataflowPanel<M> {
    pub fn new(
        model: Entity<M>,
        pathname: Pathname,
        name: impl Into<SharedString>,
        prompt: Rc<dyn Prompt>,
        settings: PanelSettings,
        cx: &mut Context<Self>,
    ) -> Self {
        let display_size = cx
            .primary_display()
            .map(|display| {
                let size = display.bounds().size;
                Vec2::new(size.width.into(), size.height.into())
            })
            .unwrap_or(FALLBACK_DISPLAY_SIZE);
        let surface_size = (display_size - Vec2::splat(settings.display_margin)).max(Vec2::ZERO);

        let mut surface = Surface::new(pathname.surface_id(), surface_size);
        surface.set_background(settings.background.clone());

        let mut panel = Self {
            model,
            pathname,
            name: name.into(),
            surface,
            base_size: surface_size,
            figure: None,
            viewport: Viewport::new(),
            theme: Theme::from_mode(settings.theme),
            settings,
            prompt,
            surface_bounds: None,
            focus_handle: cx.focus_handle(),
        };
        panel.figure = Some(panel.place_figure(cx));
        panel.fit_surface_to_figure();
        log::debug!(
            "created dataflow panel '{}' ({}) for '{}' ({}x{})",
            panel.name,
            panel.surface.id(),
            panel.pathname,
            surface_size.x,
            surface_size.y
        );
        panel
    }

    pub fn pathname(&self) -> &Pathname {
        &self.pathname
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The figure currently on the surface.
    pub fn figure(&self) -> Option<&DataflowFigure> {
        self.figure.and_then(|id| self.surface.figure(id))
    }

    /// Switch to the scope at `pathname` and redraw.
    pub fn show_dataflow(&mut self, pathname: Pathname, cx: &mut Context<Self>) {
        log::info!("showing dataflow '{}'", pathname);
        self.pathname = pathname;
        self.viewport.reset();
        self.update(cx);
    }

    /// Redraw after new data arrived.
    ///
    /// The payload is not applied; the figure is rebuilt from the model.
    pub fn load_data(&mut self, json: serde_json::Value, cx: &mut Context<Self>) {
        log::debug!(
            "load_data for '{}': rebuilding from model, payload ignored ({})",
            self.pathname,
            if json.is_null() { "null" } else { "non-null" }
        );
        self.update(cx);
    }

    /// Clear the surface and rebuild the figure for the current pathname.
    pub fn update(&mut self, cx: &mut Context<Self>) {
        self.surface.clear();
        self.surface.resize(self.base_size);
        let id = self.place_figure(cx);
        let available = self.surface.available_size(self.settings.figure_offset);
        if let Some(figure) = self.surface.figure_mut(id) {
            figure.maximize(available);
        }
        self.figure = Some(id);
        self.fit_surface_to_figure();
        log::debug!("panel '{}' redrew '{}'", self.name, self.pathname);
        cx.emit(PanelEvent::Redrawn(self.pathname.clone()));
        cx.notify();
    }

    /// Grow the surface so the whole figure, plus the offset margin on the
    /// far sides, can be scrolled into view. Never shrinks below `base_size`.
    fn fit_surface_to_figure(&mut self) {
        let Some(figure) = self.figure() else {
            return;
        };
        let needed = figure.origin() + figure.size() + self.settings.figure_offset;
        let size = self.base_size.max(needed);
        self.surface.resize(size);
        let view_size = self.view_size();
        self.viewport.scroll_by(Vec2::ZERO, size, view_size);
    }

    fn view_size(&self) -> Vec2 {
        self.surface_bounds
            .map(|bounds| Vec2::new(bounds.size.width.into(), bounds.size.height.into()))
            .unwrap_or(Vec2::ZERO)
    }

    fn place_figure(&mut self, cx: &App) -> FigureId {
        let figure = DataflowFigure::new(self.model.read(cx), &self.pathname);
        self.surface.add_figure(figure, self.settings.figure_offset)
    }

    /// Convert a window position to surface coordinates, rounded to whole pixels.
    ///
    /// `None` until the surface has been laid out.
    pub fn drop_point(&self, position: Point<Pixels>) -> Option<Vec2> {
        let bounds = self.surface_bounds?;
        let local_x: f32 = (position.x - bounds.origin.x).into();
        let local_y: f32 = (position.y - bounds.origin.y).into();
        Some(
            self.viewport
                .screen_to_surface(Vec2::new(local_x, local_y))
                .round(),
        )
    }

    /// Handle a payload dropped at `point` (surface coordinates).
    ///
    /// Accepted payloads open the name prompt; the model is only touched once
    /// the prompt is confirmed.
    pub fn handle_drop(&mut self, payload: &DropPayload, point: Vec2, cx: &mut Context<Self>) {
        let hit = self.surface.best_compartment_figure(point);
        let Some(pending) = PendingDrop::resolve(payload, hit, &self.pathname) else {
            log::debug!(
                "ignoring {:?} payload '{}' dropped on '{}'",
                payload.kind,
                payload.display_name,
                self.surface.id()
            );
            return;
        };
        log::info!(
            "{} (type_path={}) dropped on dataflow '{}', target '{}'",
            pending.display_name,
            pending.type_path,
            self.pathname,
            pending.target
        );

        let message = self.settings.prompt_message(&pending.display_name);
        let reply = self.prompt.prompt_for_value(message.into(), cx);
        cx.spawn(async move |this, cx| {
            let Some(name) = reply.value().await else {
                log::debug!("name prompt for {} cancelled", pending.display_name);
                return;
            };
            this.update(cx, |panel, cx| {
                panel.finish_drop(&pending, &name, cx).ok();
            })
            .ok();
        })
        .detach();
    }

    fn finish_drop(
        &mut self,
        pending: &PendingDrop,
        name: &str,
        cx: &mut Context<Self>,
    ) -> Result<Pathname, AddComponentError> {
        let result = self.model.update(cx, |model, cx| {
            let result = pending.confirm(model, name);
            if result.is_ok() {
                cx.notify();
            }
            result
        });
        match &result {
            Ok(pathname) => cx.emit(PanelEvent::ComponentAdded(pathname.clone())),
            Err(err) => {
                log::warn!("could not add '{}' to '{}': {}", name, pending.target, err);
                cx.emit(PanelEvent::AddComponentFailed {
                    target: pending.target.clone(),
                    message: err.to_string(),
                });
            }
        }
        result
    }

    /// Scroll the surface by a wheel delta.
    pub fn scroll_by(&mut self, delta: Vec2, cx: &mut Context<Self>) {
        let view_size = self.view_size();
        let before = self.viewport.offset;
        self.viewport
            .scroll_by(delta, self.surface.size(), view_size);
        if self.viewport.offset != before {
            cx.notify();
        }
    }

    /// Text overlays for figure titles and component names.
    fn labels(&self) -> Vec<Div> {
        let Some(figure) = self.figure() else {
            return Vec::new();
        };
        let theme = &self.theme;

        figure
            .display_list()
            .into_iter()
            .filter_map(|item| match item {
                DisplayItem::Figure {
                    title, origin, size, ..
                } => {
                    let origin = self.viewport.surface_to_screen(origin);
                    Some(
                        div()
                            .absolute()
                            .left(px(origin.x + 8.0))
                            .top(px(origin.y))
                            .w(px((size.x - 16.0).max(0.0)))
                            .h(px(HEADER_HEIGHT))
                            .flex()
                            .items_center()
                            .overflow_hidden()
                            .text_xs()
                            .text_color(theme.ui_text)
                            .child(SharedString::from(title)),
                    )
                }
                DisplayItem::Component {
                    name,
                    type_name,
                    origin,
                    size,
                    ..
                } => {
                    let origin = self.viewport.surface_to_screen(origin);
                    Some(
                        div()
                            .absolute()
                            .left(px(origin.x))
                            .top(px(origin.y))
                            .w(px(size.x))
                            .h(px(size.y))
                            .flex()
                            .flex_col()
                            .items_center()
                            .justify_center()
                            .overflow_hidden()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(theme.ui_text)
                                    .child(SharedString::from(name)),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(theme.ui_text_muted)
                                    .child(SharedString::from(type_name)),
                            ),
                    )
                }
                DisplayItem::Connection { .. } => None,
            })
            .collect()
    }
}

/// Highlight the surface only while an accepted payload hovers it.
fn drag_over_style(style: StyleRefinement, payload: &DropPayload, highlight: Hsla) -> StyleRefinement {
    if payload.is_object_type() {
        style.bg(highlight)
    } else {
        style
    }
}

impl<M: DataflowModel> EventEmitter<PanelEvent> for DataflowPanel<M> {}

impl<M: DataflowModel> Focusable for DataflowPanel<M> {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl<M: DataflowModel> Render for DataflowPanel<M> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let highlight = self.theme.drop_highlight;
        let stretched_image = self
            .surface
            .background()
            .filter(|background| !background.tile && !background.path.is_empty())
            .map(|background| {
                img(SharedString::from(background.path.clone()))
                    .absolute()
                    .size_full()
            });

        div()
            .id(SharedString::from(self.surface.id().to_string()))
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(self.theme.surface_background)
            .children(stretched_image)
            .child(SurfaceElement::new(cx.entity()))
            .children(self.labels())
            .can_drop(|value, _window, _cx| {
                value
                    .downcast_ref::<DropPayload>()
                    .is_some_and(DropPayload::is_object_type)
            })
            .drag_over::<DropPayload>(move |style, payload, _, _| {
                drag_over_style(style, payload, highlight)
            })
            .on_drop(cx.listener(|panel, payload: &DropPayload, window, cx| {
                let Some(point) = panel.drop_point(window.mouse_position()) else {
                    log::warn!("drop before the surface was laid out");
                    return;
                };
                panel.handle_drop(payload, point, cx);
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{prompt_channel, PromptReply, PromptResponder};
    use gpui::{point, size, TestAppContext};
    use std::cell::RefCell;
    use workflow::{Assembly, ComponentType, Dataflow, PayloadKind, TypeLibrary};

    /// Delegates to an [`Assembly`] and records every `add_component` call.
    struct RecordingModel {
        inner: Assembly,
        calls: Vec<(String, String, Pathname)>,
    }

    impl RecordingModel {
        fn new() -> Self {
            let library = TypeLibrary::default().with(ComponentType::new("Foo", "pkg.Foo"));
            let mut inner = Assembly::new(library);
            inner
                .add_component("workflow.Assembly", "top", &Pathname::root())
                .unwrap();
            inner
                .add_component("workflow.Assembly", "sub", &Pathname::new("top"))
                .unwrap();
            Self {
                inner,
                calls: Vec::new(),
            }
        }
    }

    impl DataflowModel for RecordingModel {
        fn add_component(
            &mut self,
            type_path: &str,
            name: &str,
            parent: &Pathname,
        ) -> Result<Pathname, AddComponentError> {
            self.calls
                .push((type_path.to_string(), name.to_string(), parent.clone()));
            self.inner.add_component(type_path, name, parent)
        }

        fn dataflow(&self, pathname: &Pathname) -> Option<Dataflow> {
            self.inner.dataflow(pathname)
        }
    }

    /// Collects prompt requests so tests can answer them.
    #[derive(Default)]
    struct TestPrompt {
        requests: RefCell<Vec<(SharedString, PromptResponder)>>,
    }

    impl TestPrompt {
        fn count(&self) -> usize {
            self.requests.borrow().len()
        }

        fn message(&self, ix: usize) -> SharedString {
            self.requests.borrow()[ix].0.clone()
        }

        fn answer(&self, value: Option<&str>) {
            let (_, responder) = self.requests.borrow_mut().remove(0);
            match value {
                Some(value) => responder.confirm(value),
                None => responder.cancel(),
            }
        }
    }

    impl Prompt for TestPrompt {
        fn prompt_for_value(&self, message: SharedString, _cx: &mut App) -> PromptReply {
            let (responder, reply) = prompt_channel();
            self.requests.borrow_mut().push((message, responder));
            reply
        }
    }

    struct Fixture {
        model: Entity<RecordingModel>,
        panel: Entity<DataflowPanel<RecordingModel>>,
        prompt: Rc<TestPrompt>,
        events: Rc<RefCell<Vec<PanelEvent>>>,
    }

    fn fixture(cx: &mut TestAppContext) -> Fixture {
        let model = cx.new(|_| RecordingModel::new());
        let prompt = Rc::new(TestPrompt::default());
        let panel = cx.new(|cx| {
            DataflowPanel::new(
                model.clone(),
                Pathname::new("top"),
                "top",
                prompt.clone(),
                PanelSettings::default(),
                cx,
            )
        });
        let events = Rc::new(RefCell::new(Vec::new()));
        cx.update(|cx| {
            let events = events.clone();
            cx.subscribe(&panel, move |_, event: &PanelEvent, _| {
                events.borrow_mut().push(event.clone());
            })
            .detach();
        });
        Fixture {
            model,
            panel,
            prompt,
            events,
        }
    }

    /// A surface point inside the `top.sub` compartment.
    fn point_in_sub(fixture: &Fixture, cx: &mut TestAppContext) -> Vec2 {
        fixture.panel.read_with(cx, |panel, _| {
            let figure = panel.figure().unwrap();
            let sub = &figure.nodes()[0];
            assert_eq!(sub.pathname(), &Pathname::new("top.sub"));
            figure.origin() + sub.origin() + Vec2::splat(6.0)
        })
    }

    fn calls(fixture: &Fixture, cx: &mut TestAppContext) -> Vec<(String, String, Pathname)> {
        fixture.model.read_with(cx, |model, _| model.calls.clone())
    }

    #[gpui::test]
    fn test_construction_draws_initial_figure(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.read_with(cx, |panel, _| {
            assert_eq!(panel.surface().id(), "top-dataflow");
            assert_eq!(panel.surface().figure_count(), 1);
            let figure = panel.figure().unwrap();
            assert_eq!(figure.pathname(), &Pathname::new("top"));
            assert_eq!(figure.origin(), Vec2::new(20.0, 20.0));
            assert!(panel.surface().size().x > 0.0);
            assert_eq!(
                panel.surface().background().map(|b| b.tile),
                Some(true)
            );
        });
    }

    #[gpui::test]
    fn test_update_twice_keeps_one_figure(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.update(cx, |panel, cx| {
            panel.update(cx);
            panel.update(cx);
        });
        fixture.panel.read_with(cx, |panel, _| {
            assert_eq!(panel.surface().figure_count(), 1);
            assert!(panel.figure().unwrap().is_maximized());
        });
        assert_eq!(fixture.events.borrow().len(), 2);
    }

    #[gpui::test]
    fn test_drop_on_compartment_adds_to_it(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let point = point_in_sub(&fixture, cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture
            .panel
            .update(cx, |panel, cx| panel.handle_drop(&payload, point, cx));
        assert_eq!(fixture.prompt.count(), 1);
        assert_eq!(fixture.prompt.message(0).to_string(), "Enter name for new Foo");

        fixture.prompt.answer(Some("bar"));
        cx.run_until_parked();

        assert_eq!(
            calls(&fixture, cx),
            [("pkg.Foo".to_string(), "bar".to_string(), Pathname::new("top.sub"))]
        );
        assert_eq!(
            fixture.events.borrow().as_slice(),
            [PanelEvent::ComponentAdded(Pathname::new("top.sub.bar"))]
        );
    }

    #[gpui::test]
    fn test_drop_outside_compartments_targets_panel(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture.panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx)
        });
        fixture.prompt.answer(Some("bar"));
        cx.run_until_parked();

        assert_eq!(
            calls(&fixture, cx),
            [("pkg.Foo".to_string(), "bar".to_string(), Pathname::new("top"))]
        );
    }

    #[gpui::test]
    fn test_non_object_payload_is_ignored(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let point = point_in_sub(&fixture, cx);
        let payload = DropPayload::new(PayloadKind::File, "notes.txt", "notes.txt");

        fixture
            .panel
            .update(cx, |panel, cx| panel.handle_drop(&payload, point, cx));
        cx.run_until_parked();

        assert_eq!(fixture.prompt.count(), 0);
        assert!(calls(&fixture, cx).is_empty());
    }

    #[gpui::test]
    fn test_cancelled_prompt_adds_nothing(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture.panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx)
        });
        fixture.prompt.answer(None);
        cx.run_until_parked();

        assert!(calls(&fixture, cx).is_empty());
        assert!(fixture.events.borrow().is_empty());
    }

    #[gpui::test]
    fn test_show_dataflow_redraws_once(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.update(cx, |panel, cx| {
            panel.show_dataflow(Pathname::new("new.path"), cx)
        });

        assert_eq!(
            fixture.events.borrow().as_slice(),
            [PanelEvent::Redrawn(Pathname::new("new.path"))]
        );
        fixture.panel.read_with(cx, |panel, _| {
            assert_eq!(panel.pathname(), &Pathname::new("new.path"));
            assert_eq!(panel.surface().figure_count(), 1);
            assert_eq!(panel.figure().unwrap().pathname(), &Pathname::new("new.path"));
            // The surface keeps the identity it was created with.
            assert_eq!(panel.surface().id(), "top-dataflow");
        });
    }

    #[gpui::test]
    fn test_load_data_always_redraws(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.update(cx, |panel, cx| {
            panel.load_data(serde_json::json!({ "ignored": true }), cx);
            panel.load_data(serde_json::Value::Null, cx);
        });
        assert_eq!(
            fixture.events.borrow().as_slice(),
            [
                PanelEvent::Redrawn(Pathname::new("top")),
                PanelEvent::Redrawn(Pathname::new("top")),
            ]
        );
    }

    #[gpui::test]
    fn test_drop_target_is_fixed_at_drop_time(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture.panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx);
            panel.show_dataflow(Pathname::new("top.sub"), cx);
        });
        fixture.prompt.answer(Some("bar"));
        cx.run_until_parked();

        assert_eq!(calls(&fixture, cx)[0].2, Pathname::new("top"));
    }

    #[gpui::test]
    fn test_model_errors_are_reported(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture.panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx)
        });
        fixture.prompt.answer(Some("sub"));
        cx.run_until_parked();

        let events = fixture.events.borrow();
        let [PanelEvent::AddComponentFailed { target, message }] = events.as_slice() else {
            panic!("expected one failure event, got {:?}", events);
        };
        assert_eq!(target, &Pathname::new("top"));
        assert!(message.contains("already contains"));
    }

    #[gpui::test]
    fn test_blank_name_is_reported_without_model_call(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        let payload = DropPayload::object_type("Foo", "pkg.Foo");

        fixture.panel.update(cx, |panel, cx| {
            panel.handle_drop(&payload, Vec2::new(2.0, 2.0), cx)
        });
        fixture.prompt.answer(Some("  "));
        cx.run_until_parked();

        assert!(calls(&fixture, cx).is_empty());
        assert!(matches!(
            fixture.events.borrow().as_slice(),
            [PanelEvent::AddComponentFailed { .. }]
        ));
    }

    #[gpui::test]
    fn test_drop_point_accounts_for_bounds_and_scroll(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.update(cx, |panel, _| {
            assert_eq!(panel.drop_point(point(px(10.0), px(10.0))), None);

            panel.surface_bounds = Some(Bounds {
                origin: point(px(100.0), px(50.0)),
                size: size(px(400.0), px(300.0)),
            });
            panel.viewport.offset = Vec2::new(30.0, 0.0);
            assert_eq!(
                panel.drop_point(point(px(150.4), px(75.6))),
                Some(Vec2::new(80.0, 26.0))
            );
        });
    }

    #[gpui::test]
    fn test_tall_figure_can_be_scrolled_to_its_bottom(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.model.update(cx, |model, _| {
            for ix in 0..120 {
                model
                    .inner
                    .add_component("pkg.Foo", &format!("c{ix}"), &Pathname::new("top"))
                    .unwrap();
            }
        });

        fixture.panel.update(cx, |panel, cx| {
            panel.update(cx);
            let view_height = 600.0;
            panel.surface_bounds = Some(Bounds {
                origin: point(px(0.0), px(0.0)),
                size: size(px(1340.0), px(view_height)),
            });

            let figure = panel.figure().unwrap();
            let bottom = figure.origin().y + figure.size().y;
            assert!(panel.surface().size().y >= bottom + panel.settings.figure_offset.y);

            panel.scroll_by(Vec2::new(0.0, -100_000.0), cx);
            assert!(panel.viewport.offset.y + view_height >= bottom);

            let grown = panel.surface().size();
            panel.update(cx);
            assert_eq!(panel.surface().size(), grown);
        });
    }

    #[gpui::test]
    fn test_surface_never_shrinks_below_display_size(cx: &mut TestAppContext) {
        let fixture = fixture(cx);
        fixture.panel.update(cx, |panel, cx| {
            let before = panel.surface().size();
            panel.update(cx);
            panel.show_dataflow(Pathname::new("top.sub"), cx);
            assert_eq!(panel.surface().size(), before);
        });
    }

    #[test]
    fn test_drag_over_highlights_only_object_types() {
        let highlight = Theme::light().drop_highlight;

        let accepted = drag_over_style(
            StyleRefinement::default(),
            &DropPayload::object_type("Foo", "pkg.Foo"),
            highlight,
        );
        assert!(accepted.background.is_some());

        let ignored = drag_over_style(
            StyleRefinement::default(),
            &DropPayload::new(PayloadKind::File, "notes.txt", "notes.txt"),
            highlight,
        );
        assert!(ignored.background.is_none());
    }
}
