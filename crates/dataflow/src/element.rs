use crate::figure::{DisplayItem, HEADER_HEIGHT};
use crate::panel::DataflowPanel;
use crate::settings::Background;
use crate::viewport::Viewport;
use glam::Vec2;
use gpui::{
    point, px, size, App, BorderStyle, Bounds, ContentMask, DispatchPhase, Element, ElementId,
    Entity, Hitbox, Hsla, IntoElement, PathBuilder, Pixels, ScrollDelta, ScrollWheelEvent, Style,
    Window,
};
use theme::Theme;
use workflow::DataflowModel;

const CONNECTION_WIDTH: f32 = 1.5;
const FIGURE_RADIUS: f32 = 4.0;
const COMPONENT_RADIUS: f32 = 6.0;

/// Paints a panel's surface: background, figures, components and connections.
pub struct SurfaceElement<M: DataflowModel> {
    panel: Entity<DataflowPanel<M>>,
}

impl<M: DataflowModel> SurfaceElement<M> {
    pub fn new(panel: Entity<DataflowPanel<M>>) -> Self {
        Self { panel }
    }
}

impl<M: DataflowModel> IntoElement for SurfaceElement<M> {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

pub struct SurfaceElementState {
    hitbox: Hitbox,
}

impl<M: DataflowModel> Element for SurfaceElement<M> {
    type RequestLayoutState = ();
    type PrepaintState = SurfaceElementState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static std::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (gpui::LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = gpui::relative(1.).into();
        style.size.height = gpui::relative(1.).into();
        let layout_id = window.request_layout(style, None, cx);
        (layout_id, ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        // Normal, so drops still reach the panel's container.
        let hitbox = window.insert_hitbox(bounds, gpui::HitboxBehavior::Normal);
        self.panel.update(cx, |panel, _| {
            panel.surface_bounds = Some(bounds);
        });
        SurfaceElementState { hitbox }
    }

    fn paint(
        &mut self,
        _id: Option<&gpui::GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let panel = self.panel.read(cx);
        let theme = panel.theme().clone();
        let viewport = panel.viewport.clone();
        let background = panel.surface().background().cloned();
        let items = panel
            .figure()
            .map(|figure| figure.display_list())
            .unwrap_or_default();

        // A stretched image is drawn underneath by the panel.
        let stretched_image = background
            .as_ref()
            .is_some_and(|background| !background.tile && !background.path.is_empty());
        if !stretched_image {
            window.paint_quad(gpui::fill(bounds, theme.surface_background));
        }

        window.with_content_mask(Some(ContentMask { bounds }), |window| {
            if let Some(background) = background.as_ref().filter(|background| background.tile) {
                paint_grid(background, &viewport, theme.grid, bounds, window);
            }
            for item in &items {
                paint_item(item, &viewport, &theme, bounds, window);
            }
        });

        window.on_mouse_event({
            let panel = self.panel.clone();
            let hitbox = prepaint.hitbox.clone();
            move |event: &ScrollWheelEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble && hitbox.is_hovered(window) {
                    handle_scroll(&panel, event, cx);
                }
            }
        });
    }
}

fn to_screen(position: Vec2, viewport: &Viewport, bounds: Bounds<Pixels>) -> gpui::Point<Pixels> {
    let screen = viewport.surface_to_screen(position);
    point(bounds.origin.x + px(screen.x), bounds.origin.y + px(screen.y))
}

fn screen_bounds(
    origin: Vec2,
    extent: Vec2,
    viewport: &Viewport,
    bounds: Bounds<Pixels>,
) -> Bounds<Pixels> {
    Bounds {
        origin: to_screen(origin, viewport, bounds),
        size: size(px(extent.x), px(extent.y)),
    }
}

/// Tile the grid pattern across the visible part of the surface.
fn paint_grid(
    background: &Background,
    viewport: &Viewport,
    color: Hsla,
    bounds: Bounds<Pixels>,
    window: &mut Window,
) {
    let spacing = background.grid_spacing;
    if spacing < 2.0 {
        return;
    }
    let width: f32 = bounds.size.width.into();
    let height: f32 = bounds.size.height.into();

    let mut x = -viewport.offset.x.rem_euclid(spacing);
    while x <= width {
        let line = Bounds {
            origin: point(bounds.origin.x + px(x), bounds.origin.y),
            size: size(px(1.0), bounds.size.height),
        };
        window.paint_quad(gpui::fill(line, color));
        x += spacing;
    }

    let mut y = -viewport.offset.y.rem_euclid(spacing);
    while y <= height {
        let line = Bounds {
            origin: point(bounds.origin.x, bounds.origin.y + px(y)),
            size: size(bounds.size.width, px(1.0)),
        };
        window.paint_quad(gpui::fill(line, color));
        y += spacing;
    }
}

fn paint_item(
    item: &DisplayItem,
    viewport: &Viewport,
    theme: &Theme,
    bounds: Bounds<Pixels>,
    window: &mut Window,
) {
    match item {
        DisplayItem::Figure {
            origin,
            size: extent,
            depth,
            ..
        } => {
            let frame = screen_bounds(*origin, *extent, viewport, bounds);
            let (fill, border) = if *depth == 0 {
                (theme.figure_fill, theme.figure_border)
            } else {
                (theme.compartment_fill, theme.compartment_border)
            };
            let radius = px(FIGURE_RADIUS);
            window.paint_quad(gpui::fill(frame, fill).corner_radii(radius));

            let header = Bounds {
                origin: frame.origin,
                size: size(frame.size.width, px(HEADER_HEIGHT.min(extent.y))),
            };
            window.paint_quad(gpui::fill(header, theme.figure_header).corner_radii(radius));
            window.paint_quad(
                gpui::outline(frame, border, BorderStyle::Solid).corner_radii(radius),
            );
        }
        DisplayItem::Component {
            origin,
            size: extent,
            ..
        } => {
            let frame = screen_bounds(*origin, *extent, viewport, bounds);
            let radius = px(COMPONENT_RADIUS);
            window.paint_quad(gpui::fill(frame, theme.component_fill).corner_radii(radius));
            window.paint_quad(
                gpui::outline(frame, theme.component_border, BorderStyle::Solid)
                    .corner_radii(radius),
            );
        }
        DisplayItem::Connection { from, to } => {
            let mut builder = PathBuilder::stroke(px(CONNECTION_WIDTH));
            builder.move_to(to_screen(*from, viewport, bounds));
            builder.line_to(to_screen(*to, viewport, bounds));
            if let Ok(path) = builder.build() {
                window.paint_path(path, theme.connection);
            }
        }
    }
}

fn handle_scroll<M: DataflowModel>(
    panel: &Entity<DataflowPanel<M>>,
    event: &ScrollWheelEvent,
    cx: &mut App,
) {
    let (delta_x, delta_y): (f32, f32) = match event.delta {
        ScrollDelta::Pixels(p) => (p.x.into(), p.y.into()),
        ScrollDelta::Lines(l) => (l.x * 20.0, l.y * 20.0),
    };
    panel.update(cx, |panel, cx| {
        panel.scroll_by(Vec2::new(delta_x, delta_y), cx);
    });
}
