//! Dataflow figures.
//!
//! A [`DataflowFigure`] renders one workflow scope: a titled frame whose body
//! holds a grid of component boxes. Children that are themselves containers
//! become nested figures (compartments), so drops can target them.
//!
//! Every figure's `origin` is relative to its parent figure's origin. The
//! top-level figure's origin is in surface coordinates.

use glam::Vec2;
use workflow::{ComponentSummary, Connection, Dataflow, DataflowModel, Pathname};

/// Height of the title bar.
pub const HEADER_HEIGHT: f32 = 24.0;
/// Space between the frame and its content.
pub const PADDING: f32 = 12.0;
/// Space between neighbouring boxes.
pub const GAP: f32 = 20.0;
/// Size of a leaf component box.
pub const COMPONENT_SIZE: Vec2 = Vec2::new(120.0, 48.0);
/// Smallest figure, used for empty scopes.
pub const MIN_FIGURE_SIZE: Vec2 = Vec2::new(160.0, 80.0);

/// Columns used when a figure sizes itself to its content.
const PREFERRED_COLUMNS: usize = 3;
/// Containers nested deeper than this are drawn as plain boxes.
const MAX_DEPTH: usize = 4;

/// A leaf component drawn inside a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentBox {
    pub name: String,
    pub pathname: Pathname,
    pub type_path: String,
    pub origin: Vec2,
    pub size: Vec2,
}

impl ComponentBox {
    fn new(summary: ComponentSummary) -> Self {
        Self {
            name: summary.name,
            pathname: summary.pathname,
            type_path: summary.type_path,
            origin: Vec2::ZERO,
            size: COMPONENT_SIZE,
        }
    }

    /// Short type name, e.g. `Paraboloid` for `pkg.Paraboloid`.
    pub fn type_name(&self) -> &str {
        self.type_path.rsplit('.').next().unwrap_or(&self.type_path)
    }
}

/// A child of a figure.
#[derive(Clone, Debug, PartialEq)]
pub enum FigureNode {
    Component(ComponentBox),
    Compartment(DataflowFigure),
}

impl FigureNode {
    pub fn name(&self) -> &str {
        match self {
            FigureNode::Component(component) => &component.name,
            FigureNode::Compartment(figure) => figure.pathname.name().unwrap_or_default(),
        }
    }

    pub fn pathname(&self) -> &Pathname {
        match self {
            FigureNode::Component(component) => &component.pathname,
            FigureNode::Compartment(figure) => &figure.pathname,
        }
    }

    pub fn origin(&self) -> Vec2 {
        match self {
            FigureNode::Component(component) => component.origin,
            FigureNode::Compartment(figure) => figure.origin,
        }
    }

    pub fn size(&self) -> Vec2 {
        match self {
            FigureNode::Component(component) => component.size,
            FigureNode::Compartment(figure) => figure.size,
        }
    }

    fn set_origin(&mut self, origin: Vec2) {
        match self {
            FigureNode::Component(component) => component.origin = origin,
            FigureNode::Compartment(figure) => figure.origin = origin,
        }
    }
}

/// Flattened drawing instruction in surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    Figure {
        pathname: Pathname,
        title: String,
        origin: Vec2,
        size: Vec2,
        depth: usize,
    },
    Component {
        pathname: Pathname,
        name: String,
        type_name: String,
        origin: Vec2,
        size: Vec2,
    },
    Connection {
        from: Vec2,
        to: Vec2,
    },
}

/// Visual rendering of one workflow scope.
#[derive(Clone, Debug, PartialEq)]
pub struct DataflowFigure {
    pathname: Pathname,
    title: String,
    origin: Vec2,
    size: Vec2,
    nodes: Vec<FigureNode>,
    connections: Vec<Connection>,
    maximized: bool,
}

impl DataflowFigure {
    /// Build the figure for `pathname` from the model's current state.
    ///
    /// A scope the model does not know is drawn as an empty figure.
    pub fn new<M: DataflowModel + ?Sized>(model: &M, pathname: &Pathname) -> Self {
        Self::build(model, pathname, 0)
    }

    fn build<M: DataflowModel + ?Sized>(model: &M, pathname: &Pathname, depth: usize) -> Self {
        let dataflow = model.dataflow(pathname).unwrap_or_else(|| {
            log::debug!("no dataflow for '{}', drawing an empty figure", pathname);
            Dataflow {
                pathname: pathname.clone(),
                ..Default::default()
            }
        });

        let nodes = dataflow
            .components
            .into_iter()
            .map(|summary| {
                if summary.container && depth < MAX_DEPTH {
                    FigureNode::Compartment(Self::build(model, &summary.pathname, depth + 1))
                } else {
                    FigureNode::Component(ComponentBox::new(summary))
                }
            })
            .collect();

        let title = if depth == 0 {
            if pathname.is_root() {
                "top".to_string()
            } else {
                pathname.to_string()
            }
        } else {
            pathname.name().unwrap_or_default().to_string()
        };

        let mut figure = Self {
            pathname: pathname.clone(),
            title,
            origin: Vec2::ZERO,
            size: MIN_FIGURE_SIZE,
            nodes,
            connections: dataflow.connections,
            maximized: false,
        };
        figure.layout(None);
        figure
    }

    pub fn pathname(&self) -> &Pathname {
        &self.pathname
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn nodes(&self) -> &[FigureNode] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Grow to fill `available` and reflow the children to the new width.
    pub fn maximize(&mut self, available: Vec2) {
        self.layout(Some(available.x.max(MIN_FIGURE_SIZE.x)));
        self.size = self.size.max(available);
        self.maximized = true;
    }

    /// Place children left to right, wrapping into rows.
    ///
    /// With a width, rows wrap at the right edge. Without one, rows hold
    /// `PREFERRED_COLUMNS` children and the figure sizes itself to fit.
    fn layout(&mut self, width: Option<f32>) {
        let right_edge = width.map(|w| w - PADDING);
        let mut x = PADDING;
        let mut y = HEADER_HEIGHT + PADDING;
        let mut row_height: f32 = 0.0;
        let mut column = 0;
        let mut extent = Vec2::new(PADDING, HEADER_HEIGHT + PADDING);

        for node in &mut self.nodes {
            let size = node.size();
            let wrap = match right_edge {
                Some(edge) => x + size.x > edge,
                None => column == PREFERRED_COLUMNS,
            };
            if column > 0 && wrap {
                x = PADDING;
                y += row_height + GAP;
                row_height = 0.0;
                column = 0;
            }
            node.set_origin(Vec2::new(x, y));
            extent = extent.max(Vec2::new(x + size.x, y + size.y));
            x += size.x + GAP;
            row_height = row_height.max(size.y);
            column += 1;
        }

        let mut size = (extent + Vec2::splat(PADDING)).max(MIN_FIGURE_SIZE);
        if let Some(width) = width {
            size.x = size.x.max(width);
        }
        self.size = size;
    }

    /// Whether `point` (in the parent's coordinates) lies inside the frame.
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// Innermost figure containing `point` (in the parent's coordinates).
    pub fn compartment_at(&self, point: Vec2) -> Option<&DataflowFigure> {
        if !self.contains(point) {
            return None;
        }
        let local = point - self.origin;
        for node in self.nodes.iter().rev() {
            if let FigureNode::Compartment(inner) = node {
                if let Some(hit) = inner.compartment_at(local) {
                    return Some(hit);
                }
            }
        }
        Some(self)
    }

    /// Line endpoints for each connection, in this figure's local coordinates.
    ///
    /// Connections naming a child that is not drawn are skipped.
    pub fn connection_segments(&self) -> Vec<(Vec2, Vec2)> {
        let node = |name: &str| self.nodes.iter().find(|n| n.name() == name);
        self.connections
            .iter()
            .filter_map(|connection| {
                let source = node(&connection.source)?;
                let target = node(&connection.target)?;
                let from = source.origin() + Vec2::new(source.size().x, source.size().y / 2.0);
                let to = target.origin() + Vec2::new(0.0, target.size().y / 2.0);
                Some((from, to))
            })
            .collect()
    }

    /// Flatten the figure tree into drawing instructions, back to front.
    pub fn display_list(&self) -> Vec<DisplayItem> {
        let mut items = Vec::new();
        self.collect_display_items(Vec2::ZERO, 0, &mut items);
        items
    }

    fn collect_display_items(&self, parent_origin: Vec2, depth: usize, items: &mut Vec<DisplayItem>) {
        let origin = parent_origin + self.origin;
        items.push(DisplayItem::Figure {
            pathname: self.pathname.clone(),
            title: self.title.clone(),
            origin,
            size: self.size,
            depth,
        });

        for node in &self.nodes {
            match node {
                FigureNode::Component(component) => items.push(DisplayItem::Component {
                    pathname: component.pathname.clone(),
                    name: component.name.clone(),
                    type_name: component.type_name().to_string(),
                    origin: origin + component.origin,
                    size: component.size,
                }),
                FigureNode::Compartment(inner) => {
                    inner.collect_display_items(origin, depth + 1, items)
                }
            }
        }

        for (from, to) in self.connection_segments() {
            items.push(DisplayItem::Connection {
                from: origin + from,
                to: origin + to,
            });
        }
    }
}
