use crate::figure::DataflowFigure;
use crate::settings::Background;
use glam::Vec2;
use slotmap::SlotMap;
use workflow::Pathname;

slotmap::new_key_type! {
    /// Identifies a figure placed on a [`Surface`].
    pub struct FigureId;
}

/// Result of hit-testing the surface for a drop target.
#[derive(Clone, Debug, PartialEq)]
pub struct CompartmentHit {
    /// Top-level figure containing the hit.
    pub figure: FigureId,
    /// Pathname of the innermost compartment under the point.
    pub pathname: Pathname,
}

/// Scrollable drawing area hosting dataflow figures.
pub struct Surface {
    id: String,
    size: Vec2,
    background: Option<Background>,
    figures: SlotMap<FigureId, DataflowFigure>,
    /// Figures in z-order (back to front).
    order: Vec<FigureId>,
}

impl Surface {
    pub fn new(id: impl Into<String>, size: Vec2) -> Self {
        Self {
            id: id.into(),
            size,
            background: None,
            figures: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn set_background_image(&mut self, path: impl Into<String>, tile: bool) {
        let spacing = self
            .background
            .as_ref()
            .map(|b| b.grid_spacing)
            .unwrap_or_else(|| Background::default().grid_spacing);
        self.background = Some(Background {
            path: path.into(),
            tile,
            grid_spacing: spacing,
        });
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    /// Place a figure with its origin at `offset`, on top of existing figures.
    pub fn add_figure(&mut self, mut figure: DataflowFigure, offset: Vec2) -> FigureId {
        figure.set_origin(offset);
        let id = self.figures.insert(figure);
        self.order.push(id);
        id
    }

    pub fn remove_figure(&mut self, id: FigureId) -> Option<DataflowFigure> {
        self.order.retain(|existing| *existing != id);
        self.figures.remove(id)
    }

    /// Remove every figure.
    pub fn clear(&mut self) {
        self.figures.clear();
        self.order.clear();
    }

    pub fn figure(&self, id: FigureId) -> Option<&DataflowFigure> {
        self.figures.get(id)
    }

    pub fn figure_mut(&mut self, id: FigureId) -> Option<&mut DataflowFigure> {
        self.figures.get_mut(id)
    }

    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    /// Figures back to front.
    pub fn figures(&self) -> impl Iterator<Item = (FigureId, &DataflowFigure)> {
        self.order
            .iter()
            .filter_map(|id| self.figures.get(*id).map(|figure| (*id, figure)))
    }

    /// Space left for a figure placed at `offset`, keeping the same margin on
    /// the far sides.
    pub fn available_size(&self, offset: Vec2) -> Vec2 {
        (self.size - offset * 2.0).max(Vec2::ZERO)
    }

    /// The innermost compartment figure under `point`, searching from the
    /// topmost figure down.
    pub fn best_compartment_figure(&self, point: Vec2) -> Option<CompartmentHit> {
        self.order.iter().rev().find_map(|id| {
            let figure = self.figures.get(*id)?;
            figure.compartment_at(point).map(|hit| CompartmentHit {
                figure: *id,
                pathname: hit.pathname().clone(),
            })
        })
    }
}
