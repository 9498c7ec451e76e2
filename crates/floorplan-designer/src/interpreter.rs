//! Command interpreter
//!
//! `apply` is a pure state transition: it reads a plan and a command and
//! returns a new plan. It never fails. A command that references a missing
//! area, targets the wrong shape variant or would produce degenerate
//! geometry returns the input plan unchanged.

use chrono::Utc;
use floorplan_core::constants::{MIN_CANVAS_SIZE, MIN_ZOOM};
use floorplan_settings::{EditorSettings, PlanDefaults};

use crate::commands::{Command, RectUpdate};
use crate::factory::default_style;
use crate::geometry::{
    apply_rect_resize, clamp_delta_for_multipolygon, clamp_delta_for_polygon, clamp_ellipse,
    collect_neighbor_edges, constrain_rect_to_bounds, ellipse_to_rect, fit_rect_to_bounds,
    mirror_points, move_ellipse, move_rect, rect_to_ellipse, rotate_points, snap_angle, snap_rect,
    split_rect_evenly, NeighborEdges, SplitDirection,
};
use crate::groups;
use crate::model::{
    Area, AreaId, AreaStyle, Ellipse, MultiPolygon, Plan, PlanShape, Point, Polygon, Rect, Shape,
};
use crate::naming::{next_area_name, next_area_names, partition_names, unique_name};
use crate::ops::{
    convert_to_polygon, merge_shapes, subtract_shapes, CsgBooleanEngine, PolygonSetOperations,
};

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub plan: Plan,
    /// New selection, `None` when the command leaves it alone.
    pub selection: Option<Vec<AreaId>>,
    pub description: Option<String>,
}

impl CommandOutcome {
    fn unchanged(plan: &Plan) -> Self {
        Self {
            plan: plan.clone(),
            selection: None,
            description: None,
        }
    }
}

// What a successful command reports besides the edited plan.
struct Effect {
    selection: Option<Vec<AreaId>>,
    description: String,
}

impl Effect {
    fn select(ids: Vec<AreaId>, description: impl Into<String>) -> Option<Self> {
        Some(Self {
            selection: Some(ids),
            description: description.into(),
        })
    }

    fn keep(description: impl Into<String>) -> Option<Self> {
        Some(Self {
            selection: None,
            description: description.into(),
        })
    }

    fn keep_if(done: bool, description: impl Into<String>) -> Option<Self> {
        if done {
            Self::keep(description)
        } else {
            None
        }
    }
}

pub struct Interpreter {
    engine: Box<dyn PolygonSetOperations>,
    min_size: f64,
    grid_step: f64,
    snap_to_neighbors: bool,
    angle_snap: bool,
    style: AreaStyle,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::from_settings(&EditorSettings::default(), &PlanDefaults::default())
    }

    pub fn from_settings(editor: &EditorSettings, defaults: &PlanDefaults) -> Self {
        Self {
            engine: Box::new(CsgBooleanEngine::new()),
            min_size: editor.min_area_size.max(f64::EPSILON),
            grid_step: editor.grid_step,
            snap_to_neighbors: editor.snap_to_neighbors,
            angle_snap: editor.angle_snap,
            style: default_style(defaults),
        }
    }

    /// Swaps the polygon set-operations engine.
    pub fn with_engine(mut self, engine: Box<dyn PolygonSetOperations>) -> Self {
        self.engine = engine;
        self
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn apply(&self, plan: &Plan, command: &Command) -> CommandOutcome {
        match command {
            Command::SetSelection { ids } => {
                return CommandOutcome {
                    plan: plan.clone(),
                    selection: Some(ids.clone()),
                    description: None,
                };
            }
            // The loaded document is returned as-is, timestamps included.
            Command::LoadPlan { plan: loaded } => {
                if loaded.version.trim().is_empty() {
                    tracing::debug!("Refusing to load a plan without a version tag");
                    return CommandOutcome::unchanged(plan);
                }
                tracing::info!("Loaded plan '{}'", loaded.meta.name);
                return CommandOutcome {
                    plan: (**loaded).clone(),
                    selection: Some(Vec::new()),
                    description: Some(format!("Load {}", loaded.meta.name)),
                };
            }
            _ => {}
        }

        let mut next = plan.clone();
        let Some(effect) = self.execute(&mut next, command) else {
            tracing::debug!("Command '{}' left the plan unchanged", command.kind());
            return CommandOutcome::unchanged(plan);
        };

        if next.same_content(plan) {
            tracing::debug!("Command '{}' had no effect", command.kind());
            return CommandOutcome {
                plan: plan.clone(),
                selection: effect.selection,
                description: None,
            };
        }

        next.meta.updated_at = Utc::now();
        CommandOutcome {
            plan: next,
            selection: effect.selection,
            description: Some(effect.description),
        }
    }

    fn execute(&self, plan: &mut Plan, command: &Command) -> Option<Effect> {
        match command {
            Command::CreatePlan {
                name,
                width,
                height,
                units,
            } => {
                if !(valid_canvas_size(*width) && valid_canvas_size(*height)) {
                    return None;
                }
                *plan = Plan::new(name.clone(), *width, *height, *units);
                tracing::info!("Created plan '{}' ({} x {} {})", name, width, height, units);
                Effect::select(Vec::new(), format!("New plan {}", name))
            }
            Command::ResizePlan { width, height } => {
                if !(width.is_finite() && height.is_finite()) {
                    return None;
                }
                plan.canvas.width = width.max(MIN_CANVAS_SIZE);
                plan.canvas.height = height.max(MIN_CANVAS_SIZE);
                self.fit_to_canvas(plan);
                Effect::keep(format!(
                    "Resize plan to {} x {}",
                    plan.canvas.width, plan.canvas.height
                ))
            }
            Command::SetViewport { zoom, pan } => {
                if let Some(zoom) = zoom.filter(|z| z.is_finite()) {
                    plan.canvas.zoom = zoom.max(MIN_ZOOM);
                }
                if let Some(pan) = pan.filter(|p| p.x.is_finite() && p.y.is_finite()) {
                    plan.canvas.pan = pan;
                }
                Effect::keep("Change view")
            }
            Command::CreateRectAreas {
                rect,
                partitions,
                direction,
            } => self.create_rect_areas(plan, rect, *partitions, *direction),
            Command::CreatePolygonArea {
                points,
                holes,
                name,
            } => {
                let polygon = Polygon::with_holes(points.clone(), holes.clone());
                if !polygon.is_valid() {
                    return None;
                }
                self.push_area(plan, name.as_deref(), Shape::Polygon(polygon))
            }
            Command::CreateEllipseArea { ellipse, name } => {
                if !ellipse.is_valid() {
                    return None;
                }
                let clamped = clamp_ellipse(ellipse, plan.size());
                self.push_area(plan, name.as_deref(), Shape::Ellipse(clamped))
            }
            Command::PasteAreas { areas, dx, dy } => self.paste(plan, areas, *dx, *dy),
            Command::MoveRect { id, dx, dy, snap } => {
                let rect = *plan.find_area(id)?.shape.as_rect()?;
                let mut moved = move_rect(&rect, *dx, *dy, plan.size());
                if *snap {
                    let snapped = snap_rect(&moved, self.grid_step, &self.neighbors(plan, id));
                    moved = fit_rect_to_bounds(&snapped, plan.size(), self.min_size);
                }
                self.replace_shape(plan, id, Shape::Rect(moved), "Move")
            }
            Command::ResizeRect {
                id,
                handle,
                dx,
                dy,
                snap,
            } => {
                let rect = *plan.find_area(id)?.shape.as_rect()?;
                let bounds = plan.size();
                let mut resized =
                    apply_rect_resize(&rect, *handle, *dx, *dy, bounds, self.min_size);
                if *snap {
                    let snapped = snap_rect(&resized, self.grid_step, &self.neighbors(plan, id));
                    resized = constrain_rect_to_bounds(&snapped, bounds, self.min_size);
                }
                self.replace_shape(plan, id, Shape::Rect(resized), "Resize")
            }
            Command::MovePolygon { id, dx, dy, clamp } => {
                let polygon = plan.find_area(id)?.shape.as_polygon()?;
                let (dx, dy) = if *clamp {
                    clamp_delta_for_polygon(polygon, plan.size(), *dx, *dy)
                } else {
                    (*dx, *dy)
                };
                let mut moved = polygon.clone();
                moved.translate(dx, dy);
                self.replace_shape(plan, id, Shape::Polygon(moved), "Move")
            }
            Command::MoveMultipolygon { id, dx, dy, clamp } => {
                let multi = plan.find_area(id)?.shape.as_multipolygon()?;
                let (dx, dy) = if *clamp {
                    clamp_delta_for_multipolygon(multi, plan.size(), *dx, *dy)
                } else {
                    (*dx, *dy)
                };
                let mut moved = multi.clone();
                moved.translate(dx, dy);
                self.replace_shape(plan, id, Shape::MultiPolygon(moved), "Move")
            }
            Command::MoveEllipse { id, dx, dy } => {
                let ellipse = plan.find_area(id)?.shape.as_ellipse()?;
                let moved = move_ellipse(ellipse, *dx, *dy, plan.size());
                self.replace_shape(plan, id, Shape::Ellipse(moved), "Move")
            }
            Command::SetRect { id, rect } => {
                plan.find_area(id)?.shape.as_rect()?;
                if !rect.is_valid() {
                    return None;
                }
                let rect = constrain_rect_to_bounds(rect, plan.size(), self.min_size);
                self.replace_shape(plan, id, Shape::Rect(rect), "Edit")
            }
            Command::SetRects { updates } => self.set_rects(plan, updates),
            Command::SetPolygon { id, polygon } => {
                plan.find_area(id)?.shape.as_polygon()?;
                if !polygon.is_valid() {
                    return None;
                }
                self.replace_shape(plan, id, Shape::Polygon(polygon.clone()), "Edit")
            }
            Command::SetMultipolygon { id, multipolygon } => {
                plan.find_area(id)?.shape.as_multipolygon()?;
                if !multipolygon.is_valid() {
                    return None;
                }
                self.replace_shape(plan, id, Shape::MultiPolygon(multipolygon.clone()), "Edit")
            }
            Command::SetEllipse { id, ellipse } => {
                plan.find_area(id)?.shape.as_ellipse()?;
                if !ellipse.is_valid() {
                    return None;
                }
                let ellipse = clamp_ellipse(ellipse, plan.size());
                self.replace_shape(plan, id, Shape::Ellipse(ellipse), "Edit")
            }
            Command::RenameArea { id, name } => {
                let area = plan.find_area_mut(id)?;
                let old = std::mem::replace(&mut area.name, name.clone());
                Effect::select(vec![id.clone()], format!("Rename {} to {}", old, name))
            }
            Command::RecolorArea {
                id,
                fill,
                stroke,
                stroke_width,
            } => {
                let area = plan.find_area_mut(id)?;
                if let Some(fill) = fill {
                    area.fill = fill.clone();
                }
                if let Some(stroke) = stroke {
                    area.stroke = stroke.clone();
                }
                if let Some(width) = stroke_width.filter(|w| w.is_finite() && *w >= 0.0) {
                    area.stroke_width = width;
                }
                Effect::select(vec![id.clone()], format!("Recolor {}", area.name))
            }
            Command::MirrorArea { id, axis } => {
                let area = plan.find_area_mut(id)?;
                let center = area.shape.bounding_box().center();
                let mirror = |p: &[Point]| mirror_points(p, center, *axis);
                match &mut area.shape {
                    Shape::Polygon(poly) => *poly = map_polygon(poly, mirror),
                    Shape::MultiPolygon(multi) => *multi = map_multipolygon(multi, mirror),
                    Shape::Rect(_) | Shape::Ellipse(_) => {}
                }
                Effect::select(vec![id.clone()], format!("Mirror {}", area.name))
            }
            Command::RotateArea { id, angle, snap } => {
                if !angle.is_finite() {
                    return None;
                }
                let angle = snap_angle(*angle, *snap && self.angle_snap);
                let area = plan.find_area_mut(id)?;
                let center = area.shape.bounding_box().center();
                let rotate = |p: &[Point]| rotate_points(p, center, angle);
                match &mut area.shape {
                    Shape::Polygon(poly) => *poly = map_polygon(poly, rotate),
                    Shape::MultiPolygon(multi) => *multi = map_multipolygon(multi, rotate),
                    Shape::Rect(_) | Shape::Ellipse(_) => return None,
                }
                let description = format!("Rotate {} by {}°", area.name, angle);
                Effect::select(vec![id.clone()], description)
            }
            Command::DeleteAreas { ids } => {
                let removed: Vec<Area> = ids.iter().filter_map(|id| plan.remove_area(id)).collect();
                let description = match removed.as_slice() {
                    [single] => format!("Delete {}", single.name),
                    many => format!("Delete {} areas", many.len()),
                };
                Effect::select(Vec::new(), description)
            }
            Command::DivideArea {
                id,
                partitions,
                direction,
            } => self.divide(plan, id, *partitions, *direction),
            Command::MergeAreas { ids } => self.merge(plan, ids),
            Command::SubtractAreas { ids } => self.subtract(plan, ids),
            Command::ConvertToPolygon { ids } => self.convert(plan, ids),
            Command::EllipseToRect { id } => {
                let ellipse = plan.find_area(id)?.shape.as_ellipse()?;
                let rect =
                    constrain_rect_to_bounds(&ellipse_to_rect(ellipse), plan.size(), self.min_size);
                self.replace_shape(plan, id, Shape::Rect(rect), "Convert")
            }
            Command::RectToEllipse { id } => {
                let rect = plan.find_area(id)?.shape.as_rect()?;
                let ellipse = rect_to_ellipse(rect);
                self.replace_shape(plan, id, Shape::Ellipse(ellipse), "Convert")
            }
            Command::CreateGroup { name, area_ids } => {
                groups::create_group(plan, name, area_ids);
                Effect::keep(format!("Group {}", name))
            }
            Command::DeleteGroup { id } => {
                Effect::keep_if(groups::delete_group(plan, id), "Ungroup")
            }
            Command::SetGroupVisibility { id, visible } => Effect::keep_if(
                groups::set_visibility(plan, id, *visible),
                if *visible { "Show group" } else { "Hide group" },
            ),
            Command::SetGroupLocked { id, locked } => {
                let done = groups::set_locked(plan, id, *locked);
                let verb = if *locked { "Lock" } else { "Unlock" };
                Effect::keep_if(done, format!("{} group", verb))
            }
            Command::RenameGroup { id, name } => Effect::keep_if(
                groups::rename_group(plan, id, name),
                format!("Rename group to {}", name),
            ),
            Command::AddToGroup { id, area_ids } => {
                Effect::keep_if(groups::add_to_group(plan, id, area_ids), "Add to group")
            }
            Command::RemoveFromGroup { id, area_ids } => Effect::keep_if(
                groups::remove_from_group(plan, id, area_ids),
                "Remove from group",
            ),
            Command::SetSelection { .. } | Command::LoadPlan { .. } | Command::Unknown => None,
        }
    }

    // Pulls rects and ellipses back inside a shrunken canvas. Shapes that
    // already fit are left as they are.
    fn fit_to_canvas(&self, plan: &mut Plan) {
        let bounds = plan.size();
        for area in &mut plan.areas {
            match &mut area.shape {
                Shape::Rect(r) => *r = constrain_rect_to_bounds(r, bounds, self.min_size),
                Shape::Ellipse(e) => *e = clamp_ellipse(e, bounds),
                Shape::Polygon(_) | Shape::MultiPolygon(_) => {}
            }
        }
    }

    fn neighbors(&self, plan: &Plan, id: &AreaId) -> NeighborEdges {
        if self.snap_to_neighbors {
            collect_neighbor_edges(plan, std::slice::from_ref(id))
        } else {
            NeighborEdges::default()
        }
    }

    fn replace_shape(
        &self,
        plan: &mut Plan,
        id: &AreaId,
        shape: Shape,
        verb: &str,
    ) -> Option<Effect> {
        let area = plan.find_area_mut(id)?;
        area.shape = shape;
        Effect::select(vec![id.clone()], format!("{} {}", verb, area.name))
    }

    fn push_area(&self, plan: &mut Plan, name: Option<&str>, shape: Shape) -> Option<Effect> {
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => next_area_name(plan),
        };
        let area = Area::new(name, shape, &self.style);
        let id = area.id.clone();
        let description = format!("Add {}", area.name);
        plan.areas.push(area);
        Effect::select(vec![id], description)
    }

    fn create_rect_areas(
        &self,
        plan: &mut Plan,
        rect: &Rect,
        partitions: usize,
        direction: SplitDirection,
    ) -> Option<Effect> {
        if !rect.is_valid() {
            return None;
        }
        let clamped = constrain_rect_to_bounds(rect, plan.size(), self.min_size);
        let pieces = split_rect_evenly(&clamped, partitions.max(1), direction);
        let names = next_area_names(plan, pieces.len());

        let mut ids = Vec::with_capacity(pieces.len());
        for (piece, name) in pieces.into_iter().zip(names) {
            let area = Area::new(name, Shape::Rect(piece), &self.style);
            ids.push(area.id.clone());
            plan.areas.push(area);
        }
        let description = match ids.len() {
            1 => "Add area".to_string(),
            n => format!("Add {} areas", n),
        };
        Effect::select(ids, description)
    }

    fn paste(&self, plan: &mut Plan, areas: &[Area], dx: f64, dy: f64) -> Option<Effect> {
        let bounds = plan.size();
        let mut ids = Vec::new();
        for source in areas {
            let shape = match &source.shape {
                Shape::Rect(r) => {
                    let moved = Rect::new(r.x + dx, r.y + dy, r.width, r.height);
                    Shape::Rect(constrain_rect_to_bounds(&moved, bounds, self.min_size))
                }
                Shape::Ellipse(e) => {
                    let moved = Ellipse::new(e.cx + dx, e.cy + dy, e.rx, e.ry);
                    Shape::Ellipse(clamp_ellipse(&moved, bounds))
                }
                Shape::Polygon(p) => {
                    if p.points.len() < 3 {
                        continue;
                    }
                    let mut moved = p.clone();
                    moved.holes.retain(|h| h.len() >= 3);
                    moved.translate(dx, dy);
                    Shape::Polygon(moved)
                }
                Shape::MultiPolygon(m) => {
                    let Some(mut moved) = prune_multipolygon(m) else {
                        continue;
                    };
                    moved.translate(dx, dy);
                    Shape::MultiPolygon(moved)
                }
            };
            let mut copy = source.clone();
            copy.id = AreaId::generate();
            copy.name = unique_name(plan, &source.name);
            copy.shape = shape;
            ids.push(copy.id.clone());
            plan.areas.push(copy);
        }
        if ids.is_empty() {
            return None;
        }
        let description = format!("Paste {} area(s)", ids.len());
        Effect::select(ids, description)
    }

    fn set_rects(&self, plan: &mut Plan, updates: &[RectUpdate]) -> Option<Effect> {
        let bounds = plan.size();
        let mut applied = Vec::new();
        for update in updates {
            if !update.rect.is_valid() {
                continue;
            }
            let Some(area) = plan.find_area_mut(&update.id) else {
                continue;
            };
            if area.shape.as_rect().is_none() {
                continue;
            }
            let rect = constrain_rect_to_bounds(&update.rect, bounds, self.min_size);
            area.shape = Shape::Rect(rect);
            applied.push(update.id.clone());
        }
        if applied.is_empty() {
            return None;
        }
        let description = format!("Edit {} area(s)", applied.len());
        Effect::select(applied, description)
    }

    fn divide(
        &self,
        plan: &mut Plan,
        id: &AreaId,
        partitions: usize,
        direction: SplitDirection,
    ) -> Option<Effect> {
        if partitions < 2 {
            return None;
        }
        let index = plan.area_index(id)?;
        let target = plan.areas[index].clone();
        let (frame, as_rects) = match &target.shape {
            Shape::Rect(r) => (*r, true),
            other => (other.bounding_box().to_rect(), false),
        };
        if !frame.is_valid() {
            return None;
        }

        let pieces = split_rect_evenly(&frame, partitions, direction);
        let names = partition_names(&target.name, pieces.len());
        let style = target.style();

        let mut created = Vec::with_capacity(pieces.len());
        for (piece, name) in pieces.into_iter().zip(names) {
            let shape = if as_rects {
                Shape::Rect(piece)
            } else {
                Shape::Polygon(Polygon::new(piece.corners().to_vec()))
            };
            let mut area = Area::new(name, shape, &style);
            area.parent_id = Some(target.id.clone());
            created.push(area);
        }

        let ids: Vec<AreaId> = created.iter().map(|a| a.id.clone()).collect();
        plan.areas.splice(index..=index, created);
        Effect::select(ids, format!("Divide {} into {}", target.name, partitions))
    }

    // Existing targets in command order, duplicates dropped.
    fn resolve_targets(plan: &Plan, ids: &[AreaId]) -> Vec<AreaId> {
        let mut found: Vec<AreaId> = Vec::new();
        for id in ids {
            if plan.contains_area(id) && !found.contains(id) {
                found.push(id.clone());
            }
        }
        found
    }

    fn merge(&self, plan: &mut Plan, ids: &[AreaId]) -> Option<Effect> {
        let targets = Self::resolve_targets(plan, ids);
        if targets.len() < 2 {
            return None;
        }
        let shapes: Vec<&Shape> = targets
            .iter()
            .filter_map(|id| plan.find_area(id).map(|a| &a.shape))
            .collect();
        let merged = merge_shapes(self.engine.as_ref(), &shapes)?;

        let keep = targets[0].clone();
        for id in &targets[1..] {
            plan.remove_area(id);
        }
        let area = plan.find_area_mut(&keep)?;
        area.shape = merged;
        let description = format!("Merge {} areas into {}", targets.len(), area.name);
        Effect::select(vec![keep], description)
    }

    fn subtract(&self, plan: &mut Plan, ids: &[AreaId]) -> Option<Effect> {
        let targets = Self::resolve_targets(plan, ids);
        if targets.len() < 2 {
            return None;
        }
        let areas: Vec<&Area> = targets.iter().filter_map(|id| plan.find_area(id)).collect();

        // First target wins ties.
        let mut subject_index = 0;
        let mut best = f64::NEG_INFINITY;
        for (i, area) in areas.iter().enumerate() {
            let a = area.shape.area();
            if a > best {
                best = a;
                subject_index = i;
            }
        }

        let subject = areas[subject_index];
        let cutters: Vec<&Shape> = areas
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != subject_index)
            .map(|(_, a)| &a.shape)
            .collect();
        let result = subtract_shapes(self.engine.as_ref(), &subject.shape, &cutters);
        let subject_id = subject.id.clone();
        let subject_name = subject.name.clone();

        for id in targets.iter().filter(|id| **id != subject_id) {
            plan.remove_area(id);
        }
        match result {
            Some(shape) => {
                let area = plan.find_area_mut(&subject_id)?;
                area.shape = shape;
                Effect::select(vec![subject_id], format!("Subtract from {}", subject_name))
            }
            None => {
                plan.remove_area(&subject_id);
                let description = format!("Subtract removed {} areas", targets.len());
                Effect::select(Vec::new(), description)
            }
        }
    }

    fn convert(&self, plan: &mut Plan, ids: &[AreaId]) -> Option<Effect> {
        let targets = Self::resolve_targets(plan, ids);
        if targets.is_empty() {
            return None;
        }
        let shapes: Vec<&Shape> = targets
            .iter()
            .filter_map(|id| plan.find_area(id).map(|a| &a.shape))
            .collect();
        let converted = convert_to_polygon(&shapes)?;

        let keep = targets[0].clone();
        for id in &targets[1..] {
            plan.remove_area(id);
        }
        self.replace_shape(plan, &keep, converted, "Convert")
    }
}

fn valid_canvas_size(v: f64) -> bool {
    v.is_finite() && v >= MIN_CANVAS_SIZE
}

fn map_polygon(poly: &Polygon, f: impl Fn(&[Point]) -> Vec<Point>) -> Polygon {
    Polygon::with_holes(
        f(poly.points.as_slice()),
        poly.holes.iter().map(|h| f(h.as_slice())).collect(),
    )
}

fn map_multipolygon(multi: &MultiPolygon, f: impl Fn(&[Point]) -> Vec<Point>) -> MultiPolygon {
    MultiPolygon::with_holes(
        multi.polygons.iter().map(|r| f(r.as_slice())).collect(),
        multi
            .holes
            .iter()
            .map(|rings| rings.iter().map(|r| f(r.as_slice())).collect())
            .collect(),
    )
}

// Drops rings below three points, keeping holes aligned with their
// polygons. `None` when no polygon survives.
fn prune_multipolygon(multi: &MultiPolygon) -> Option<MultiPolygon> {
    let mut polygons = Vec::new();
    let mut holes = Vec::new();
    for (i, ring) in multi.polygons.iter().enumerate() {
        if ring.len() < 3 {
            continue;
        }
        polygons.push(ring.clone());
        holes.push(
            multi
                .holes_for(i)
                .iter()
                .filter(|h| h.len() >= 3)
                .cloned()
                .collect::<Vec<_>>(),
        );
    }
    if polygons.is_empty() {
        return None;
    }
    if holes.iter().all(|h| h.is_empty()) {
        holes.clear();
    }
    Some(MultiPolygon::with_holes(polygons, holes))
}
