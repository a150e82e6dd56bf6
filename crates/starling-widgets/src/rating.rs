//! Star-rating input widget.
//!
//! A [`StarRating`] draws a row of stars, fills them up to its current
//! rating, and lets the user pick a new rating by pressing on the row and
//! dragging. Every press or move that settles on a different rating stores
//! it, calls the change callback once, and returns a [`RatingChanged`]
//! message from [`Widget::event`].
//!
//! The configuration is either owned or read from a shared
//! [`ReactiveCell`] at the start of every mapping and paint call, so the
//! host can restyle or re-domain the control without rebuilding it.

use crate::config::RatingConfig;
use crate::star_layout::StarLayout;
use starling_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, MouseButton, Point, ReactiveCell, Rect, Size,
    Transform2D, TypeId, Widget,
};
use std::any::Any;
use std::fmt;

/// Message emitted when the rating changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChanged {
    /// The new rating
    pub rating: f64,
}

type ChangeCallback = Box<dyn Fn(f64) + Send + Sync>;

enum ConfigSource {
    Owned(RatingConfig),
    Shared(ReactiveCell<RatingConfig>),
}

impl ConfigSource {
    fn with<R>(&self, f: impl FnOnce(&RatingConfig) -> R) -> R {
        match self {
            Self::Owned(config) => f(config),
            Self::Shared(cell) => cell.with(f),
        }
    }
}

/// Star-rating input control.
pub struct StarRating {
    /// Last stored rating, normalized under the config active at the time
    rating: f64,
    config: ConfigSource,
    on_change: Option<ChangeCallback>,
    /// Horizontal inset on each side of the star row
    margin: f32,
    /// Preferred star edge length used by `measure`
    star_size: f32,
    disabled: bool,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    bounds: Rect,
    dragging: bool,
}

impl Default for StarRating {
    fn default() -> Self {
        Self::new(0.0, RatingConfig::default())
    }
}

impl fmt::Debug for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarRating")
            .field("rating", &self.rating)
            .field("shared_config", &matches!(self.config, ConfigSource::Shared(_)))
            .field("margin", &self.margin)
            .field("disabled", &self.disabled)
            .field("bounds", &self.bounds)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl StarRating {
    /// Create a rating control with an owned configuration.
    ///
    /// `initial` is normalized into the configuration's domain.
    #[must_use]
    pub fn new(initial: f64, config: RatingConfig) -> Self {
        let rating = config.normalize(initial);
        Self::with_source(rating, ConfigSource::Owned(config))
    }

    /// Create a rating control bound to a shared configuration.
    ///
    /// The control reads the cell on every layout query, hit and paint, and
    /// never writes it.
    #[must_use]
    pub fn with_shared_config(initial: f64, config: ReactiveCell<RatingConfig>) -> Self {
        let rating = config.with(|c| c.normalize(initial));
        Self::with_source(rating, ConfigSource::Shared(config))
    }

    fn with_source(rating: f64, config: ConfigSource) -> Self {
        Self {
            rating,
            config,
            on_change: None,
            margin: 0.0,
            star_size: 24.0,
            disabled: false,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
            dragging: false,
        }
    }

    /// Register the change callback, replacing any previous one.
    #[must_use]
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Set the horizontal margin.
    #[must_use]
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Set the preferred star size.
    #[must_use]
    pub fn star_size(mut self, size: f32) -> Self {
        self.star_size = size.max(0.0);
        self
    }

    /// Set read-only state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Current rating, normalized under the active configuration.
    #[must_use]
    pub fn rating(&self) -> f64 {
        self.config.with(|config| config.normalize(self.rating))
    }

    /// Snapshot of the active configuration.
    #[must_use]
    pub fn config(&self) -> RatingConfig {
        self.config.with(Clone::clone)
    }

    /// Horizontal margin.
    #[must_use]
    pub const fn get_margin(&self) -> f32 {
        self.margin
    }

    /// Whether the control ignores input.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether a press is currently being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Star geometry for the current bounds, or `None` when degenerate.
    #[must_use]
    pub fn star_layout(&self) -> Option<StarLayout> {
        self.config.with(|config| self.layout_for(config))
    }

    /// Width of the filled region for the current rating.
    #[must_use]
    pub fn fill_width(&self) -> f64 {
        self.config.with(|config| {
            self.layout_for(config)
                .map_or(0.0, |layout| layout.fill_width(config.normalize(self.rating)))
        })
    }

    /// Cell of every star, left to right, in widget coordinates.
    #[must_use]
    pub fn star_rects(&self) -> Vec<Rect> {
        self.star_layout()
            .map_or_else(Vec::new, |layout| self.rects_for(&layout))
    }

    fn layout_for(&self, config: &RatingConfig) -> Option<StarLayout> {
        StarLayout::new(
            f64::from(self.bounds.width),
            f64::from(self.margin),
            config.spacing,
            config.number_of_stars,
        )
    }

    fn rects_for(&self, layout: &StarLayout) -> Vec<Rect> {
        (0..layout.number_of_stars())
            .map(|i| {
                Rect::new(
                    self.bounds.x + layout.star_start(i) as f32,
                    self.bounds.y,
                    layout.star_width() as f32,
                    self.bounds.height,
                )
            })
            .collect()
    }

    /// Run the hit mapping for a pointer at absolute `x`.
    ///
    /// The hit always becomes the stored rating. Returns it when it differs
    /// from the rating shown before the hit.
    fn apply_hit(&mut self, x: f32) -> Option<f64> {
        let offset = f64::from(x - self.bounds.x);
        let hit = self.config.with(|config| {
            self.layout_for(config).map(|layout| {
                (
                    layout.rating_at(offset, config.min_rating, config.step_type),
                    config.normalize(self.rating),
                )
            })
        });

        let Some((new_rating, old_rating)) = hit else {
            tracing::trace!(width = self.bounds.width, "hit ignored: degenerate star layout");
            return None;
        };

        // Both sides are normalized, so exact comparison is the change test
        self.rating = new_rating;
        if new_rating != old_rating {
            tracing::debug!(old = old_rating, new = new_rating, "rating changed");
            if let Some(callback) = &self.on_change {
                callback(new_rating);
            }
            Some(new_rating)
        } else {
            None
        }
    }

    fn begin_drag(&mut self, position: &Point) -> Option<f64> {
        if self.bounds.contains_point(position) {
            self.dragging = true;
            self.apply_hit(position.x)
        } else {
            None
        }
    }

    fn continue_drag(&mut self, position: &Point) -> Option<f64> {
        if self.dragging {
            self.apply_hit(position.x)
        } else {
            None
        }
    }

    fn paint_stars(&self, canvas: &mut dyn Canvas, layout: &StarLayout, config: &RatingConfig) {
        if !config.star_shape.is_valid() {
            tracing::trace!(vertices = config.star_shape.vertices, "star shape not drawable");
            return;
        }

        let stars: Vec<Vec<Point>> = self
            .rects_for(layout)
            .into_iter()
            .map(|cell| config.star_shape.points(cell))
            .collect();

        if let Some(shadow) = &config.shadow {
            canvas.push_transform(Transform2D::translate(shadow.offset_x, shadow.offset_y));
            for star in &stars {
                canvas.fill_polygon(star, shadow.color);
            }
            canvas.pop_transform();
        }

        for star in &stars {
            canvas.fill_polygon(star, config.empty_color);
        }

        let fill = layout.fill_width(config.normalize(self.rating));
        if fill > 0.0 {
            let field = self.bounds.inset_horizontal(self.margin);
            canvas.push_clip(field.with_width(fill as f32));
            for (i, star) in (0u32..).zip(&stars) {
                // Stars starting at or past the fill edge are fully clipped
                if layout.star_start(i) - layout.margin() >= fill {
                    break;
                }
                let color = config.fill_color_for(i);
                let color = if self.disabled {
                    Color::new(color.r, color.g, color.b, color.a * 0.5)
                } else {
                    color
                };
                canvas.fill_polygon(star, color);
            }
            canvas.pop_clip();
        }

        if config.border_width > 0.0 {
            for star in &stars {
                let mut outline = star.clone();
                if let Some(first) = star.first() {
                    outline.push(*first);
                }
                canvas.draw_path(&outline, config.border_color, config.border_width);
            }
        }
    }
}

impl Widget for StarRating {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let (stars, spacing) = self
            .config
            .with(|config| (config.number_of_stars, config.spacing as f32));
        let gaps = stars.saturating_sub(1) as f32;
        let width = 2.0f32.mul_add(
            self.margin,
            (stars as f32).mul_add(self.star_size, gaps * spacing.max(0.0)),
        );
        constraints.constrain(Size::new(width, self.star_size))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.config.with(|config| match self.layout_for(config) {
            Some(layout) => self.paint_stars(canvas, &layout, config),
            None => tracing::trace!(width = self.bounds.width, "paint skipped: degenerate star layout"),
        });
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        let changed = match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Event::TouchStart { position, .. }
            | Event::PointerDown {
                position,
                is_primary: true,
                ..
            } => self.begin_drag(position),
            Event::MouseMove { position }
            | Event::TouchMove { position, .. }
            | Event::PointerMove {
                position,
                is_primary: true,
                ..
            } => self.continue_drag(position),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            }
            | Event::TouchEnd { .. }
            | Event::TouchCancel { .. }
            | Event::PointerUp {
                is_primary: true, ..
            }
            | Event::PointerCancel { .. } => {
                self.dragging = false;
                None
            }
            _ => None,
        };

        changed.map(|rating| Box::new(RatingChanged { rating }) as Box<dyn Any + Send>)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
