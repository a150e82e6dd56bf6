//! Headless test harness for Starling widgets.
//!
//! The harness owns a root widget, lays it out at its intrinsic size inside
//! a viewport, and feeds it simulated input. Messages the root returns from
//! [`Widget::event`] are collected for inspection, and [`Harness::paint`]
//! records what the widget draws.

use starling_core::{
    Constraints, Event, MouseButton, Point, RecordingCanvas, Rect, TouchId, Widget,
};
use std::any::Any;
use std::collections::VecDeque;

use crate::selector::Selector;

/// Test harness for interacting with Starling widgets.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the root, in delivery order
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
}

impl Harness {
    /// Create a new harness and lay the root out at its measured size.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay the root out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Lay the root out at explicit bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.root.layout(bounds);
        self
    }

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        &*self.root
    }

    // === Event Simulation ===

    /// Deliver a single event to the root.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Simulate a click at the centre of a widget matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            self.press_release(bounds.center());
        }
        self
    }

    /// Simulate a click `dx` pixels right of a widget's left edge,
    /// vertically centred.
    pub fn click_at(&mut self, selector: &str, dx: f32) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            self.press_release(point_in(bounds, dx));
        }
        self
    }

    /// Simulate a mouse drag between two offsets from a widget's left edge.
    ///
    /// The pointer moves in `steps` equal increments between press and
    /// release.
    pub fn drag(&mut self, selector: &str, from_dx: f32, to_dx: f32, steps: usize) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            let start = point_in(bounds, from_dx);
            let end = point_in(bounds, to_dx);
            self.event_queue.push_back(Event::MouseDown {
                position: start,
                button: MouseButton::Left,
            });
            for position in interpolate(start, end, steps) {
                self.event_queue.push_back(Event::MouseMove { position });
            }
            self.event_queue.push_back(Event::MouseUp {
                position: end,
                button: MouseButton::Left,
            });
            self.process_events();
        }
        self
    }

    /// Simulate a single-finger touch drag between two offsets.
    pub fn touch_drag(
        &mut self,
        selector: &str,
        from_dx: f32,
        to_dx: f32,
        steps: usize,
    ) -> &mut Self {
        if let Some(bounds) = self.query_bounds(selector) {
            let id = TouchId::new(0);
            let start = point_in(bounds, from_dx);
            let end = point_in(bounds, to_dx);
            self.event_queue.push_back(Event::TouchStart {
                id,
                position: start,
            });
            for position in interpolate(start, end, steps) {
                self.event_queue.push_back(Event::TouchMove { id, position });
            }
            self.event_queue.push_back(Event::TouchEnd { id, position: end });
            self.process_events();
        }
        self
    }

    // === Messages ===

    /// Number of messages collected so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Collected messages of type `T`, in delivery order.
    #[must_use]
    pub fn messages<T: Any>(&self) -> Vec<&T> {
        self.messages
            .iter()
            .filter_map(|m| m.downcast_ref::<T>())
            .collect()
    }

    /// Most recent message of type `T`.
    #[must_use]
    pub fn last_message<T: Any>(&self) -> Option<&T> {
        self.messages.iter().rev().find_map(|m| m.downcast_ref::<T>())
    }

    /// Discard all collected messages.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.messages.clear();
        self
    }

    // === Rendering ===

    /// Paint the root into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&*self.root, &sel)
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(&*self.root, &sel, &mut results);
        results
    }

    /// Bounds of the first widget matching the selector.
    #[must_use]
    pub fn query_bounds(&self, selector: &str) -> Option<Rect> {
        self.query(selector).map(|w| w.bounds())
    }

    /// Accessible name of a widget, or an empty string.
    #[must_use]
    pub fn text(&self, selector: &str) -> String {
        self.query(selector)
            .and_then(|w| w.accessible_name())
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert the accessible name of a widget.
    ///
    /// # Panics
    ///
    /// Panics if the text does not match.
    pub fn assert_text(&self, selector: &str, expected: &str) -> &Self {
        let actual = self.text(selector);
        assert_eq!(
            actual, expected,
            "Expected text '{expected}' but got '{actual}' for '{selector}'"
        );
        self
    }

    /// Assert the count of matching widgets.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    /// Assert how many messages of type `T` were collected.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_message_count<T: Any>(&self, expected: usize) -> &Self {
        let actual = self.messages::<T>().len();
        assert_eq!(
            actual,
            expected,
            "Expected {expected} messages of type {} but found {actual}",
            std::any::type_name::<T>()
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self
            .root
            .measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::from_size(size));
    }

    fn press_release(&mut self, position: Point) {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

fn point_in(bounds: Rect, dx: f32) -> Point {
    Point::new(bounds.x + dx, bounds.center().y)
}

fn interpolate(start: Point, end: Point, steps: usize) -> impl Iterator<Item = Point> {
    let steps = steps.max(1);
    (1..=steps).map(move |i| {
        let t = i as f32 / steps as f32;
        Point::new(
            (end.x - start.x).mul_add(t, start.x),
            (end.y - start.y).mul_add(t, start.y),
        )
    })
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }
    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}
