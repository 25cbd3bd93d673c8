use log::info;
use raylib::prelude::*;
use thiserror::Error;

use crate::constants::*;
use crate::renderable::Renderable;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("element not found: \"{0}\"")]
    ElementNotFound(String),
}

pub struct Circle {
    pub id: String,
    pub cx: i32,
    pub cy: i32,
    pub radius: f32,
}

impl Circle {
    pub fn new(id: &str, cx: i32, cy: i32, radius: f32) -> Self {
        Self {
            id: id.to_string(),
            cx,
            cy,
            radius,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.draw_circle(self.cx, self.cy, self.radius, Color::ORANGE);
    }
}

impl Renderable for Circle {
    fn position(&self) -> i32 {
        self.cx
    }

    fn set_position(&mut self, cx: i32) {
        self.cx = cx;
    }
}

pub struct Button {
    pub id: String,
    pub label: String,
    pub bounds: Rectangle,
}

impl Button {
    pub fn new(id: &str, label: &str, bounds: Rectangle) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            bounds,
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.bounds.x
            && point.x <= self.bounds.x + self.bounds.width
            && point.y >= self.bounds.y
            && point.y <= self.bounds.y + self.bounds.height
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, hovered: bool) {
        let fill = if hovered {
            Color::DARKGRAY
        } else {
            Color::new(40, 40, 40, 255)
        };
        d.draw_rectangle_rec(self.bounds, fill);
        d.draw_rectangle_lines(
            self.bounds.x as i32,
            self.bounds.y as i32,
            self.bounds.width as i32,
            self.bounds.height as i32,
            Color::GRAY,
        );
        d.draw_text(
            &self.label,
            self.bounds.x as i32 + 12,
            self.bounds.y as i32 + 10,
            20,
            Color::WHITE,
        );
    }
}

pub struct Scene {
    pub circles: Vec<Circle>,
    pub buttons: Vec<Button>,
}

impl Scene {
    // The fixed scene: one circle at the left end of the track and the
    // two animation controls below it.
    pub fn build() -> Self {
        let circles = vec![Circle::new(CIRCLE_ID, TRACK_MIN_CX, TRACK_CY, CIRCLE_RADIUS)];
        let buttons = vec![
            Button::new(
                START_CONTROL_ID,
                "Start",
                Rectangle::new(50.0, 200.0, 120.0, 40.0),
            ),
            Button::new(
                STOP_CONTROL_ID,
                "Stop",
                Rectangle::new(190.0, 200.0, 120.0, 40.0),
            ),
        ];
        Self { circles, buttons }
    }

    pub fn circle_index(&self, id: &str) -> Result<usize, SceneError> {
        self.circles
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SceneError::ElementNotFound(id.to_string()))
    }

    pub fn button_index(&self, id: &str) -> Result<usize, SceneError> {
        self.buttons
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| SceneError::ElementNotFound(id.to_string()))
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, mouse: Vector2) {
        // Track first so the circle is drawn on top of it
        d.draw_line(TRACK_MIN_CX, TRACK_CY, TRACK_MAX_CX, TRACK_CY, Color::DARKGRAY);
        for circle in self.circles.iter() {
            circle.draw(d);
        }
        for button in self.buttons.iter() {
            button.draw(d, button.contains(mouse));
        }
    }
}

// Element lookups happen exactly once, here. The frame loop works with
// the resolved indices and never searches the scene again.
pub struct Bindings {
    pub start_button: usize,
    pub stop_button: usize,
    pub circle: usize,
}

impl Bindings {
    pub fn resolve(scene: &Scene) -> Result<Self, SceneError> {
        let bindings = Self {
            start_button: scene.button_index(START_CONTROL_ID)?,
            stop_button: scene.button_index(STOP_CONTROL_ID)?,
            circle: scene.circle_index(CIRCLE_ID)?,
        };
        info!(
            "bound controls \"{}\" / \"{}\" to element \"{}\"",
            START_CONTROL_ID, STOP_CONTROL_ID, CIRCLE_ID
        );
        Ok(bindings)
    }
}
