use crate::animation::ease::Ease;
use crate::foundation::color::Rgba;
use crate::foundation::core::Point;
use crate::foundation::math::{lerp, lerp_point};
use crate::geometry::rect::TrackedRect;
use crate::input::cursor::Cursor;

/// One node of the trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Point,
    pub radius: f64,
    pub color: Rgba,
    hidden: bool,
}

impl Ball {
    fn new(radius: f64, color: Rgba) -> Self {
        Self {
            position: Point::ORIGIN,
            radius,
            color,
            hidden: false,
        }
    }

    /// Whether the ball currently sits over a fill region and should not be drawn.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Radius to draw with: zero while hidden.
    pub fn rendered_radius(&self) -> f64 {
        if self.hidden { 0.0 } else { self.radius }
    }
}

/// Parameters fixed for the lifetime of a [`Chain`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParams {
    pub num_balls: usize,
    /// Fraction of the remaining gap each ball closes per frame. Not range-checked.
    pub lerp_factor: f64,
    pub initial_ball_radius: f64,
    pub initial_ball_color: Rgba,
    pub end_ball_color: Option<Rgba>,
    /// Per-frame easing of radii toward zero while the pointer rests.
    pub idle_radius_decay: f64,
    /// Maps index fraction to colour mix amount.
    pub color_ease: Ease,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            num_balls: 1000,
            lerp_factor: 0.85,
            initial_ball_radius: 10.0,
            initial_ball_color: Rgba::from_rgba8(128, 0, 128, 255),
            end_ball_color: None,
            idle_radius_decay: 0.1,
            color_ease: Ease::HugeOut,
        }
    }
}

/// The trailing chain: ball `0` chases the cursor, ball `i` chases ball `i - 1`.
#[derive(Clone, Debug)]
pub struct Chain {
    params: ChainParams,
    balls: Vec<Ball>,
    targets: Vec<Point>,
}

impl Chain {
    pub fn new(params: ChainParams) -> Self {
        let ball = Ball::new(params.initial_ball_radius, params.initial_ball_color);
        Self {
            balls: vec![ball; params.num_balls],
            targets: vec![Point::ORIGIN; params.num_balls],
            params,
        }
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn targets(&self) -> &[Point] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    // Balls start at the origin and only leave it once the cursor has been seen.
    fn is_unplaced(&self) -> bool {
        self.balls.iter().all(|b| b.position == Point::ORIGIN)
    }

    /// Advance the chain one frame.
    ///
    /// `fill_regions` are rectangles over which balls are hidden.
    pub fn update(&mut self, cursor: Cursor, is_moving: bool, fill_regions: &[TrackedRect]) {
        let n = self.balls.len();
        if n == 0 {
            return;
        }

        let head = cursor.position();
        if cursor.has_moved && self.is_unplaced() {
            for (ball, target) in self.balls.iter_mut().zip(self.targets.iter_mut()) {
                ball.position = head;
                *target = head;
            }
        }

        self.targets[0] = head;

        let p = &self.params;
        let mut last_radius = p.initial_ball_radius;
        for i in 0..n {
            let fraction = i as f64 / n as f64;
            let target = self.targets[i];
            let ball = &mut self.balls[i];

            let radius = if is_moving {
                last_radius * (1.0 - fraction)
            } else {
                lerp(ball.radius, 0.0, p.idle_radius_decay)
            };
            last_radius = radius;

            ball.color = match p.end_ball_color {
                Some(end) => Rgba::mix(p.initial_ball_color, end, p.color_ease.apply(fraction)),
                None => p.initial_ball_color,
            };
            ball.position = lerp_point(ball.position, target, p.lerp_factor);
            ball.radius = radius.max(0.0);
            ball.hidden = fill_regions
                .iter()
                .any(|r| r.overlaps_circle(ball.position, ball.radius));

            if i + 1 < n {
                self.targets[i + 1] = ball.position;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sim/chain.rs"]
mod tests;
