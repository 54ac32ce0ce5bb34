use glam::Vec2;

/// Position after `time_s` of drag-free flight under downward `gravity_mps2`.
pub fn position_at(origin: Vec2, velocity: Vec2, gravity_mps2: f32, time_s: f32) -> Vec2 {
    Vec2::new(
        origin.x + velocity.x * time_s,
        origin.y + (velocity.y * time_s) - (0.5 * gravity_mps2 * time_s * time_s),
    )
}

pub fn velocity_from_angle(angle_deg: f32, speed_mps: f32) -> Vec2 {
    let theta = angle_deg.to_radians();
    Vec2::new(speed_mps * theta.cos(), speed_mps * theta.sin())
}

pub fn angle_and_speed(velocity: Vec2) -> (f32, f32) {
    (velocity.y.atan2(velocity.x).to_degrees(), velocity.length())
}

/// Evenly spaced positions over `[0, flight_time_s]`, both ends included.
pub fn sample_path(
    origin: Vec2,
    velocity: Vec2,
    gravity_mps2: f32,
    flight_time_s: f32,
    samples: usize,
) -> Vec<Vec2> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f32 * flight_time_s) / sample_count as f32;
            position_at(origin, velocity, gravity_mps2, t)
        })
        .collect()
}

/// Highest point reached within `[0, flight_time_s]`.
pub fn apex(origin: Vec2, velocity: Vec2, gravity_mps2: f32, flight_time_s: f32) -> Vec2 {
    let t_peak = if gravity_mps2 > 0.0 {
        (velocity.y / gravity_mps2).clamp(0.0, flight_time_s.max(0.0))
    } else {
        0.0
    };
    position_at(origin, velocity, gravity_mps2, t_peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_position_on_flat_launch() {
        let velocity = velocity_from_angle(45.0, 10.0);
        let landing = position_at(Vec2::ZERO, velocity, 9.8, 1.4431);

        assert_close(landing.x, 10.2041, 0.001);
        assert_close(landing.y, 0.0, 0.001);
    }

    #[test]
    fn angle_and_speed_round_trip() {
        let (angle, speed) = angle_and_speed(Vec2::new(-3.0, 4.0));
        assert_close(speed, 5.0, 1e-6);
        assert_close(angle, 126.8699, 1e-3);

        let back = velocity_from_angle(angle, speed);
        assert_close(back.x, -3.0, 1e-4);
        assert_close(back.y, 4.0, 1e-4);
    }

    #[test]
    fn sample_path_covers_both_ends() {
        let origin = Vec2::new(2.0, 3.0);
        let velocity = Vec2::new(4.0, 9.8);
        let points = sample_path(origin, velocity, 9.8, 2.0, 0);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], origin);
        assert_close(points[1].y, 3.0 + 9.8 - 4.9, 1e-5);
        assert_close(points[2].x, 10.0, 1e-5);
        assert_close(points[2].y, 3.0, 1e-5);
    }

    #[test]
    fn apex_is_clamped_to_flight() {
        let top = apex(Vec2::ZERO, Vec2::new(1.0, 9.8), 9.8, 5.0);
        assert_close(top.x, 1.0, 1e-6);
        assert_close(top.y, 4.9, 1e-5);

        let falling = apex(Vec2::ZERO, Vec2::new(1.0, -2.0), 9.8, 5.0);
        assert_eq!(falling, Vec2::ZERO);
    }
}
