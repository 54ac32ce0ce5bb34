//! PNG rendering of a solved arc.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use glam::Vec2;
use plotters::prelude::*;
use tracing::info;

use crate::core::error::{AimError, Result};
use crate::core::gravity::Gravity;
use crate::core::trajectory::LaunchSolution;
use crate::core::window::PlotWindow;

const IMAGE_SIZE: (u32, u32) = (1280, 640);

fn plot_err<E: fmt::Display>(err: E) -> AimError {
    AimError::Plot(err.to_string())
}

/// `<prefix>_YYYYmmdd_HHMMSS.png`
pub fn timestamped_file_name<Tz: TimeZone>(prefix: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("{prefix}_{}.png", now.format("%Y%m%d_%H%M%S"))
}

pub fn output_path<Tz: TimeZone>(dir: &Path, prefix: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: fmt::Display,
{
    dir.join(timestamped_file_name(prefix, now))
}

pub fn render_png(
    path: &Path,
    origin: Vec2,
    target: Vec2,
    solution: &LaunchSolution,
    gravity: Gravity,
    samples: usize,
) -> Result<()> {
    let points = solution.path(origin, gravity, samples);
    let mut bounds = points.clone();
    bounds.push(target);
    let window = PlotWindow::around(&bounds);

    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let caption = format!(
        "{} shot | v = ({:.2}, {:.2}) m/s | g = {}",
        solution.regime.name(),
        solution.velocity.x,
        solution.velocity.y,
        gravity
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(window.min.x..window.max.x, window.min.y..window.max.y)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.x, p.y)),
            BLUE.stroke_width(2),
        ))
        .map_err(plot_err)?;
    chart
        .draw_series([
            Circle::new((origin.x, origin.y), 5, RED.filled()),
            Circle::new((target.x, target.y), 7, GREEN.filled()),
        ])
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "wrote trajectory plot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn file_name_carries_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(
            timestamped_file_name("arc", &now),
            "arc_20240305_070809.png"
        );
        assert_eq!(
            output_path(Path::new("plots"), "arc", &now),
            PathBuf::from("plots/arc_20240305_070809.png")
        );
    }
}
