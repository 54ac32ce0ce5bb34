use std::env;
use std::fs;
use std::io::{self, Write};

use chrono::Local;
use glam::Vec3;
use tracing::{info, warn};

use parabolic_aim::core::config::AimConfig;
use parabolic_aim::core::kinematics::{angle_and_speed, apex};
use parabolic_aim::core::plot::{output_path, render_png};
use parabolic_aim::{AimError, Gravity, LaunchSolution, Result, solve};

const PLOT_PREFIX: &str = "trajectory";

#[derive(Clone, Copy, Debug, PartialEq)]
struct ShotInputs {
    origin: Vec3,
    target: Vec3,
    offset_y: f32,
}

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    help: bool,
    plot: bool,
    gravity: Option<Gravity>,
    positional: Vec<String>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}

fn parse_f32(value: &str, label: &'static str) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| AimError::InvalidNumber {
            label,
            value: value.to_string(),
        })
}

fn read_f32(prompt: &str) -> Result<f32> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(AimError::Usage("Input ended unexpectedly (EOF).".to_string()));
        }

        match line.trim().parse::<f32>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 10 or -2.5)."),
        }
    }
}

fn parse_cli(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--plot" => cli.plot = true,
            "--gravity" | "-g" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AimError::Usage(format!("{arg} needs a value.")))?;
                cli.gravity = Some(value.parse()?);
            }
            _ => cli.positional.push(arg.clone()),
        }
    }
    Ok(cli)
}

fn get_inputs_from_user() -> Result<ShotInputs> {
    let origin_x = read_f32("Origin x (m): ")?;
    let origin_y = read_f32("Origin y (m): ")?;
    let target_x = read_f32("Target x (m): ")?;
    let target_y = read_f32("Target y (m): ")?;
    let offset_y = read_f32("Vertical offset (m, 0 for none): ")?;
    Ok(ShotInputs {
        origin: Vec3::new(origin_x, origin_y, 0.0),
        target: Vec3::new(target_x, target_y, 0.0),
        offset_y,
    })
}

fn get_inputs_from_args(args: &[String]) -> Result<ShotInputs> {
    if args.len() != 4 && args.len() != 5 {
        return Err(AimError::Usage(
            "Expected 4 or 5 numbers: <origin_x> <origin_y> <target_x> <target_y> [offset_y]."
                .to_string(),
        ));
    }

    let offset_y = match args.get(4) {
        Some(raw) => parse_f32(raw, "offset_y")?,
        None => 0.0,
    };
    Ok(ShotInputs {
        origin: Vec3::new(
            parse_f32(&args[0], "origin_x")?,
            parse_f32(&args[1], "origin_y")?,
            0.0,
        ),
        target: Vec3::new(
            parse_f32(&args[2], "target_x")?,
            parse_f32(&args[3], "target_y")?,
            0.0,
        ),
        offset_y,
    })
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--gravity <m/s^2|earth|moon>] [--plot]");
    println!("  {program} [--gravity <m/s^2|earth|moon>] [--plot] <origin_x> <origin_y> <target_x> <target_y> [offset_y]");
    println!();
    println!("Environment:");
    println!("  AIM_GRAVITY, AIM_PLOT_DIR, AIM_PATH_SAMPLES, RUST_LOG, LOG_FORMAT=json");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 0 0 10 5");
    println!("  {program} --gravity moon --plot 0 2 -12 2 1.5");
}

fn print_report(solution: &LaunchSolution, inputs: ShotInputs, gravity: Gravity) {
    let (angle_deg, speed) = angle_and_speed(solution.velocity);
    let top = apex(
        inputs.origin.truncate(),
        solution.velocity,
        gravity.effective(),
        solution.flight_time,
    );

    println!("\nRegime: {}", solution.regime.name());
    println!(
        "Launch velocity: ({:.4}, {:.4}) m/s",
        solution.velocity.x, solution.velocity.y
    );
    println!("Angle: {angle_deg:.2} deg | Speed: {speed:.4} m/s");
    println!("Time to target: {:.4} s", solution.flight_time);
    println!("Apex: ({:.4}, {:.4}) m", top.x, top.y);
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("parabolic_aim");
    let cli = parse_cli(args.get(1..).unwrap_or_default())?;

    if cli.help {
        print_usage(program);
        return Ok(());
    }

    let mut config = AimConfig::from_env();
    if let Some(gravity) = cli.gravity {
        config.gravity = gravity;
    }

    let inputs = if cli.positional.is_empty() {
        get_inputs_from_user()?
    } else {
        get_inputs_from_args(&cli.positional)?
    };
    info!(
        origin = ?inputs.origin.truncate(),
        target = ?inputs.target.truncate(),
        offset_y = inputs.offset_y,
        gravity = config.gravity.magnitude(),
        "solving launch"
    );

    let solution = solve(inputs.origin, inputs.target, inputs.offset_y, config.gravity)
        .inspect_err(|err| warn!(%err, "no valid launch solution"))?;
    print_report(&solution, inputs, config.gravity);

    if cli.plot {
        fs::create_dir_all(&config.plot_dir)?;
        let path = output_path(&config.plot_dir, PLOT_PREFIX, &Local::now());
        render_png(
            &path,
            inputs.origin.truncate(),
            inputs.target.truncate(),
            &solution,
            config.gravity,
            config.path_samples,
        )?;
        println!("Plot: {}", path.display());
    }

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        if err.is_unsolvable() {
            eprintln!("No valid launch solution: {err}");
        } else {
            eprintln!("Error: {err}");
        }
        if matches!(err, AimError::Usage(_) | AimError::InvalidNumber { .. }) {
            print_usage("cargo run --");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn parses_flags_and_negative_positionals() {
        let cli = parse_cli(&strings(&["--plot", "0", "-2", "--gravity", "moon", "-10", "3"]))
            .expect("valid arguments");

        assert!(cli.plot);
        assert!(!cli.help);
        assert_eq!(cli.gravity, Some(Gravity::MOON));
        assert_eq!(cli.positional, strings(&["0", "-2", "-10", "3"]));
    }

    #[test]
    fn gravity_flag_needs_a_value() {
        let err = parse_cli(&strings(&["0", "0", "1", "1", "--gravity"])).expect_err("missing");
        assert!(matches!(err, AimError::Usage(_)));
    }

    #[test]
    fn offset_defaults_to_zero() {
        let inputs = get_inputs_from_args(&strings(&["1", "2", "11", "7"])).expect("four numbers");

        assert_eq!(inputs.origin, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(inputs.target, Vec3::new(11.0, 7.0, 0.0));
        assert_eq!(inputs.offset_y, 0.0);
    }

    #[test]
    fn rejects_bad_numbers_and_counts() {
        let err = get_inputs_from_args(&strings(&["1", "2", "x", "7"])).expect_err("bad number");
        assert!(err.to_string().contains("target_x"));

        let err = get_inputs_from_args(&strings(&["1", "2", "3"])).expect_err("too few");
        assert!(matches!(err, AimError::Usage(_)));
    }
}
