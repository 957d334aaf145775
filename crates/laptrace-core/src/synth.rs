//! Synthetic lap generation
//!
//! Produces a per-timestep telemetry dataset from car parameters using
//! deterministic speed/gear/rpm formulas plus injected Gaussian noise.
//! Generation is generic over [`rand::Rng`] so tests can pass a seeded
//! generator and get reproducible laps.

use std::f64::consts::TAU;

use chrono::Utc;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{TelemetryError, TelemetryResult};
use crate::models::{CarParameters, LapMetadata, TelemetryDataset, TelemetrySample};

/// Telemetry sampling rate
pub const SAMPLE_RATE_HZ: f64 = 10.0;

/// Lower clamp for generated speed; also the validation floor for max_speed
pub const MIN_SPEED_KPH: f64 = 50.0;

/// Lower clamp for generated rpm; also the validation floor for max_rpm
pub const MIN_RPM: f64 = 1000.0;

/// Upper bound on lap_time; bounds the per-request sample allocation
pub const MAX_LAP_TIME_SECS: f64 = 3600.0;

/// Corner-factor waves per lap; the |sin| fold doubles this to 12 speed
/// dips, roughly 4 corners per sector
const CORNER_WAVES_PER_LAP: f64 = 6.0;

const TIRE_BASE_TEMP: f64 = 80.0;
const FRONT_TEMP_SPAN: f64 = 40.0;
const REAR_TEMP_SPAN: f64 = 35.0;

/// Generate a lap with the thread-local RNG
pub fn synthesize_lap(params: &CarParameters) -> TelemetryResult<TelemetryDataset> {
    synthesize_lap_with_rng(params, &mut rand::thread_rng())
}

/// Generate a lap, drawing all noise from the given RNG
pub fn synthesize_lap_with_rng<R: Rng + ?Sized>(
    params: &CarParameters,
    rng: &mut R,
) -> TelemetryResult<TelemetryDataset> {
    params.validate()?;

    let style = params.style().factors();
    let num_points = (params.lap_time * SAMPLE_RATE_HZ).floor() as usize;

    let speed_noise = normal(2.0 * style.speed_var)?;
    let rpm_noise = normal(100.0)?;
    let temp_noise = normal(2.0)?;

    tracing::debug!(
        samples = num_points,
        style = ?params.style(),
        track = %params.track_name,
        "synthesizing lap"
    );

    // Speed profile with corners: an oscillating corner factor carves
    // speed dips into the max_speed envelope.
    let mut speed = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let progress = i as f64 / num_points as f64;
        let corner = 1.0 - 0.5 * (TAU * CORNER_WAVES_PER_LAP * progress).sin().abs();
        let raw = params.max_speed * corner * (0.3 + 0.7 * corner) + speed_noise.sample(rng);
        speed.push(raw.clamp(MIN_SPEED_KPH, params.max_speed));
    }

    // Throttle and brake follow the frame-to-frame speed delta. The
    // first sample has no prior delta and stays at zero for both.
    let mut throttle = vec![0.0; num_points];
    let mut brake = vec![0.0; num_points];
    for i in 1..num_points {
        let delta = speed[i] - speed[i - 1];
        if delta > 0.0 {
            throttle[i] = ((delta + 2.0) / 10.0 * style.throttle_early).clamp(0.0, 1.0);
        } else {
            brake[i] = (delta.abs() / 15.0 * style.brake_late).clamp(0.0, 1.0);
            throttle[i] = (0.3 - brake[i]).max(0.0);
        }
    }

    let gears: Vec<u32> = speed
        .iter()
        .map(|&s| {
            let raw = 1.0 + s / params.max_speed * (params.num_gears - 1) as f64;
            raw.floor().clamp(1.0, params.num_gears as f64) as u32
        })
        .collect();

    let mut rpm = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let base = speed[i] / params.max_speed * params.max_rpm;
        let gear_factor = gears[i] as f64 / params.num_gears as f64;
        let raw = base / (gear_factor + 0.3) + rpm_noise.sample(rng);
        rpm.push(raw.clamp(MIN_RPM, params.max_rpm));
    }

    // Tire temperatures accumulate braking and speed load, wrapping at a
    // per-axle ceiling above the base temperature. The right side gets
    // extra noise for left/right asymmetry.
    let sector_len = num_points / 3;
    let time_step = if num_points > 1 {
        params.lap_time / (num_points - 1) as f64
    } else {
        0.0
    };

    let mut front_load = 0.0;
    let mut rear_load = 0.0;
    let mut samples = Vec::with_capacity(num_points);
    for i in 0..num_points {
        front_load += brake[i] * 0.5 + speed[i] / 100.0;
        rear_load += brake[i] * 0.4 + speed[i] / 100.0;

        let front = TIRE_BASE_TEMP + front_load % FRONT_TEMP_SPAN;
        let rear = TIRE_BASE_TEMP + rear_load % REAR_TEMP_SPAN;

        let sector = if i < sector_len {
            1
        } else if i < 2 * sector_len {
            2
        } else {
            3
        };

        samples.push(TelemetrySample {
            time: i as f64 * time_step,
            speed: speed[i],
            throttle: throttle[i],
            brake: brake[i],
            gear: gears[i],
            rpm: rpm[i],
            tire_temp_front_left: front,
            tire_temp_front_right: front + temp_noise.sample(rng),
            tire_temp_rear_left: rear,
            tire_temp_rear_right: rear + temp_noise.sample(rng),
            sector,
        });
    }

    Ok(TelemetryDataset {
        samples,
        metadata: LapMetadata {
            track_name: params.track_name.clone(),
            max_speed: params.max_speed,
            lap_time: params.lap_time,
            driver_style: params.driver_style.clone(),
            generated_at: Utc::now(),
        },
    })
}

fn normal(std_dev: f64) -> TelemetryResult<Normal<f64>> {
    Normal::new(0.0, std_dev)
        .map_err(|e| TelemetryError::Internal(format!("noise distribution: {e}")))
}
