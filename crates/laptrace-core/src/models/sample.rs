//! Telemetry samples and generated datasets

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::table::DataTable;

/// Column order of a telemetry table, as the frontend expects it
pub const TELEMETRY_COLUMNS: [&str; 11] = [
    "time",
    "speed",
    "throttle",
    "brake",
    "gear",
    "rpm",
    "tire_temp_front_left",
    "tire_temp_front_right",
    "tire_temp_rear_left",
    "tire_temp_rear_right",
    "sector",
];

/// One telemetry row at a single timestep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetrySample {
    /// Seconds since lap start
    pub time: f64,
    /// Speed in km/h
    pub speed: f64,
    /// Throttle application, 0..1
    pub throttle: f64,
    /// Brake application, 0..1
    pub brake: f64,
    /// Selected gear
    pub gear: u32,
    /// Engine speed
    pub rpm: f64,
    pub tire_temp_front_left: f64,
    pub tire_temp_front_right: f64,
    pub tire_temp_rear_left: f64,
    pub tire_temp_rear_right: f64,
    /// Track sector, 1..=3
    pub sector: u8,
}

/// Metadata describing a generated lap
#[derive(Debug, Clone, Serialize)]
pub struct LapMetadata {
    pub track_name: String,
    pub max_speed: f64,
    pub lap_time: f64,
    /// Echoes the caller's raw style string, recognized or not
    pub driver_style: String,
    pub generated_at: DateTime<Utc>,
}

/// An ordered sequence of telemetry samples plus lap metadata
#[derive(Debug, Clone)]
pub struct TelemetryDataset {
    pub samples: Vec<TelemetrySample>,
    pub metadata: LapMetadata,
}

impl TelemetryDataset {
    /// Number of samples in the lap
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Convert to the column-major table shape shared with CSV uploads
    pub fn to_table(&self) -> DataTable {
        let names = TELEMETRY_COLUMNS.iter().map(|c| c.to_string()).collect();

        let mut columns: Vec<Vec<Value>> = (0..TELEMETRY_COLUMNS.len())
            .map(|_| Vec::with_capacity(self.samples.len()))
            .collect();

        for s in &self.samples {
            columns[0].push(Value::from(s.time));
            columns[1].push(Value::from(s.speed));
            columns[2].push(Value::from(s.throttle));
            columns[3].push(Value::from(s.brake));
            columns[4].push(Value::from(s.gear));
            columns[5].push(Value::from(s.rpm));
            columns[6].push(Value::from(s.tire_temp_front_left));
            columns[7].push(Value::from(s.tire_temp_front_right));
            columns[8].push(Value::from(s.tire_temp_rear_left));
            columns[9].push(Value::from(s.tire_temp_rear_right));
            columns[10].push(Value::from(s.sector));
        }

        DataTable::from_parts(names, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64) -> TelemetrySample {
        TelemetrySample {
            time,
            speed: 200.0,
            throttle: 0.5,
            brake: 0.0,
            gear: 5,
            rpm: 9000.0,
            tire_temp_front_left: 85.0,
            tire_temp_front_right: 86.0,
            tire_temp_rear_left: 84.0,
            tire_temp_rear_right: 85.5,
            sector: 1,
        }
    }

    #[test]
    fn test_to_table_column_order() {
        let dataset = TelemetryDataset {
            samples: vec![sample(0.0), sample(0.1)],
            metadata: LapMetadata {
                track_name: "Demo Track".to_string(),
                max_speed: 320.0,
                lap_time: 90.0,
                driver_style: "balanced".to_string(),
                generated_at: Utc::now(),
            },
        };

        let table = dataset.to_table();
        assert_eq!(table.column_names(), &TELEMETRY_COLUMNS);
        assert_eq!(table.num_rows(), 2);

        let gear = table.column("gear").unwrap();
        assert_eq!(gear[0], serde_json::json!(5));
    }
}
