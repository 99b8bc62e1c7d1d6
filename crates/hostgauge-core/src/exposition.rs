//! Text exposition of a [`MetricSnapshot`].
//!
//! Every gauge renders as a `# HELP` line, a `# TYPE` line and a sample line.
//! Names, HELP text and ordering are a scrape-config contract; do not change
//! them.

use std::fmt::Write;

use crate::snapshot::MetricSnapshot;

/// A rendered gauge value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaugeValue {
    Ratio(f32),
    Bytes(u64),
}

impl GaugeValue {
    fn write_to(self, out: &mut String) {
        match self {
            GaugeValue::Bytes(v) => {
                let _ = write!(out, "{v}");
            }
            GaugeValue::Ratio(v) => {
                // Always carry a fractional part: 0 -> "0.0".
                let start = out.len();
                let _ = write!(out, "{v}");
                if v.is_finite() && !out[start..].contains('.') {
                    out.push_str(".0");
                }
            }
        }
    }
}

/// Name and HELP text of one exported gauge.
#[derive(Debug, Clone, Copy)]
pub struct GaugeDesc {
    pub name: &'static str,
    pub help: &'static str,
}

/// Exported gauges, in output order.
pub const GAUGES: [GaugeDesc; 5] = [
    GaugeDesc { name: "cpu_usage", help: "CPU usage percentage" },
    GaugeDesc { name: "memory_total", help: "Total system memory in bytes" },
    GaugeDesc { name: "memory_used", help: "Used system memory in bytes" },
    GaugeDesc { name: "disk_total", help: "Total disk space in bytes" },
    GaugeDesc { name: "disk_used", help: "Used disk space in bytes" },
];

impl MetricSnapshot {
    /// Values aligned with [`GAUGES`].
    pub fn gauge_values(&self) -> [GaugeValue; 5] {
        [
            GaugeValue::Ratio(self.cpu_usage_percent),
            GaugeValue::Bytes(self.memory_total_bytes),
            GaugeValue::Bytes(self.memory_used_bytes),
            GaugeValue::Bytes(self.disk_total_bytes),
            GaugeValue::Bytes(self.disk_used_bytes),
        ]
    }
}

/// Render a snapshot. Lines are `\n`-joined with no trailing newline.
pub fn render(snapshot: &MetricSnapshot) -> String {
    let mut out = String::with_capacity(512);
    for (i, (desc, value)) in GAUGES.iter().zip(snapshot.gauge_values()).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "# HELP {} {}", desc.name, desc.help);
        let _ = writeln!(out, "# TYPE {} gauge", desc.name);
        let _ = write!(out, "{} ", desc.name);
        value.write_to(&mut out);
    }
    out
}
