//! Plain-text statistics panel.

use std::fmt;

use rainsim_aggregate::RainfallReport;

/// Statistics panel followed by the monthly totals.
pub struct Panel<'a> {
    title: &'a str,
    report: &'a RainfallReport,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str, report: &'a RainfallReport) -> Self {
        Self { title, report }
    }
}

impl fmt::Display for Panel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.report.stats();
        let daily = self.report.daily();

        // `aggregate` never yields an empty daily series.
        if let (Some(first), Some(last)) = (daily.first(), daily.last()) {
            writeln!(
                f,
                "Rainfall in {} ({} to {})",
                self.title,
                first.date(),
                last.date()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:<24}{:.1} mm", "Total Rainfall:", stats.total_rainfall())?;
        writeln!(
            f,
            "{:<24}{:.1} mm",
            "Average Daily Rainfall:",
            stats.average_rainfall()
        )?;
        let day = stats.rainiest_day();
        writeln!(
            f,
            "{:<24}{} ({:.1} mm)",
            "Rainiest Day:",
            day.date(),
            day.rainfall()
        )?;
        let month = stats.rainiest_month();
        writeln!(
            f,
            "{:<24}{} ({:.1} mm)",
            "Rainiest Month:",
            month.month(),
            month.rainfall()
        )?;
        writeln!(f, "{:<24}{} days", "Dry Days:", stats.dry_day_count())?;
        writeln!(f, "{:<24}{} days", "Wet Days:", stats.wet_day_count())?;

        writeln!(f)?;
        writeln!(f, "Monthly Rainfall")?;
        for m in self.report.monthly() {
            writeln!(f, "  {}  {:<10}{:>8.1} mm", m.period(), m.month(), m.rainfall())?;
        }
        Ok(())
    }
}

/// Renders the statistics panel followed by the monthly totals.
pub fn render(title: &str, report: &RainfallReport) -> String {
    Panel::new(title, report).to_string()
}
