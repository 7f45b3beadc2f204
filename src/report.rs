use prettytable::{row, Table};

use crate::responses::{DashboardResponse, LocationSource};

/// Plain-text dashboard for the terminal.
pub fn render_dashboard(dashboard: &DashboardResponse) -> String {
    let mut summary = Table::new();
    summary.add_row(row!["Stylists", dashboard.total_stylists]);
    summary.add_row(row!["Braiding Done", dashboard.total_braiding]);
    summary.add_row(row!["Total Payment", dashboard.total_payment]);
    summary.add_row(row!["Pending Payment", dashboard.pending_payment]);

    let mut locations = Table::new();
    locations.add_row(row!["Location", "Stylists", "Braiding", "Rating", "Total", "Received", "Pending"]);
    locations.add_empty_row();
    for l in &dashboard.locations {
        locations.add_row(row![l.name, l.stylists, l.braiding, l.rating, l.total, l.received, l.pending]);
    }

    let mut out = String::new();
    if let Some(error) = &dashboard.error {
        out.push_str(&format!("Dashboard unavailable: {}\n", error));
    }
    out.push_str(&format!("\n{}\n", summary));
    if dashboard.location_source == LocationSource::Sample {
        out.push_str("Locations (sample data)\n");
    }
    out.push_str(&format!("{}\n", locations));
    out
}
