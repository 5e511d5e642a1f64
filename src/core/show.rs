use crate::panel::PanelView;
use crate::store::RetentionPolicy;
use crate::ui::messages::{detail, header, info};
use crate::utils::colors::{colorize_flag, colorize_optional};
use crate::utils::date::format_for_display;
use crate::utils::table::{Column, Table};

pub struct ShowLogic;

impl ShowLogic {
    /// Print the panel. Collapsed: header and badge only.
    pub fn print(view: &PanelView, retention: RetentionPolicy) {
        let arrow = if view.expansion.is_expanded() { "▾" } else { "▸" };
        header(format!("{} Session Log [{}]", arrow, view.badge));

        if !view.expansion.is_expanded() {
            info("Panel collapsed (run `sessionlog expand` to show details).");
            return;
        }

        detail("Logging", colorize_flag(view.enabled));
        detail("Stats", &view.stats_text);
        detail("Retention", retention.describe());

        let first = view
            .stats
            .first_timestamp
            .as_ref()
            .map(format_for_display)
            .unwrap_or_default();
        let last = view
            .stats
            .last_timestamp
            .as_ref()
            .map(format_for_display)
            .unwrap_or_default();
        detail("First", colorize_optional(&first));
        detail("Last", colorize_optional(&last));

        println!();
        if view.recent.is_empty() {
            info("No recent sessions.");
            return;
        }

        let mut table = Table::new(vec![
            Column::new("When", 16),
            Column::new("Kind", 12),
            Column::new("Duration", 10),
        ]);
        for row in &view.recent {
            table.add_row(vec![row.when.clone(), row.kind.clone(), row.duration.clone()]);
        }

        println!("Recent sessions:");
        print!("{}", table.render());
    }
}
