//! Panel state machine: collapsed/expanded × enabled/disabled.
//!
//! The controller owns the store and the panel settings. The global settings
//! object stays with the host and is lent to each call that has to write the
//! fragment back.

use crate::errors::AppResult;
use crate::export::{ExportArtifact, ExportFormat, ExportLogic};
use crate::models::{PanelSettings, SessionRecord};
use crate::panel::action::{ActionOutcome, ClearOutcome, PanelAction};
use crate::panel::confirm::Confirm;
use crate::panel::view::{Expansion, PanelView};
use crate::settings::{self, GlobalSettings, SettingsHost};
use crate::store::{AppendOutcome, KeyValueStorage, LoadOutcome, SessionLogStore};
use chrono::NaiveDate;

pub const CLEAR_PROMPT: &str =
    "Clear ALL logged sessions? This action is irreversible and cannot be undone.";

/// What happened during boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootReport {
    pub settings: PanelSettings,
    pub load: LoadOutcome,
}

pub struct PanelController<S: KeyValueStorage> {
    store: SessionLogStore<S>,
    settings: PanelSettings,
    view: PanelView,
    renders: usize,
}

impl<S: KeyValueStorage> PanelController<S> {
    /// Restore settings, then load the log, then render once.
    ///
    /// The gate is set before loading so a session arriving right after boot
    /// is accepted or rejected according to the saved preference.
    pub fn boot(global: &GlobalSettings, mut store: SessionLogStore<S>) -> (Self, BootReport) {
        let settings = settings::deserialize(global);
        store.set_enabled(settings.enabled);

        let load = store.load_from_storage();

        let view = PanelView::render(&settings, store.compute_stats());
        let controller = Self {
            store,
            settings,
            view,
            renders: 1,
        };

        (controller, BootReport { settings, load })
    }

    pub fn settings(&self) -> PanelSettings {
        self.settings
    }

    pub fn expansion(&self) -> Expansion {
        Expansion::from_flag(self.settings.panel_expanded)
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    /// Number of full renders since boot.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn store(&self) -> &SessionLogStore<S> {
        &self.store
    }

    pub fn into_store(self) -> SessionLogStore<S> {
        self.store
    }

    /// Recompute the view from current store state.
    pub fn refresh(&mut self) -> &PanelView {
        self.view = PanelView::render(&self.settings, self.store.compute_stats());
        self.renders += 1;
        &self.view
    }

    /// Collapsed → Expanded. Stats may have moved while hidden, so the view
    /// is always re-rendered. Returns whether the state changed.
    ///
    /// Like `collapse` and `toggle`, the new settings are saved first; on a
    /// failed save the controller keeps its previous state.
    pub fn expand(&mut self, host: &mut dyn SettingsHost) -> AppResult<bool> {
        let changed = !self.settings.panel_expanded;
        if changed {
            let next = PanelSettings {
                panel_expanded: true,
                ..self.settings
            };
            write_through(host, &next)?;
            self.settings = next;
        }

        self.refresh();
        Ok(changed)
    }

    /// Expanded → Collapsed. Visual only.
    pub fn collapse(&mut self, host: &mut dyn SettingsHost) -> AppResult<bool> {
        if !self.settings.panel_expanded {
            return Ok(false);
        }

        let next = PanelSettings {
            panel_expanded: false,
            ..self.settings
        };
        write_through(host, &next)?;

        self.settings = next;
        self.view.expansion = Expansion::Collapsed;
        Ok(true)
    }

    /// Flip enabled/disabled. Existing records are left alone and nothing is
    /// backfilled when logging comes back on.
    pub fn toggle(&mut self, host: &mut dyn SettingsHost) -> AppResult<bool> {
        let next = PanelSettings {
            enabled: !self.settings.enabled,
            ..self.settings
        };
        write_through(host, &next)?;

        self.settings = next;
        self.store.set_enabled(next.enabled);
        self.view.enabled = next.enabled;
        Ok(next.enabled)
    }

    /// Entry point for the timer engine when a session completes.
    pub fn record_session(&mut self, record: SessionRecord) -> AppResult<AppendOutcome> {
        let outcome = self.store.append(record)?;
        if outcome.is_appended() {
            self.refresh();
        }
        Ok(outcome)
    }

    /// Build the export artifact. Does not mutate the log or settings.
    pub fn export_session_log(
        &self,
        format: ExportFormat,
        date: NaiveDate,
    ) -> AppResult<ExportArtifact> {
        ExportLogic::build(&self.store, format, date)
    }

    /// Erase the log, but only after `confirm` approves.
    pub fn clear_session_log(&mut self, confirm: &mut dyn Confirm) -> ClearOutcome {
        if !confirm.confirm(CLEAR_PROMPT) {
            return ClearOutcome::Declined;
        }

        let save = self.store.clear();
        self.refresh();
        ClearOutcome::Cleared(save)
    }

    /// Route a UI action to the matching operation.
    pub fn dispatch(
        &mut self,
        action: PanelAction,
        host: &mut dyn SettingsHost,
        confirm: &mut dyn Confirm,
    ) -> AppResult<ActionOutcome> {
        match action {
            PanelAction::Expand => Ok(ActionOutcome::Panel {
                changed: self.expand(host)?,
            }),
            PanelAction::Collapse => Ok(ActionOutcome::Panel {
                changed: self.collapse(host)?,
            }),
            PanelAction::Toggle => {
                self.toggle(host)?;
                Ok(ActionOutcome::Panel { changed: true })
            }
            PanelAction::Export { format, date } => Ok(ActionOutcome::Exported(
                self.export_session_log(format, date)?,
            )),
            PanelAction::Clear => Ok(ActionOutcome::Cleared(self.clear_session_log(confirm))),
        }
    }
}

fn write_through(host: &mut dyn SettingsHost, next: &PanelSettings) -> AppResult<()> {
    settings::embed(host.global_settings_mut(), next);
    host.save_all_settings()
}
