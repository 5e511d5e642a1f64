pub mod action;
pub mod confirm;
pub mod controller;
pub mod view;

pub use action::{ActionOutcome, ClearOutcome, PanelAction};
pub use confirm::{AssumeYes, Confirm};
pub use controller::{BootReport, PanelController};
pub use view::{Expansion, PanelView, RecentSessionRow};
