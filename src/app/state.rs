//! Application State: zentrale Datenhaltung.

mod app_state;
mod highlight;
mod identification;
mod mode;
mod network_ops;
mod outbox;
mod selection;
mod session;
mod trace;
mod ui;
mod view;

pub use app_state::AppState;
pub use highlight::HighlightRegistry;
pub use identification::IdentificationState;
pub use mode::{InteractionMode, ModeGate};
pub use network_ops::NetworkOpsState;
pub use outbox::{BackendRejection, BackendRequest, Outbox, RequestTicket, TraceTarget};
pub use selection::SelectionSet;
pub use session::SessionState;
pub use trace::{PendingTrace, TraceCoordinator, TraceOutcome};
pub use ui::{Notification, NotificationLevel, UiState};
pub use view::{SurfaceBindings, ViewState};
