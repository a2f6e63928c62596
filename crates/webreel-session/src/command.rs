//! Typed command surface
//!
//! Every mutation of the session goes through one exhaustive dispatch
//! over a typed command enum. Adding a command without handling it is
//! a compile error, not a silently ignored message.

use serde::{Deserialize, Serialize};
use tracing::debug;
use webreel_correlate::ProtocolEvent;
use webreel_model::{ElementSnapshot, ExportDocument, ExportMode, InteractionLogEntry};

use crate::context::SessionContext;

/// Commands accepted by a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    StartLogging { tab_id: i64 },
    StopLogging,
    NetworkEvent { event: ProtocolEvent },
    RecordInteraction { entry: InteractionLogEntry },
    CaptureSnapshot { snapshot: ElementSnapshot },
    Export { mode: ExportMode },
    ClearAll,
    GetStatus,
}

/// What a dispatched command hands back to the caller.
#[derive(Debug)]
pub enum CommandOutcome {
    Ack,
    Status(Status),
    Export(Box<ExportDocument>),
}

/// Point-in-time view of the session, cheap enough to poll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub recording: bool,
    pub network_count: usize,
    pub interaction_count: usize,
    pub snapshot_count: usize,
}

/// Apply one command to the session. Dispatch itself is infallible:
/// commands that carry bad data are absorbed with a log line rather
/// than failing the caller.
pub fn dispatch(ctx: &mut SessionContext, command: Command) -> CommandOutcome {
    match command {
        Command::StartLogging { tab_id } => {
            ctx.start_logging(tab_id);
            CommandOutcome::Ack
        }
        Command::StopLogging => {
            ctx.stop_logging();
            CommandOutcome::Ack
        }
        Command::NetworkEvent { event } => {
            ctx.network_event(event);
            CommandOutcome::Ack
        }
        Command::RecordInteraction { entry } => {
            if !ctx.record_interaction(entry) {
                debug!("interaction dropped by throttle");
            }
            CommandOutcome::Ack
        }
        Command::CaptureSnapshot { snapshot } => {
            ctx.capture_snapshot(snapshot);
            CommandOutcome::Ack
        }
        Command::Export { mode } => {
            CommandOutcome::Export(Box::new(ctx.export_document(mode)))
        }
        Command::ClearAll => {
            ctx.clear_all();
            CommandOutcome::Ack
        }
        Command::GetStatus => CommandOutcome::Status(Status {
            recording: ctx.logging_active,
            network_count: ctx.correlator.len(),
            interaction_count: ctx.interactions.len(),
            snapshot_count: ctx.snapshots.len(),
        }),
    }
}
