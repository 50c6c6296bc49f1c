//! Audit log subscriber: writes every domain event to the tracing output.

use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::event_bus::SharedEventBus;
use crate::shared::ShutdownSignal;

/// Spawn a task that logs every published event until shutdown.
pub fn spawn_audit_subscriber(bus: SharedEventBus, shutdown: ShutdownSignal) -> JoinHandle<()> {
    let mut subscriber = bus.subscribe();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                msg = subscriber.recv() => {
                    let Some(msg) = msg else { break };
                    let payload = serde_json::to_string(&msg.event).unwrap_or_default();
                    info!(
                        target: "audit",
                        event_id = %msg.id,
                        event_type = msg.event.event_type(),
                        aggregate_id = msg.event.aggregate_id(),
                        %payload,
                        "Domain event"
                    );
                }
                _ = shutdown.wait() => break,
            }
        }
        debug!("Audit subscriber stopped");
    })
}
