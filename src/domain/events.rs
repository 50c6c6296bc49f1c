//! Domain events
//!
//! Flat, serialisable notifications published after a state change
//! has been persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    ClienteCreado(ClienteCreadoEvent),
    ContratoCreado(ContratoCreadoEvent),
    ContratoFinalizado(ContratoCerradoEvent),
    ContratoCancelado(ContratoCerradoEvent),
    TrasteroEstadoCambiado(TrasteroEstadoCambiadoEvent),
    IngresoRegistrado(IngresoRegistradoEvent),
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::ClienteCreado(_) => "cliente_creado",
            DomainEvent::ContratoCreado(_) => "contrato_creado",
            DomainEvent::ContratoFinalizado(_) => "contrato_finalizado",
            DomainEvent::ContratoCancelado(_) => "contrato_cancelado",
            DomainEvent::TrasteroEstadoCambiado(_) => "trastero_estado_cambiado",
            DomainEvent::IngresoRegistrado(_) => "ingreso_registrado",
        }
    }

    /// Id of the aggregate the event is about.
    pub fn aggregate_id(&self) -> i32 {
        match self {
            DomainEvent::ClienteCreado(e) => e.cliente_id,
            DomainEvent::ContratoCreado(e) => e.contrato_id,
            DomainEvent::ContratoFinalizado(e) | DomainEvent::ContratoCancelado(e) => e.contrato_id,
            DomainEvent::TrasteroEstadoCambiado(e) => e.trastero_id,
            DomainEvent::IngresoRegistrado(e) => e.ingreso_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteCreadoEvent {
    pub cliente_id: i32,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratoCreadoEvent {
    pub contrato_id: i32,
    pub trastero_id: i32,
    pub cliente_id: i32,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub precio_mensual: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratoCerradoEvent {
    pub contrato_id: i32,
    pub trastero_id: i32,
    pub fecha_fin: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrasteroEstadoCambiadoEvent {
    pub trastero_id: i32,
    pub estado_anterior: String,
    pub estado_nuevo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngresoRegistradoEvent {
    pub ingreso_id: i32,
    pub contrato_id: i32,
    pub importe: i64,
    pub fecha_pago: NaiveDate,
}

/// Event envelope delivered to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: DomainEvent,
}

impl EventMessage {
    pub fn new(event: DomainEvent) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_type_tag() {
        let msg = EventMessage::new(DomainEvent::ClienteCreado(ClienteCreadoEvent {
            cliente_id: 9,
            nombre: "Ana".into(),
        }));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "ClienteCreado");
        assert_eq!(json["data"]["cliente_id"], 9);
        assert!(json["id"].is_string());
        assert_eq!(msg.event.event_type(), "cliente_creado");
        assert_eq!(msg.event.aggregate_id(), 9);
    }
}
