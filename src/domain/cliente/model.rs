//! Cliente domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Cliente {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    /// Normalised (upper case, no separators)
    pub dni_nie: Option<String>,
    /// Normalised (lower case)
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: bool,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cliente {
    pub fn nombre_completo(&self) -> String {
        if self.apellidos.is_empty() {
            self.nombre.clone()
        } else {
            format!("{} {}", self.nombre, self.apellidos)
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCliente {
    pub nombre: String,
    pub apellidos: String,
    pub dni_nie: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub observaciones: Option<String>,
    pub rgpd_aceptado: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ClienteFilter {
    /// Matches nombre, apellidos, DNI/NIE or email
    pub search: Option<String>,
    pub activo: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente(apellidos: &str) -> Cliente {
        Cliente {
            id: 1,
            nombre: "Lucía".into(),
            apellidos: apellidos.into(),
            dni_nie: None,
            email: None,
            telefono: None,
            observaciones: None,
            rgpd_aceptado: true,
            activo: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn nombre_completo_joins_apellidos() {
        assert_eq!(cliente("Martín Gil").nombre_completo(), "Lucía Martín Gil");
        assert_eq!(cliente("").nombre_completo(), "Lucía");
    }
}
