use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Direccion {
    pub id: i32,
    pub cliente_id: Option<i32>,
    /// Calle, Avenida, Plaza...
    pub tipo_via: Option<String>,
    pub nombre_via: String,
    pub numero: Option<String>,
    pub piso: Option<String>,
    pub puerta: Option<String>,
    pub codigo_postal: String,
    pub ciudad: String,
    pub provincia: Option<String>,
    pub pais: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Direccion {
    /// Single-line rendering, e.g. "Calle Mayor 5, 2º B, 28013 Madrid (Madrid)".
    pub fn one_line(&self) -> String {
        let mut out = String::new();
        if let Some(tipo) = &self.tipo_via {
            out.push_str(tipo);
            out.push(' ');
        }
        out.push_str(&self.nombre_via);
        if let Some(numero) = &self.numero {
            out.push(' ');
            out.push_str(numero);
        }
        match (&self.piso, &self.puerta) {
            (Some(piso), Some(puerta)) => out.push_str(&format!(", {}º {}", piso, puerta)),
            (Some(piso), None) => out.push_str(&format!(", {}º", piso)),
            (None, Some(puerta)) => out.push_str(&format!(", {}", puerta)),
            (None, None) => {}
        }
        out.push_str(&format!(", {} {}", self.codigo_postal, self.ciudad));
        if let Some(provincia) = &self.provincia {
            out.push_str(&format!(" ({})", provincia));
        }
        out
    }

    pub fn is_spain(&self) -> bool {
        is_spain(&self.pais)
    }
}

pub fn is_spain(pais: &str) -> bool {
    matches!(pais.trim().to_lowercase().as_str(), "españa" | "espana" | "spain" | "es")
}

#[derive(Debug, Clone)]
pub struct NewDireccion {
    pub cliente_id: Option<i32>,
    pub tipo_via: Option<String>,
    pub nombre_via: String,
    pub numero: Option<String>,
    pub piso: Option<String>,
    pub puerta: Option<String>,
    pub codigo_postal: String,
    pub ciudad: String,
    pub provincia: Option<String>,
    pub pais: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_includes_optional_parts() {
        let d = Direccion {
            id: 1,
            cliente_id: None,
            tipo_via: Some("Calle".into()),
            nombre_via: "Mayor".into(),
            numero: Some("5".into()),
            piso: Some("2".into()),
            puerta: Some("B".into()),
            codigo_postal: "28013".into(),
            ciudad: "Madrid".into(),
            provincia: Some("Madrid".into()),
            pais: "España".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(d.one_line(), "Calle Mayor 5, 2º B, 28013 Madrid (Madrid)");
        assert!(d.is_spain());
    }

    #[test]
    fn foreign_country_detection() {
        assert!(is_spain(" ES "));
        assert!(!is_spain("Portugal"));
    }
}
