//! Database entities module

pub mod cliente;
pub mod contrato;
pub mod direccion;
pub mod gasto;
pub mod ingreso;
pub mod local;
pub mod prestamo;
pub mod refresh_token;
pub mod trastero;
pub mod user;

pub use cliente::Entity as Cliente;
pub use contrato::Entity as Contrato;
pub use direccion::Entity as Direccion;
pub use gasto::Entity as Gasto;
pub use ingreso::Entity as Ingreso;
pub use local::Entity as Local;
pub use prestamo::Entity as Prestamo;
pub use refresh_token::Entity as RefreshToken;
pub use trastero::Entity as Trastero;
pub use user::Entity as User;
