use crate::domain::IngresoFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListIngresosQuery {
    pub filter: IngresoFilter,
    pub page: PaginationParams,
}
