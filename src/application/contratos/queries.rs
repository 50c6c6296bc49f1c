use crate::domain::ContratoFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListContratosQuery {
    pub filter: ContratoFilter,
    pub page: PaginationParams,
}
