use crate::domain::GastoFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListGastosQuery {
    pub filter: GastoFilter,
    pub page: PaginationParams,
}
