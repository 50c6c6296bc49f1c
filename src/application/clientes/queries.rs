use crate::domain::ClienteFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListClientesQuery {
    pub filter: ClienteFilter,
    pub page: PaginationParams,
}
