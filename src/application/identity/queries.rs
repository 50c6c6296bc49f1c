use crate::domain::UserFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub filter: UserFilter,
    pub page: PaginationParams,
}
