use chrono::NaiveDate;

use crate::domain::TrasteroFilter;
use crate::shared::PaginationParams;

#[derive(Debug, Clone, Default)]
pub struct ListTrasterosQuery {
    pub filter: TrasteroFilter,
    pub page: PaginationParams,
}

/// Units free for the whole `[fecha_inicio, fecha_fin]` window.
#[derive(Debug, Clone)]
pub struct DisponiblesQuery {
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub local_id: Option<i32>,
}
