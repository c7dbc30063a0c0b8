use crate::table::WeekTable;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Mutex<WeekTable>>,
}

impl AppState {
    pub fn new(table: WeekTable) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
        }
    }
}
