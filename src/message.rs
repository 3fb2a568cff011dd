use crate::screens::Page;
use crate::store::TripStore;

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(Page),
    Reload,
    TripsLoaded(Result<TripStore, String>),
    StartDateChanged(String),
    EndDateChanged(String),
    StepStart(i64),
    StepEnd(i64),
    ResetRange,
}
