/// Console adapters for user-facing output
mod summary_presenter;

pub use summary_presenter::StderrSummaryPresenter;
