mod diagnostics;
mod dispatch;
mod facets;
mod history;
mod insight;
pub mod shared;
mod status;

pub use dispatch::dispatch;
