/// Domain services - stateful policies that carry no I/O
pub mod runtime_results_paginator;

pub use runtime_results_paginator::{PageOutcome, RuntimeResultsPaginator, DEFAULT_PAGE_LIMIT};
