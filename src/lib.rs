//! Booost: records stylists, braiding sessions and payments for a braiding
//! network and rolls them up into a dashboard.

pub mod aggregator;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod currency;
pub mod error;
pub mod query;
pub mod report;
pub mod responses;
pub mod sample;
pub mod storage;
pub mod writers;

use std::sync::Arc;

use booost_core::SheetStore;

use crate::{aggregator::Aggregator, bootstrap::Bootstrap, query::RecordQuery, writers::RecordWriter};

/// Every operation wired to the same injected store.
pub struct Backend {
    pub aggregator: Aggregator,
    pub writer: RecordWriter,
    pub query: RecordQuery,
    pub bootstrap: Bootstrap,
}

impl Backend {
    pub fn new(store: Arc<dyn SheetStore>) -> Self {
        Self {
            aggregator: Aggregator::new(store.clone()),
            writer: RecordWriter::new(store.clone()),
            query: RecordQuery::new(store.clone()),
            bootstrap: Bootstrap::new(store),
        }
    }
}
