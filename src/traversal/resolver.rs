use super::{TraversalError, TraversalResult};
use crate::iter::{CloseableIter, CloseableIterator, Flattened, Partitioned, Transform};
use crate::store::SharedStore;
use crate::types::{Auths, Edge, EntityIndex, Vertex};
use tracing::trace;

/// Fixed partition size for bulk entity fetches
///
/// Bounds both per-request cardinality against the store and the number of
/// entities buffered client-side at any moment.
pub const BATCH_SIZE: usize = 50;

/// Resolve an edge sequence into the vertices at its far endpoints
///
/// Projects each edge onto its "other" endpoint, partitions the endpoints
/// into batches of `BATCH_SIZE` preserving encounter order, and issues one
/// bulk fetch per batch. Each fetch is drained eagerly and closed before its
/// results are yielded, so at most one batch's entities are held in memory
/// while the overall sequence stays lazy.
///
/// No deduplication: callers see one vertex per qualifying edge, duplicates
/// included. A failed batch fetch aborts the sequence; already-yielded
/// vertices stay valid.
pub fn resolve_vertices<E>(
    edges: E,
    store: SharedStore,
    auths: Auths,
) -> CloseableIter<TraversalResult<Vertex>>
where
    E: CloseableIterator<Item = TraversalResult<Edge>> + 'static,
{
    let endpoints = Transform::new(edges, |item: TraversalResult<Edge>| {
        item.map(|edge| edge.other().clone())
    });
    let batches = Partitioned::new(endpoints, BATCH_SIZE);
    Box::new(Flattened::new(BatchFetch {
        source: batches,
        store,
        auths,
        batch: 0,
        failed: false,
    }))
}

/// One bulk fetch per endpoint partition
///
/// Yields each partition's resolved vertices as an eagerly-materialized
/// container; the surrounding `Flattened` hands them out one at a time.
/// After any failure the iterator fuses and closes its upstream.
struct BatchFetch<I> {
    source: I,
    store: SharedStore,
    auths: Auths,
    batch: usize,
    failed: bool,
}

impl<I> BatchFetch<I>
where
    I: CloseableIterator<Item = Vec<TraversalResult<EntityIndex>>>,
{
    fn abort(&mut self, error: TraversalError) -> Vec<TraversalResult<Vertex>> {
        self.failed = true;
        self.source.close();
        vec![Err(error)]
    }
}

impl<I> Iterator for BatchFetch<I>
where
    I: CloseableIterator<Item = Vec<TraversalResult<EntityIndex>>>,
{
    type Item = Vec<TraversalResult<Vertex>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let chunk = self.source.next()?;
        let batch = self.batch;
        self.batch += 1;

        // An upstream scan error lands here as an Err endpoint
        let indexes: TraversalResult<Vec<EntityIndex>> = chunk.into_iter().collect();
        let indexes = match indexes {
            Ok(indexes) => indexes,
            Err(error) => return Some(self.abort(error)),
        };

        trace!(batch, size = indexes.len(), "resolving vertex batch");

        let mut scan = match self.store.get(&indexes, None, &self.auths) {
            Ok(scan) => scan,
            Err(source) => return Some(self.abort(TraversalError::BatchFetch { batch, source })),
        };

        // Drain eagerly, then release the fetch before yielding anything:
        // the store resource lives no longer than its own batch
        let mut resolved = Vec::with_capacity(indexes.len());
        for item in &mut scan {
            match item {
                Ok(entity) => resolved.push(Ok(Vertex::new(entity))),
                Err(source) => {
                    self.failed = true;
                    resolved.push(Err(TraversalError::BatchFetch { batch, source }));
                    break;
                }
            }
        }
        scan.close();

        if self.failed {
            self.source.close();
        }
        Some(resolved)
    }
}

impl<I> CloseableIterator for BatchFetch<I>
where
    I: CloseableIterator<Item = Vec<TraversalResult<EntityIndex>>>,
{
    fn close(&mut self) {
        self.source.close();
    }
}
