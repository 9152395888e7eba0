//! In-memory local repository implementation.
//!
//! Stores lines, histograms and station ETAs in memory, suitable for unit
//! testing and local development. It can be seeded programmatically or from
//! a JSON seed file.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::RwLock;

use crate::api::{Direction, LineId, RouteShape};
use crate::db::models::{LineRecord, SeedData, StationEta};
use crate::db::repository::*;
use crate::models::RawHistogramRow;

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same underlying data.
///
/// # Example
/// ```
/// use subway_scheduler::api::{LineId, RouteShape};
/// use subway_scheduler::db::models::LineRecord;
/// use subway_scheduler::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// repo.insert_line(LineRecord {
///     id: LineId::new(1),
///     name: "Line 1".to_string(),
///     route_shape: RouteShape::RoundTrip,
///     train_count: 4,
/// });
/// assert_eq!(repo.line_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    lines: HashMap<LineId, LineRecord>,
    round_trip_histograms: HashMap<LineId, Vec<RawHistogramRow>>,
    circular_histograms: HashMap<(LineId, Direction), Vec<RawHistogramRow>>,
    station_etas: HashMap<LineId, Vec<StationEta>>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            lines: HashMap::new(),
            round_trip_histograms: HashMap::new(),
            circular_histograms: HashMap::new(),
            station_etas: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let repo = Self::new();
        repo.load_seed(seed);
        repo
    }

    /// Create a repository from a JSON seed file.
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to read seed file {}: {}",
                path.display(),
                e
            ))
        })?;
        let seed: SeedData = serde_json::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!(
                "Failed to parse seed file {}: {}",
                path.display(),
                e
            ))
        })?;

        validate_seed(&seed)?;

        info!("Loaded {} line(s) from {}", seed.lines.len(), path.display());
        Ok(Self::from_seed(seed))
    }

    /// Merge seed data into the repository, replacing lines with the same ID.
    pub fn load_seed(&self, seed: SeedData) {
        for entry in seed.lines {
            let line_id = entry.line.id;
            self.insert_line(entry.line);
            self.set_round_trip_histogram(line_id, entry.round_trip_histogram);
            self.set_circular_histogram(line_id, Direction::Outbound, entry.circular_histograms.outbound);
            self.set_circular_histogram(line_id, Direction::Inbound, entry.circular_histograms.inbound);
            self.set_station_etas(line_id, entry.stations);
        }
    }

    /// Insert or replace a line.
    pub fn insert_line(&self, line: LineRecord) {
        debug!("Storing line {} ({})", line.id, line.route_shape);
        self.data.write().lines.insert(line.id, line);
    }

    pub fn set_round_trip_histogram(&self, line_id: LineId, rows: Vec<RawHistogramRow>) {
        self.data.write().round_trip_histograms.insert(line_id, rows);
    }

    pub fn set_circular_histogram(
        &self,
        line_id: LineId,
        direction: Direction,
        rows: Vec<RawHistogramRow>,
    ) {
        self.data
            .write()
            .circular_histograms
            .insert((line_id, direction), rows);
    }

    pub fn set_station_etas(&self, line_id: LineId, etas: Vec<StationEta>) {
        self.data.write().station_etas.insert(line_id, etas);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Number of lines stored.
    pub fn line_count(&self) -> usize {
        self.data.read().lines.len()
    }

    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection("Local repository is unhealthy").with_operation(operation))
        }
    }
}

/// Reject seed files with repeated line IDs or histograms that do not match
/// the line's route shape.
pub fn validate_seed(seed: &SeedData) -> RepositoryResult<()> {
    let mut seen = HashSet::new();
    for entry in &seed.lines {
        let line = &entry.line;
        let context = || {
            ErrorContext::new("load_seed")
                .with_entity("line")
                .with_entity_id(line.id)
        };

        if !seen.insert(line.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Line {} appears more than once", line.id),
                context(),
            ));
        }

        let has_circular = !entry.circular_histograms.outbound.is_empty()
            || !entry.circular_histograms.inbound.is_empty();
        let mismatch = match line.route_shape {
            RouteShape::RoundTrip => has_circular,
            RouteShape::Circular => !entry.round_trip_histogram.is_empty(),
        };
        if mismatch {
            return Err(RepositoryError::validation_with_context(
                format!("Line {} carries histograms for the wrong route shape", line.id),
                context().with_details(format!("route_shape={}", line.route_shape)),
            ));
        }
    }
    Ok(())
}

#[async_trait]
impl LineRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn count_trains(&self, line_id: LineId) -> RepositoryResult<u32> {
        self.ensure_healthy("count_trains")?;
        Ok(self
            .data
            .read()
            .lines
            .get(&line_id)
            .map(|line| line.train_count)
            .unwrap_or(0))
    }

    async fn get_route_shape(&self, line_id: LineId) -> RepositoryResult<RouteShape> {
        self.ensure_healthy("get_route_shape")?;
        self.data
            .read()
            .lines
            .get(&line_id)
            .map(|line| line.route_shape)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Line {} not found", line_id),
                    ErrorContext::new("get_route_shape")
                        .with_entity("line")
                        .with_entity_id(line_id),
                )
            })
    }

    async fn list_station_etas(&self, line_id: LineId) -> RepositoryResult<Vec<StationEta>> {
        self.ensure_healthy("list_station_etas")?;
        Ok(self
            .data
            .read()
            .station_etas
            .get(&line_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl HistogramRepository for LocalRepository {
    async fn fetch_round_trip_histogram(
        &self,
        line_id: LineId,
    ) -> RepositoryResult<Vec<RawHistogramRow>> {
        self.ensure_healthy("fetch_round_trip_histogram")?;
        Ok(self
            .data
            .read()
            .round_trip_histograms
            .get(&line_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_circular_histogram(
        &self,
        line_id: LineId,
        direction: Direction,
    ) -> RepositoryResult<Vec<RawHistogramRow>> {
        self.ensure_healthy("fetch_circular_histogram")?;
        Ok(self
            .data
            .read()
            .circular_histograms
            .get(&(line_id, direction))
            .cloned()
            .unwrap_or_default())
    }
}
